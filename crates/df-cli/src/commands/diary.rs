use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use df_core::diary::log::EMPTY_MESSAGE;

use crate::GlobalOpts;

pub fn list(opts: &GlobalOpts) -> Result<(), String> {
    let app = super::open_app(opts)?;
    let diary = app.diary();

    if diary.is_empty() {
        println!("  {EMPTY_MESSAGE}");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Date", "Keyword", "Luck"]);

    for entry in diary.entries() {
        let keyword = if entry.keyword.chars().count() > 40 {
            let short: String = entry.keyword.chars().take(37).collect();
            format!("{short}...")
        } else {
            entry.keyword.clone()
        };
        table.add_row(vec![
            entry.id.to_string(),
            entry.short_date(),
            keyword,
            format!("{}%", entry.luck),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} of {} entries", diary.len(), diary.capacity());

    Ok(())
}

pub fn remove(opts: &GlobalOpts, id: i64) -> Result<(), String> {
    let mut app = super::open_app(opts)?;
    let persisted = app.remove_diary(id);
    super::warn_unsaved("diary", persisted.warning);

    if persisted.value {
        println!("  {} entry {id}", "removed".green());
    } else {
        println!("  no entry with id {id}");
    }
    Ok(())
}

pub fn export(opts: &GlobalOpts, format: &str, output: Option<&Path>) -> Result<(), String> {
    let app = super::open_app(opts)?;

    let content = match format {
        "markdown" | "md" => app.diary().export_markdown(),
        "text" | "txt" => app.diary().export_text(),
        other => return Err(format!("unknown format \"{other}\" (expected markdown or text)")),
    };

    match output {
        Some(path) => {
            std::fs::write(path, &content)
                .map_err(|e| format!("cannot write {}: {e}", path.display()))?;
            println!("  exported diary to {}", path.display());
        }
        None => print!("{content}"),
    }

    Ok(())
}
