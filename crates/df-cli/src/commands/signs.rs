use comfy_table::{ContentArrangement, Table};

use crate::GlobalOpts;

pub fn run(opts: &GlobalOpts) -> Result<(), String> {
    let catalog = super::load_catalog(opts)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["", "Sign", "Id", "Dates", "Element"]);

    for sign in catalog.signs() {
        table.add_row(vec![
            &sign.icon,
            &sign.name,
            &sign.id,
            &sign.dates,
            &sign.element,
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} signs", catalog.signs().len());

    Ok(())
}
