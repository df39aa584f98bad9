use colored::Colorize;

use crate::GlobalOpts;

pub fn run(opts: &GlobalOpts, text: &str, deep: bool, share: bool) -> Result<(), String> {
    let mut app = super::open_app(opts)?;

    if deep {
        let reading = app.deep_dream(text).map_err(|e| e.to_string())?;
        if share {
            println!("{}", app.share_deep(&reading));
            return Ok(());
        }
        println!("  {}", reading.title.bold());
        println!();
        println!("{}", reading.body());
        return Ok(());
    }

    let persisted = app.interpret_dream(text).map_err(|e| e.to_string())?;
    super::warn_unsaved("diary", persisted.warning);
    let reading = persisted.value;

    if share {
        println!("{}", app.share_dream(&reading));
        return Ok(());
    }

    println!("  {}", reading.title.bold());
    println!();
    println!("{}", reading.body);
    println!();
    println!("{}", reading.luck_line().green().bold());
    Ok(())
}
