use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::GlobalOpts;

pub fn run(opts: &GlobalOpts, seed: Option<u64>) -> Result<(), String> {
    let app = super::open_app(opts)?;

    let reading = match seed {
        Some(seed) => app.draw_tarot(&mut StdRng::seed_from_u64(seed)),
        None => app.draw_tarot(&mut rand::rng()),
    }
    .map_err(|e| e.to_string())?;

    println!("  {} {}", reading.icon, reading.title.bold());
    println!();
    println!("{}", reading.body);
    println!("{}", reading.advice.cyan());
    Ok(())
}
