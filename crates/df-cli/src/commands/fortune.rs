use colored::Colorize;
use df_core::compose::zodiac::stars;

use crate::GlobalOpts;

/// Parse `MM-DD` (or `M-D`).
fn parse_birthday(s: &str) -> Result<(u32, u32), String> {
    let invalid = || format!("invalid birthday \"{s}\", expected MM-DD");
    let (m, d) = s.trim().split_once('-').ok_or_else(invalid)?;
    let month: u32 = m.parse().map_err(|_| invalid())?;
    let day: u32 = d.parse().map_err(|_| invalid())?;
    // 2024 is a leap year, so 02-29 is accepted.
    chrono::NaiveDate::from_ymd_opt(2024, month, day).ok_or_else(invalid)?;
    Ok((month, day))
}

pub fn run(
    opts: &GlobalOpts,
    sign: Option<&str>,
    birthday: Option<&str>,
    share: bool,
) -> Result<(), String> {
    let mut app = super::open_app(opts)?;

    let persisted = match birthday {
        Some(b) => {
            let (month, day) = parse_birthday(b)?;
            app.fortune_for_birthday(month, day)
        }
        None => app.fortune(sign),
    }
    .map_err(|e| match e {
        df_core::DfError::NoZodiacSelected => {
            "no zodiac sign selected; pass a sign (see `dreamfortune signs`)".to_string()
        }
        other => other.to_string(),
    })?;
    super::warn_unsaved("selected sign", persisted.warning);
    let fortune = persisted.value;

    if share {
        println!("{}", app.share_fortune(&fortune));
        return Ok(());
    }

    println!("  {} {}", fortune.icon, fortune.title.bold());
    println!();
    println!("  연애  {}", stars(fortune.stars.love).yellow());
    println!("  재물  {}", stars(fortune.stars.money).yellow());
    println!("  직장  {}", stars(fortune.stars.work).yellow());
    println!("  행운  {}", stars(fortune.stars.luck).yellow());
    println!();
    println!("{}", fortune.message);
    println!();
    println!("🎨 행운 색상: {}", fortune.color);
    println!("🔢 행운 숫자: {}", fortune.numbers_text());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn birthday_formats() {
        assert_eq!(parse_birthday("03-21"), Ok((3, 21)));
        assert_eq!(parse_birthday("2-29"), Ok((2, 29)));
        assert!(parse_birthday("13-01").is_err());
        assert!(parse_birthday("0431").is_err());
        assert!(parse_birthday("04-31").is_err());
    }
}
