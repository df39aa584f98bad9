//! Deep (psychological) dream readings.
//!
//! Uses the same matching and seed as the ordinary reading but produces a
//! structured result: psychology notes, a luck index, three recommended
//! actions, and lucky items. Deep readings are not recorded in the diary.

use tracing::debug;

use super::dream::join_numbers;
use super::matcher::match_keywords;
use super::{
    ReadingContext, average_luck, clamp_luck, extra_color, lucky_number, pools, unique,
};
use crate::catalog::Catalog;
use crate::error::{DfError, DfResult};
use crate::sampler::{pick, sample, shuffle_take};
use crate::seed::daily_seed;

/// Luck index when nothing matched.
pub const NEUTRAL_LUCK: u8 = 60;

/// A deep dream reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepReading {
    /// Display title.
    pub title: String,
    /// Matched keyword ids; empty when nothing matched.
    pub matched: Vec<String>,
    /// Psychological interpretation.
    pub psychology: String,
    /// Luck index, 20-100 (60 when nothing matched).
    pub luck: u8,
    /// Three recommended actions.
    pub actions: Vec<String>,
    /// Up to four lucky numbers.
    pub numbers: Vec<u32>,
    /// `"{base} & {extra}"` colour pair.
    pub color: String,
    /// Lucky direction.
    pub direction: String,
}

impl DeepReading {
    /// Plain-text rendering.
    pub fn body(&self) -> String {
        let mut out = format!("🧠 심리학적 의미\n{}\n\n", self.psychology);
        out.push_str(&format!("🌟 행운 지수: {}%\n\n", self.luck));
        out.push_str("✅ 추천 행동\n");
        for (i, action) in self.actions.iter().enumerate() {
            out.push_str(&format!("{}. {action}\n", i + 1));
        }
        out.push_str(&format!(
            "\n🔢 행운의 숫자: {}\n🎨 행운의 색상: {}\n🧭 행운의 방향: {}",
            join_numbers(&self.numbers),
            self.color,
            self.direction
        ));
        out
    }
}

/// Luck tier index into [`pools::ACTIONS`].
fn action_tier(luck: u8) -> usize {
    match luck {
        75.. => 0,
        50..=74 => 1,
        _ => 2,
    }
}

/// Compose a deep reading for free text.
pub fn interpret_deep(
    catalog: &Catalog,
    input: &str,
    ctx: &ReadingContext,
) -> DfResult<DeepReading> {
    let input = input.trim();
    if input.is_empty() {
        return Err(DfError::EmptyInput);
    }
    let seed = daily_seed(ctx.date, input);
    let matches = match_keywords(catalog, input);
    let entries = &matches.entries;

    let psychology = if entries.is_empty() {
        pools::GENERIC_PSYCHOLOGY.to_string()
    } else {
        let notes: Vec<&str> = entries
            .iter()
            .filter_map(|e| e.psychology.as_deref())
            .collect();
        if notes.is_empty() {
            pools::MATCHED_PSYCHOLOGY.to_string()
        } else {
            notes.join("\n\n")
        }
    };

    let luck = if entries.is_empty() {
        NEUTRAL_LUCK
    } else {
        let bases: Vec<u8> = entries.iter().map(|e| e.luck).collect();
        clamp_luck(average_luck(&bases) + sample(seed, -10, 15), 20, 100)
    };

    let actions = shuffle_take(&pools::ACTIONS[action_tier(luck)], seed, 3)
        .into_iter()
        .map(|a| a.to_string())
        .collect();

    let first = entries.first();
    let base_numbers = first
        .map(|e| e.lucky_numbers.clone())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| vec![7]);
    let numbers = unique(
        base_numbers
            .into_iter()
            .chain([lucky_number(seed), lucky_number(seed + 5)]),
    )
    .into_iter()
    .take(4)
    .collect();

    let base_color = first
        .and_then(|e| e.lucky_colors.first())
        .map_or("금색", String::as_str);
    let color = format!("{base_color} & {}", extra_color(&[base_color], seed));
    let direction = pick(&pools::DIRECTIONS, seed).to_string();

    debug!(input, seed, luck, matched = entries.len(), "deep reading composed");

    Ok(DeepReading {
        title: format!("\"{input}\" 심층 해몽"),
        matched: matches.ids(),
        psychology,
        luck,
        actions,
        numbers,
        color,
        direction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ctx() -> ReadingContext {
        ReadingContext {
            date: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
            weekday: 5,
            hour: 9,
        }
    }

    #[test]
    fn tiers() {
        assert_eq!(action_tier(100), 0);
        assert_eq!(action_tier(75), 0);
        assert_eq!(action_tier(74), 1);
        assert_eq!(action_tier(50), 1);
        assert_eq!(action_tier(49), 2);
        assert_eq!(action_tier(20), 2);
    }

    #[test]
    fn unmatched_is_neutral() {
        let catalog = Catalog::builtin().unwrap();
        let r = interpret_deep(&catalog, "xyzzy", &ctx()).unwrap();
        assert!(r.matched.is_empty());
        assert_eq!(r.luck, NEUTRAL_LUCK);
        assert_eq!(r.psychology, pools::GENERIC_PSYCHOLOGY);
        assert!(r.color.starts_with("금색 & "));
        assert_eq!(r.numbers[0], 7);
        assert_eq!(r.title, "\"xyzzy\" 심층 해몽");
    }

    #[test]
    fn extra_color_never_repeats_base() {
        let catalog = Catalog::builtin().unwrap();
        for day in 1..=28 {
            let date = NaiveDate::from_ymd_opt(2026, 3, day).unwrap();
            let ctx = ReadingContext {
                date,
                weekday: 0,
                hour: 9,
            };
            let r = interpret_deep(&catalog, "용", &ctx).unwrap();
            assert!(r.color.starts_with("금색 & "));
            assert_ne!(r.color, "금색 & 금색");
        }
    }

    #[test]
    fn matched_psychology_is_joined() {
        let catalog = Catalog::builtin().unwrap();
        let r = interpret_deep(&catalog, "뱀과 용", &ctx()).unwrap();
        assert_eq!(r.matched, vec!["뱀", "용"]);
        assert_eq!(r.psychology.matches("\n\n").count(), 1);
        assert!((20..=100).contains(&r.luck));
        assert!(r.color.starts_with("초록색 & "));
    }

    #[test]
    fn matched_without_psychology_uses_generic_note() {
        let catalog = Catalog::builtin().unwrap();
        let r = interpret_deep(&catalog, "돼지", &ctx()).unwrap();
        assert_eq!(r.psychology, pools::MATCHED_PSYCHOLOGY);
    }

    #[test]
    fn actions_are_three_distinct_from_tier() {
        let catalog = Catalog::builtin().unwrap();
        let r = interpret_deep(&catalog, "추락", &ctx()).unwrap();
        assert_eq!(r.actions.len(), 3);
        let tier = &pools::ACTIONS[action_tier(r.luck)];
        assert!(r.actions.iter().all(|a| tier.contains(&a.as_str())));
        let distinct = unique(r.actions.iter());
        assert_eq!(distinct.len(), 3);
    }

    #[test]
    fn deterministic_within_a_day() {
        let catalog = Catalog::builtin().unwrap();
        let a = interpret_deep(&catalog, "물", &ctx()).unwrap();
        let b = interpret_deep(&catalog, "물", &ctx()).unwrap();
        assert_eq!(a, b);
        assert!(a.numbers.len() <= 4);
        assert!(pools::DIRECTIONS.contains(&a.direction.as_str()));
    }

    #[test]
    fn body_lists_actions() {
        let catalog = Catalog::builtin().unwrap();
        let body = interpret_deep(&catalog, "용", &ctx()).unwrap().body();
        assert!(body.contains("1. "));
        assert!(body.contains("3. "));
        assert!(body.contains("🧭 행운의 방향: "));
    }

    #[test]
    fn blank_input_is_rejected() {
        let catalog = Catalog::builtin().unwrap();
        assert!(matches!(
            interpret_deep(&catalog, " ", &ctx()),
            Err(DfError::EmptyInput)
        ));
    }
}
