//! Daily zodiac fortunes.

use tracing::debug;

use super::{ReadingContext, lucky_number};
use crate::catalog::{LuckyColor, ZodiacEntry, ZodiacTable};
use crate::sampler::{pick, sample};
use crate::seed::daily_seed;

/// One-to-five star ratings per domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRatings {
    /// Love.
    pub love: u8,
    /// Money.
    pub money: u8,
    /// Work.
    pub work: u8,
    /// Overall luck.
    pub luck: u8,
}

impl StarRatings {
    fn from_seed(seed: i64) -> Self {
        let stars = |offset| sample(seed + offset, 1, 5) as u8;
        Self {
            love: stars(0),
            money: stars(1),
            work: stars(2),
            luck: stars(3),
        }
    }
}

/// Render a 1-5 rating as five filled or hollow stars.
pub fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// A composed zodiac fortune.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FortuneReading {
    /// Sign identifier.
    pub sign_id: String,
    /// Sign display name.
    pub sign_name: String,
    /// Sign glyph.
    pub icon: String,
    /// `"{name}의 오늘 ({dates})"`.
    pub title: String,
    /// Daily message, time-of-day advice, and the sign's profile.
    pub message: String,
    /// Star ratings.
    pub stars: StarRatings,
    /// Lucky colour.
    pub color: LuckyColor,
    /// Two lucky numbers in 1-45.
    pub numbers: [u32; 2],
}

impl FortuneReading {
    /// The two numbers as `"a, b"`.
    pub fn numbers_text(&self) -> String {
        format!("{}, {}", self.numbers[0], self.numbers[1])
    }
}

/// Compose today's fortune for `sign`.
///
/// The seed is `daily_seed(date, sign.name)`; ratings use offsets 0-3, the
/// message offset 0, time advice offset 10, colour offset 4, and the numbers
/// offsets 5 and 6.
pub fn fortune(sign: &ZodiacEntry, table: &ZodiacTable, ctx: &ReadingContext) -> FortuneReading {
    let seed = daily_seed(ctx.date, &sign.name);
    let stars = StarRatings::from_seed(seed);

    let main = pick(&sign.messages, seed);
    let time = pick(table.time_advice.pool(ctx.period()), seed + 10);
    let message = format!(
        "{main}\n\n⏰ 시간대 조언\n{time}\n\n📊 {name} 특징\n• 원소: {element} | 지배성: {ruling}\n• 성향: {traits}\n• 연애 스타일: {love}\n• 적합 분야: {career}",
        name = sign.name,
        element = sign.element,
        ruling = sign.ruling,
        traits = sign.traits,
        love = sign.love,
        career = sign.career,
    );

    debug!(sign = %sign.id, seed, "zodiac fortune composed");

    FortuneReading {
        sign_id: sign.id.clone(),
        sign_name: sign.name.clone(),
        icon: sign.icon.clone(),
        title: format!("{}의 오늘 ({})", sign.name, sign.dates),
        message,
        stars,
        color: pick(&table.lucky_colors, seed + 4).clone(),
        numbers: [lucky_number(seed + 5), lucky_number(seed + 6)],
    }
}
