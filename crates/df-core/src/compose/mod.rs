//! Reading composers.
//!
//! Each composer is a pure function of the catalog, the request, and a
//! [`ReadingContext`] (date, weekday, hour). All seeded choices for one
//! request derive from a single base seed plus fixed offsets, so the same
//! request on the same day reproduces byte-identical output. Tarot is the
//! exception and takes a caller-supplied random source.

pub mod deep;
pub mod dream;
pub mod matcher;
pub mod pools;
pub mod share;
pub mod tarot;
pub mod zodiac;

use chrono::NaiveDate;

use crate::clock::{Clock, DayPeriod};
use crate::sampler::{index, pick};

pub use deep::DeepReading;
pub use matcher::{MatchStage, Matches, match_keywords};
pub use tarot::TarotReading;
pub use zodiac::{FortuneReading, StarRatings};

/// Ambient time inputs for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingContext {
    /// Local date; part of every seed.
    pub date: NaiveDate,
    /// Day of the week, Sunday = 0.
    pub weekday: usize,
    /// Hour of the day, 0-23.
    pub hour: u32,
}

impl ReadingContext {
    /// Snapshot the clock.
    pub fn from_clock(clock: &dyn Clock) -> Self {
        Self {
            date: clock.today(),
            weekday: clock.weekday(),
            hour: clock.hour(),
        }
    }

    /// Part of the day.
    pub fn period(&self) -> DayPeriod {
        DayPeriod::from_hour(self.hour)
    }
}

/// Lucky attributes attached to a dream reading.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LuckyItems {
    /// Colour names, de-duplicated.
    pub colors: Vec<String>,
    /// Numbers in 1-45 plus the entries' own, de-duplicated.
    pub numbers: Vec<u32>,
    /// Direction, when the entry has one.
    pub direction: Option<String>,
    /// Lucky time window.
    pub time: String,
}

/// A composed dream reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    /// Display title.
    pub title: String,
    /// Sectioned body text, rendered verbatim.
    pub body: String,
    /// Final luck percentage, 0-100.
    pub luck: u8,
    /// Matched keyword ids; empty for the generic reading.
    pub matched: Vec<String>,
    /// Label recorded in the diary.
    pub label: String,
    /// Lucky attributes also present in `body`.
    pub lucky: LuckyItems,
}

impl Reading {
    /// Whether no keyword matched and the default entry was used.
    pub fn is_generic(&self) -> bool {
        self.matched.is_empty()
    }

    /// Whether several keywords were combined.
    pub fn is_combined(&self) -> bool {
        self.matched.len() > 1
    }

    /// The luck summary line shown under the body.
    pub fn luck_line(&self) -> String {
        if self.is_combined() {
            format!("🍀 오늘의 종합 행운지수 {}%", self.luck)
        } else {
            format!("🍀 오늘의 행운지수 {}%", self.luck)
        }
    }
}

/// Clamp a luck value into `[lo, hi]`.
pub(crate) fn clamp_luck(value: i64, lo: u8, hi: u8) -> u8 {
    value.clamp(i64::from(lo), i64::from(hi)) as u8
}

/// Rounded mean of base luck scores; 0 for an empty slice.
pub(crate) fn average_luck(bases: &[u8]) -> i64 {
    if bases.is_empty() {
        return 0;
    }
    let sum: u32 = bases.iter().map(|&b| u32::from(b)).sum();
    (f64::from(sum) / bases.len() as f64).round() as i64
}

/// Keep the first occurrence of each item.
pub(crate) fn unique<T: PartialEq>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut out = Vec::new();
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

/// A lucky number in 1-45.
pub(crate) fn lucky_number(seed: i64) -> u32 {
    index(seed, 45) as u32 + 1
}

/// Seeded extra colour, never one of `base` unless the pool is exhausted.
pub(crate) fn extra_color<S: AsRef<str>>(base: &[S], seed: i64) -> &'static str {
    let fresh: Vec<&'static str> = pools::EXTRA_COLORS
        .into_iter()
        .filter(|c| !base.iter().any(|b| b.as_ref() == *c))
        .collect();
    if fresh.is_empty() {
        *pick(&pools::EXTRA_COLORS, seed)
    } else {
        *pick(&fresh, seed)
    }
}

pub(crate) fn lucky_time(seed: i64) -> &'static str {
    *pick(&pools::LUCKY_TIMES, seed)
}

/// Morning, afternoon, and evening lines at offsets 0, 1, 2.
pub(crate) fn time_block(seed: i64) -> String {
    format!(
        "{}\n{}\n{}",
        pick(&pools::MORNING, seed),
        pick(&pools::AFTERNOON, seed + 1),
        pick(&pools::EVENING, seed + 2)
    )
}
