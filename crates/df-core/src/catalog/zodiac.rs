//! Zodiac signs, lucky colours, and time-of-day advice.

use serde::{Deserialize, Serialize};

use crate::clock::DayPeriod;
use crate::error::{DfError, DfResult};

/// A `(month, day)` pair, serialized as `[month, day]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonthDay(pub u32, pub u32);

impl MonthDay {
    fn is_valid(self) -> bool {
        (1..=12).contains(&self.0) && (1..=31).contains(&self.1)
    }
}

/// One zodiac sign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZodiacEntry {
    /// Lowercase English identifier ("aries").
    pub id: String,
    /// Display name ("양자리"); also the seed subject.
    pub name: String,
    /// Glyph.
    pub icon: String,
    /// Display date range.
    pub dates: String,
    /// First day of the sign.
    pub from: MonthDay,
    /// Last day of the sign.
    pub to: MonthDay,
    /// Classical element.
    pub element: String,
    /// Ruling planet.
    pub ruling: String,
    /// Personality summary.
    pub traits: String,
    /// Love style.
    pub love: String,
    /// Suitable careers.
    pub career: String,
    /// Daily message pool.
    pub messages: Vec<String>,
}

impl ZodiacEntry {
    /// Whether a birthday falls within this sign. Ranges that cross the new
    /// year (Capricorn) wrap around.
    pub fn contains(&self, month: u32, day: u32) -> bool {
        let date = MonthDay(month, day);
        if self.from <= self.to {
            self.from <= date && date <= self.to
        } else {
            date >= self.from || date <= self.to
        }
    }

    /// Match by display name or (case-insensitive) identifier.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        self.name == query || self.id.eq_ignore_ascii_case(query)
    }

    pub(crate) fn validate(&self) -> DfResult<()> {
        if self.name.trim().is_empty() || self.id.trim().is_empty() {
            return Err(DfError::invalid(&self.id, "zodiac sign needs id and name"));
        }
        if self.messages.is_empty() {
            return Err(DfError::invalid(&self.name, "no daily messages"));
        }
        if !self.from.is_valid() || !self.to.is_valid() {
            return Err(DfError::invalid(&self.name, "invalid date range"));
        }
        Ok(())
    }
}

/// A lucky colour with its meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuckyColor {
    /// Colour name.
    pub name: String,
    /// What the colour brings.
    pub meaning: String,
}

impl std::fmt::Display for LuckyColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.meaning)
    }
}

/// Advice pools per part of the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeAdvice {
    /// Before noon.
    pub morning: Vec<String>,
    /// Noon until 18:00.
    pub afternoon: Vec<String>,
    /// 18:00 and later.
    pub evening: Vec<String>,
}

impl TimeAdvice {
    /// Pool for `period`.
    pub fn pool(&self, period: DayPeriod) -> &[String] {
        match period {
            DayPeriod::Morning => &self.morning,
            DayPeriod::Afternoon => &self.afternoon,
            DayPeriod::Evening => &self.evening,
        }
    }
}

/// The zodiac section of the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZodiacTable {
    /// The twelve signs in calendar order (Aries first).
    pub signs: Vec<ZodiacEntry>,
    /// Lucky colour pool.
    pub lucky_colors: Vec<LuckyColor>,
    /// Time-of-day advice pools.
    pub time_advice: TimeAdvice,
}

impl ZodiacTable {
    pub(crate) fn validate(&self) -> DfResult<()> {
        if self.signs.is_empty() {
            return Err(DfError::EmptyCatalog("zodiac signs"));
        }
        if self.lucky_colors.is_empty() {
            return Err(DfError::EmptyCatalog("zodiac lucky colours"));
        }
        for period in [DayPeriod::Morning, DayPeriod::Afternoon, DayPeriod::Evening] {
            if self.time_advice.pool(period).is_empty() {
                return Err(DfError::EmptyCatalog("zodiac time advice"));
            }
        }
        let mut seen = std::collections::HashSet::new();
        for sign in &self.signs {
            sign.validate()?;
            if !seen.insert(sign.id.as_str()) {
                return Err(DfError::DuplicateSubject(sign.id.clone()));
            }
        }
        Ok(())
    }
}
