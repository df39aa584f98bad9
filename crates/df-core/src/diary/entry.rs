//! Diary entry type.

use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One recorded dream reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiaryEntry {
    /// Unique id, a millisecond timestamp that only ever increases.
    pub id: i64,
    /// Matched keyword, comma-joined keywords, or the raw input.
    pub keyword: String,
    /// Luck percentage of the reading.
    pub luck: u8,
    /// When the reading was made (local time, ISO 8601).
    pub date: NaiveDateTime,
}

impl DiaryEntry {
    /// `month/day`, as shown in the diary list.
    pub fn short_date(&self) -> String {
        format!("{}/{}", self.date.month(), self.date.day())
    }
}
