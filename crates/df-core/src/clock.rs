//! Injectable wall clock.
//!
//! Readings depend on today's date (seed), the weekday (closing line), and
//! the current hour (zodiac time-of-day advice). Production code uses
//! [`SystemClock`]; tests and the CLI's `--date` flag use [`FixedClock`].

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, Timelike};

/// Source of the current local date and time.
pub trait Clock {
    /// The current local date and time.
    fn now(&self) -> NaiveDateTime;

    /// Today's date.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }

    /// Day of the week, Sunday = 0 through Saturday = 6.
    fn weekday(&self) -> usize {
        self.now().weekday().num_days_from_sunday() as usize
    }

    /// Hour of the day, 0-23.
    fn hour(&self) -> u32 {
        self.now().hour()
    }
}

/// The real local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Freeze the clock at `hour:00` on `date`.
    ///
    /// Hours past 23 are clamped to 23.
    pub fn at(date: NaiveDate, hour: u32) -> Self {
        let time = date
            .and_hms_opt(hour.min(23), 0, 0)
            .unwrap_or_else(|| date.and_time(chrono::NaiveTime::MIN));
        Self(time)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Part of the day used to choose time-of-day advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPeriod {
    /// Before noon.
    Morning,
    /// Noon until 18:00.
    Afternoon,
    /// 18:00 and later.
    Evening,
}

impl DayPeriod {
    /// Period containing `hour`.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            0..=11 => Self::Morning,
            12..=17 => Self::Afternoon,
            _ => Self::Evening,
        }
    }
}
