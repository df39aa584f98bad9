//! Deterministic seed derivation.
//!
//! A reading is driven by one base seed computed from the date stamp and the
//! subject text. The hash is the classic `h = h * 31 + unit` polynomial over
//! UTF-16 code units, wrapped to a signed 32-bit integer after every step, so
//! the same text yields the same seed on every platform.

use chrono::NaiveDate;

/// Hash a string to a signed 32-bit value, widened to `i64`.
///
/// Seeds are widened so callers can add field offsets (`seed + 1`,
/// `seed + 7`, ...) without wrapping.
pub fn seed(text: &str) -> i64 {
    let hash = text
        .encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)));
    i64::from(hash)
}

/// Date stamp used as the seed prefix, e.g. `"Fri Oct 16 2026"`.
pub fn date_stamp(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

/// Seed for one `(date, subject)` pair.
pub fn daily_seed(date: NaiveDate, subject: &str) -> i64 {
    seed(&format!("{}{subject}", date_stamp(date)))
}
