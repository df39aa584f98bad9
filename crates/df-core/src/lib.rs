//! Deterministic dream, horoscope and tarot reading engine.
//!
//! A reading is a pure function of a catalog entry and a seed derived from
//! today's date plus the subject, so the same request gives the same text
//! all day and different text tomorrow. Provides keyword matching against a
//! dream catalog, single and combined dream readings, deep readings, daily
//! zodiac fortunes, tarot draws, share texts, and a bounded dream diary
//! persisted through a pluggable key-value store.

pub mod app;
pub mod catalog;
pub mod clock;
pub mod compose;
pub mod config;
pub mod diary;
pub mod error;
pub mod sampler;
pub mod seed;
pub mod store;

pub use app::FortuneApp;
pub use catalog::Catalog;
pub use clock::{Clock, FixedClock, SystemClock};
pub use compose::{DeepReading, FortuneReading, Reading, ReadingContext, TarotReading};
pub use config::AppConfig;
pub use diary::{Diary, DiaryEntry};
pub use error::{DfError, DfResult};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore, Persisted, Storage};
