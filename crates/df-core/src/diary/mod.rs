//! Dream diary: a bounded history of dream readings.

pub mod entry;
pub mod log;

pub use entry::DiaryEntry;
pub use log::Diary;
