//! Diary storage and export.

use chrono::NaiveDateTime;
use tracing::info;

use super::entry::DiaryEntry;
use crate::error::DfResult;
use crate::store::{DREAM_DIARY_KEY, Persisted, Storage};

/// Shown when the diary has no entries.
pub const EMPTY_MESSAGE: &str = "아직 해석한 꿈이 없습니다.";

/// A bounded, most-recent-first log of dream readings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diary {
    entries: Vec<DiaryEntry>,
    capacity: usize,
}

impl Diary {
    /// Create an empty diary holding at most `capacity` entries (at least 1).
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Wrap existing entries (newest first), dropping any beyond capacity.
    pub fn from_entries(mut entries: Vec<DiaryEntry>, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        entries.truncate(capacity);
        Self { entries, capacity }
    }

    /// Load the persisted diary. A missing or corrupt value yields an empty
    /// diary.
    pub fn load(storage: &Storage, capacity: usize) -> Self {
        let entries = storage
            .load::<Vec<DiaryEntry>>(DREAM_DIARY_KEY)
            .unwrap_or_default();
        Self::from_entries(entries, capacity)
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[DiaryEntry] {
        &self.entries
    }

    /// Maximum number of entries kept.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the diary is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find an entry by id.
    pub fn get(&self, id: i64) -> Option<&DiaryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    fn next_id(&self, at: NaiveDateTime) -> i64 {
        let stamp = at.and_utc().timestamp_millis();
        match self.entries.first() {
            Some(newest) if stamp <= newest.id => newest.id + 1,
            _ => stamp,
        }
    }

    /// Prepend a new entry and evict the oldest beyond capacity, in memory
    /// only.
    pub fn push(&mut self, label: &str, luck: u8, at: NaiveDateTime) -> DiaryEntry {
        let entry = DiaryEntry {
            id: self.next_id(at),
            keyword: label.to_string(),
            luck,
            date: at,
        };
        self.entries.insert(0, entry.clone());
        self.entries.truncate(self.capacity);
        entry
    }

    /// Delete the entry with `id`, in memory only. Returns whether one was
    /// removed.
    pub fn delete(&mut self, id: i64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Write the whole log through `storage`.
    pub fn save(&self, storage: &mut Storage) -> DfResult<()> {
        storage.save(DREAM_DIARY_KEY, &self.entries)
    }

    /// Record a reading and persist the log. The entry is kept even if the
    /// write fails.
    pub fn record(
        &mut self,
        storage: &mut Storage,
        label: &str,
        luck: u8,
        at: NaiveDateTime,
    ) -> Persisted<DiaryEntry> {
        let entry = self.push(label, luck, at);
        info!(id = entry.id, keyword = %entry.keyword, luck, "diary entry recorded");
        let write = self.save(storage);
        Persisted::from_write(entry, write)
    }

    /// Remove an entry by id and persist the log. Absent ids are not an
    /// error; the value says whether anything was removed.
    pub fn remove(&mut self, storage: &mut Storage, id: i64) -> Persisted<bool> {
        let removed = self.delete(id);
        if !removed {
            return Persisted::from_write(false, Ok(()));
        }
        info!(id, "diary entry removed");
        let write = self.save(storage);
        Persisted::from_write(true, write)
    }

    /// Export the diary as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# 꿈 일기\n\n");
        if self.entries.is_empty() {
            out.push_str(&format!("*{EMPTY_MESSAGE}*\n"));
            return out;
        }
        for entry in &self.entries {
            out.push_str(&format!(
                "- **{}** {} (행운 {}%)\n",
                entry.short_date(),
                entry.keyword,
                entry.luck
            ));
        }
        out
    }

    /// Export the diary as plain text.
    pub fn export_text(&self) -> String {
        let mut out = String::from("꿈 일기\n=======\n\n");
        if self.entries.is_empty() {
            out.push_str(EMPTY_MESSAGE);
            out.push('\n');
            return out;
        }
        for entry in &self.entries {
            out.push_str(&format!(
                "{}  {}  행운 {}%\n",
                entry.short_date(),
                entry.keyword,
                entry.luck
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::{Duration, NaiveDate};
    use proptest::prelude::*;

    fn at(minute: i64) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
            + Duration::minutes(minute)
    }

    #[test]
    fn empty_diary() {
        let d = Diary::new(20);
        assert!(d.is_empty());
        assert_eq!(d.len(), 0);
        assert_eq!(d.capacity(), 20);
    }

    #[test]
    fn newest_first() {
        let mut d = Diary::new(20);
        d.push("뱀", 80, at(0));
        d.push("용", 90, at(1));
        let labels: Vec<&str> = d.entries().iter().map(|e| e.keyword.as_str()).collect();
        assert_eq!(labels, vec!["용", "뱀"]);
    }

    #[test]
    fn ids_increase_even_at_the_same_instant() {
        let mut d = Diary::new(20);
        let a = d.push("a", 1, at(0));
        let b = d.push("b", 2, at(0));
        let c = d.push("c", 3, at(-5));
        assert!(b.id > a.id);
        assert!(c.id > b.id);
    }

    #[test]
    fn capacity_evicts_oldest() {
        let mut d = Diary::new(3);
        for i in 0..5 {
            d.push(&format!("k{i}"), 50, at(i));
        }
        let labels: Vec<&str> = d.entries().iter().map(|e| e.keyword.as_str()).collect();
        assert_eq!(labels, vec!["k4", "k3", "k2"]);
    }

    #[test]
    fn record_then_remove_keeps_others_in_order() {
        let mut storage = Storage::memory("test");
        let mut d = Diary::new(20);
        d.record(&mut storage, "a", 10, at(0));
        let b = d.record(&mut storage, "b", 20, at(1)).value;
        d.record(&mut storage, "c", 30, at(2));

        let removed = d.remove(&mut storage, b.id);
        assert!(removed.value);
        assert!(removed.is_saved());
        assert!(d.get(b.id).is_none());
        let labels: Vec<&str> = d.entries().iter().map(|e| e.keyword.as_str()).collect();
        assert_eq!(labels, vec!["c", "a"]);

        let reloaded = Diary::load(&storage, 20);
        assert_eq!(reloaded, d);
    }

    #[test]
    fn removing_unknown_id_is_not_an_error() {
        let mut storage = Storage::memory("test");
        let mut d = Diary::new(20);
        d.record(&mut storage, "a", 10, at(0));
        let r = d.remove(&mut storage, 42);
        assert!(!r.value);
        assert!(r.is_saved());
        assert_eq!(d.len(), 1);
    }

    #[test]
    fn failed_write_keeps_entry_and_warns() {
        let mut storage = Storage::new(Box::new(MemoryStore::failing()), "test");
        let mut d = Diary::new(20);
        let r = d.record(&mut storage, "뱀", 85, at(0));
        assert!(!r.is_saved());
        assert_eq!(d.len(), 1);
        assert_eq!(d.entries()[0], r.value);
    }

    #[test]
    fn load_truncates_oversized_log() {
        let mut storage = Storage::memory("test");
        let mut big = Diary::new(30);
        for i in 0..30 {
            big.push("k", 1, at(i));
        }
        big.save(&mut storage).unwrap();
        let d = Diary::load(&storage, 20);
        assert_eq!(d.len(), 20);
        assert_eq!(d.entries()[0], big.entries()[0]);
    }

    #[test]
    fn export_markdown_lists_entries() {
        let mut d = Diary::new(20);
        d.push("뱀, 물", 77, at(0));
        let md = d.export_markdown();
        assert!(md.starts_with("# 꿈 일기"));
        assert!(md.contains("- **10/16** 뱀, 물 (행운 77%)"));
    }

    #[test]
    fn export_text_lists_entries() {
        let mut d = Diary::new(20);
        d.push("용", 95, at(0));
        assert!(d.export_text().contains("10/16  용  행운 95%"));
    }

    #[test]
    fn export_empty() {
        let d = Diary::new(20);
        assert!(d.export_markdown().contains(EMPTY_MESSAGE));
        assert!(d.export_text().contains(EMPTY_MESSAGE));
    }

    proptest! {
        #[test]
        fn cap_holds_most_recent(n in 0usize..60, cap in 1usize..25) {
            let mut d = Diary::new(cap);
            let mut recorded = Vec::new();
            for i in 0..n {
                recorded.push(d.push(&format!("k{i}"), 50, at(i as i64)));
            }
            prop_assert!(d.len() <= cap);
            let expected: Vec<DiaryEntry> = recorded.into_iter().rev().take(cap).collect();
            prop_assert_eq!(d.entries(), expected.as_slice());
        }
    }
}
