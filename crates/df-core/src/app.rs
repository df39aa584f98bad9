//! Application state.
//!
//! `FortuneApp` is built once at startup and handed to the UI layer. It owns
//! the read-only catalog, the injected clock, the persistent storage, and
//! the diary. Every reading goes through it so the ambient inputs (date,
//! weekday, hour) and persistence side effects stay in one place.

use rand::Rng;
use tracing::debug;

use crate::catalog::{Catalog, ZodiacEntry};
use crate::clock::Clock;
use crate::compose::{
    DeepReading, FortuneReading, Reading, ReadingContext, TarotReading, deep, dream, share,
    tarot, zodiac,
};
use crate::config::AppConfig;
use crate::diary::Diary;
use crate::error::{DfError, DfResult};
use crate::store::{Persisted, SELECTED_ZODIAC_KEY, Storage};

/// The dream, fortune and tarot application.
pub struct FortuneApp {
    catalog: Catalog,
    clock: Box<dyn Clock>,
    storage: Storage,
    diary: Diary,
    selected_zodiac: Option<String>,
    config: AppConfig,
}

impl FortuneApp {
    /// Create the app, restoring the diary and the selected sign from
    /// `storage`.
    pub fn new(
        catalog: Catalog,
        clock: Box<dyn Clock>,
        storage: Storage,
        config: AppConfig,
    ) -> Self {
        let diary = Diary::load(&storage, config.diary_capacity);
        let selected_zodiac = storage
            .load::<String>(SELECTED_ZODIAC_KEY)
            .filter(|name| catalog.sign(name).is_ok());
        debug!(
            diary = diary.len(),
            selected = ?selected_zodiac,
            "app state restored"
        );
        Self {
            catalog,
            clock,
            storage,
            diary,
            selected_zodiac,
            config,
        }
    }

    /// An app with in-memory storage and default configuration.
    pub fn in_memory(catalog: Catalog, clock: Box<dyn Clock>) -> Self {
        let config = AppConfig::default();
        let storage = Storage::memory(&config.namespace);
        Self::new(catalog, clock, storage, config)
    }

    /// The catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The diary, newest entry first.
    pub fn diary(&self) -> &Diary {
        &self.diary
    }

    /// Name of the last selected zodiac sign.
    pub fn selected_zodiac(&self) -> Option<&str> {
        self.selected_zodiac.as_deref()
    }

    /// Date, weekday and hour from the clock.
    pub fn context(&self) -> ReadingContext {
        ReadingContext::from_clock(self.clock.as_ref())
    }

    /// Interpret a dream and record it in the diary.
    ///
    /// Blank input is rejected with [`DfError::EmptyInput`]. A failed diary
    /// write is returned as a warning; the reading is still produced.
    pub fn interpret_dream(&mut self, input: &str) -> DfResult<Persisted<Reading>> {
        let reading = dream::interpret(&self.catalog, input, &self.context())?;
        let recorded = self.diary.record(
            &mut self.storage,
            &reading.label,
            reading.luck,
            self.clock.now(),
        );
        Ok(recorded.map(|_| reading))
    }

    /// Deep reading. Nothing is recorded.
    pub fn deep_dream(&self, input: &str) -> DfResult<DeepReading> {
        deep::interpret_deep(&self.catalog, input, &self.context())
    }

    /// Today's fortune for the sign named by `query`, or for the saved sign
    /// when `query` is `None`. A named sign becomes the saved selection.
    pub fn fortune(&mut self, query: Option<&str>) -> DfResult<Persisted<FortuneReading>> {
        let sign = match query {
            Some(query) => self.catalog.sign(query)?.clone(),
            None => {
                let name = self
                    .selected_zodiac
                    .as_deref()
                    .ok_or(DfError::NoZodiacSelected)?;
                self.catalog.sign(name)?.clone()
            }
        };
        Ok(self.fortune_for(&sign))
    }

    /// Today's fortune for the sign a birthday falls under.
    pub fn fortune_for_birthday(
        &mut self,
        month: u32,
        day: u32,
    ) -> DfResult<Persisted<FortuneReading>> {
        let sign = self.catalog.zodiac_for_birthday(month, day)?.clone();
        Ok(self.fortune_for(&sign))
    }

    fn fortune_for(&mut self, sign: &ZodiacEntry) -> Persisted<FortuneReading> {
        let reading = zodiac::fortune(sign, self.catalog.zodiac(), &self.context());
        let write = if self.selected_zodiac.as_deref() == Some(sign.name.as_str()) {
            Ok(())
        } else {
            self.selected_zodiac = Some(sign.name.clone());
            self.storage.save(SELECTED_ZODIAC_KEY, &sign.name)
        };
        Persisted::from_write(reading, write)
    }

    /// Draw a tarot card with `rng`.
    pub fn draw_tarot<R: Rng>(&self, rng: &mut R) -> DfResult<TarotReading> {
        tarot::draw(self.catalog.tarot(), rng)
    }

    /// Delete a diary entry. Absent ids are not an error.
    pub fn remove_diary(&mut self, id: i64) -> Persisted<bool> {
        self.diary.remove(&mut self.storage, id)
    }

    /// Share text for a dream reading.
    pub fn share_dream(&self, reading: &Reading) -> String {
        share::dream_text(reading, &self.config.share_url)
    }

    /// Share text for a zodiac fortune.
    pub fn share_fortune(&self, reading: &FortuneReading) -> String {
        share::fortune_text(reading, &self.config.share_url)
    }

    /// Share text for a deep reading.
    pub fn share_deep(&self, reading: &DeepReading) -> String {
        share::deep_text(reading, &self.config.share_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::store::{DREAM_DIARY_KEY, JsonFileStore, MemoryStore};
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn clock(day: u32) -> Box<dyn Clock> {
        Box::new(FixedClock::at(
            NaiveDate::from_ymd_opt(2026, 10, day).unwrap(),
            10,
        ))
    }

    fn app(day: u32) -> FortuneApp {
        FortuneApp::in_memory(Catalog::builtin().unwrap(), clock(day))
    }

    #[test]
    fn dream_is_recorded() {
        let mut app = app(16);
        let r = app.interpret_dream("뱀을 봤어요").unwrap();
        assert!(r.is_saved());
        assert_eq!(app.diary().len(), 1);
        let entry = &app.diary().entries()[0];
        assert_eq!(entry.keyword, "뱀");
        assert_eq!(entry.luck, r.value.luck);
    }

    #[test]
    fn generic_reading_is_recorded_with_input() {
        let mut app = app(16);
        let r = app.interpret_dream("xyzzy").unwrap();
        assert!(r.value.matched.is_empty());
        assert_eq!(app.diary().entries()[0].keyword, "xyzzy");
    }

    #[test]
    fn blank_dream_records_nothing() {
        let mut app = app(16);
        assert!(matches!(app.interpret_dream("  "), Err(DfError::EmptyInput)));
        assert!(app.diary().is_empty());
    }

    #[test]
    fn same_day_same_reading() {
        let mut app = app(16);
        let a = app.interpret_dream("뱀").unwrap().value;
        let b = app.interpret_dream("뱀").unwrap().value;
        assert_eq!(a.body, b.body);
        assert_eq!(a.luck, b.luck);
        assert_eq!(app.diary().len(), 2);
    }

    #[test]
    fn deep_reading_is_not_recorded() {
        let app_ = app(16);
        let deep = app_.deep_dream("용").unwrap();
        assert_eq!(deep.matched, vec!["용"]);
        assert!(app_.diary().is_empty());
    }

    #[test]
    fn diary_write_failure_is_a_warning() {
        let config = AppConfig::default();
        let storage = Storage::new(Box::new(MemoryStore::failing()), &config.namespace);
        let mut app = FortuneApp::new(Catalog::builtin().unwrap(), clock(16), storage, config);
        let r = app.interpret_dream("용").unwrap();
        assert!(matches!(r.warning, Some(DfError::Storage(_))));
        assert_eq!(app.diary().len(), 1);
    }

    #[test]
    fn unreadable_store_starts_empty_and_keeps_working() {
        let config = AppConfig::default();
        let backend = MemoryStore::unreadable()
            .with_item("dreamfortune.selectedZodiac", "\"leo\"")
            .with_item("dreamfortune.dreamDiary", "[]");
        let storage = Storage::new(Box::new(backend), &config.namespace);
        let mut app = FortuneApp::new(Catalog::builtin().unwrap(), clock(16), storage, config);
        assert!(app.diary().is_empty());
        assert_eq!(app.selected_zodiac(), None);

        for i in 0..26 {
            let input = if i % 2 == 0 { "뱀" } else { "용" };
            let r = app.interpret_dream(input).unwrap();
            assert!(!r.is_saved());
        }
        assert_eq!(app.diary().len(), 20);
        assert_eq!(app.diary().entries()[0].keyword, "용");

        let fortune = app.fortune(Some("leo")).unwrap();
        assert!(fortune.warning.is_some());
        assert_eq!(app.selected_zodiac(), Some("사자자리"));
    }

    #[test]
    fn diary_cap_from_config() {
        let config = AppConfig::default().with_diary_capacity(2);
        let storage = Storage::memory(&config.namespace);
        let mut app = FortuneApp::new(Catalog::builtin().unwrap(), clock(16), storage, config);
        for input in ["뱀", "용", "물"] {
            app.interpret_dream(input).unwrap();
        }
        let labels: Vec<&str> = app
            .diary()
            .entries()
            .iter()
            .map(|e| e.keyword.as_str())
            .collect();
        assert_eq!(labels, vec!["물", "용"]);
    }

    #[test]
    fn remove_diary_entry() {
        let mut app = app(16);
        app.interpret_dream("뱀").unwrap();
        app.interpret_dream("용").unwrap();
        let id = app.diary().entries()[1].id;
        assert!(app.remove_diary(id).value);
        assert_eq!(app.diary().len(), 1);
        assert_eq!(app.diary().entries()[0].keyword, "용");
        assert!(!app.remove_diary(id).value);
    }

    #[test]
    fn fortune_without_selection_fails() {
        let mut app = app(16);
        assert!(matches!(app.fortune(None), Err(DfError::NoZodiacSelected)));
    }

    #[test]
    fn fortune_selection_is_remembered() {
        let mut app = app(16);
        let first = app.fortune(Some("leo")).unwrap().value;
        assert_eq!(app.selected_zodiac(), Some("사자자리"));
        let again = app.fortune(None).unwrap().value;
        assert_eq!(first, again);
    }

    #[test]
    fn unknown_sign_is_an_error() {
        let mut app = app(16);
        assert!(matches!(
            app.fortune(Some("용자리")),
            Err(DfError::UnknownZodiac(_))
        ));
        assert_eq!(app.selected_zodiac(), None);
    }

    #[test]
    fn birthday_fortune_selects_sign() {
        let mut app = app(16);
        let r = app.fortune_for_birthday(12, 25).unwrap().value;
        assert_eq!(r.sign_id, "capricorn");
        assert_eq!(app.selected_zodiac(), Some("염소자리"));
    }

    #[test]
    fn state_survives_restart_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let open = |day| {
            let config = AppConfig::default();
            let store = JsonFileStore::open(dir.path()).unwrap();
            let storage = Storage::new(Box::new(store), &config.namespace);
            FortuneApp::new(Catalog::builtin().unwrap(), clock(day), storage, config)
        };
        {
            let mut app = open(16);
            app.interpret_dream("뱀").unwrap();
            app.fortune(Some("pisces")).unwrap();
        }
        let app = open(17);
        assert_eq!(app.diary().len(), 1);
        assert_eq!(app.selected_zodiac(), Some("물고기자리"));
        assert!(dir.path().join(format!("dreamfortune.{DREAM_DIARY_KEY}.json")).exists());
    }

    #[test]
    fn stale_selection_is_ignored() {
        let config = AppConfig::default();
        let backend =
            MemoryStore::new().with_item("dreamfortune.selectedZodiac", "\"뱀자리\"");
        let storage = Storage::new(Box::new(backend), &config.namespace);
        let app = FortuneApp::new(Catalog::builtin().unwrap(), clock(16), storage, config);
        assert_eq!(app.selected_zodiac(), None);
    }

    #[test]
    fn tarot_uses_supplied_rng() {
        let app = app(16);
        let mut a = StdRng::seed_from_u64(3);
        let mut b = StdRng::seed_from_u64(3);
        assert_eq!(app.draw_tarot(&mut a).unwrap(), app.draw_tarot(&mut b).unwrap());
    }

    #[test]
    fn share_texts_use_configured_url() {
        let mut app = app(16);
        let dream = app.interpret_dream("용").unwrap().value;
        assert!(app.share_dream(&dream).ends_with(&app.config().share_url));
        let fortune = app.fortune(Some("aries")).unwrap().value;
        assert!(app.share_fortune(&fortune).ends_with(&app.config().share_url));
        let deep = app.deep_dream("용").unwrap();
        assert!(app.share_deep(&deep).ends_with(&app.config().share_url));
    }
}
