//! Static knowledge base of dream keywords, zodiac signs, and tarot cards.
//!
//! The catalog is loaded once at startup, validated, and never mutated. A
//! missing `default` dream entry or an entry without the fields the
//! composers need is a configuration error and aborts loading.
//!
//! The bundled data lives in `data/*.json`. A directory with files of the
//! same names can override any of the three sections:
//!
//! ```text
//! my-catalog/
//!     dreams.json   { "subjects": [ { "id": "뱀", ... }, { "id": "default", ... } ] }
//!     zodiac.json   { "signs": [...], "lucky_colors": [...], "time_advice": {...} }
//!     tarot.json    { "cards": [...] }
//! ```

pub mod dream;
pub mod tarot;
pub mod zodiac;

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

pub use dream::{DEFAULT_ID, Domain, Situation, SubjectEntry};
pub use tarot::{TarotCard, TarotFace};
pub use zodiac::{LuckyColor, MonthDay, TimeAdvice, ZodiacEntry, ZodiacTable};

use crate::error::{DfError, DfResult};

const BUILTIN_DREAMS: &str = include_str!("../../data/dreams.json");
const BUILTIN_ZODIAC: &str = include_str!("../../data/zodiac.json");
const BUILTIN_TAROT: &str = include_str!("../../data/tarot.json");

#[derive(Deserialize)]
struct DreamFile {
    subjects: Vec<SubjectEntry>,
}

#[derive(Deserialize)]
struct TarotFile {
    cards: Vec<TarotCard>,
}

/// The validated, read-only catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    dreams: Vec<SubjectEntry>,
    default_dream: SubjectEntry,
    zodiac: ZodiacTable,
    tarot: Vec<TarotCard>,
}

impl Catalog {
    /// Load the bundled catalog.
    pub fn builtin() -> DfResult<Self> {
        Self::from_json(BUILTIN_DREAMS, BUILTIN_ZODIAC, BUILTIN_TAROT)
    }

    /// Parse and validate the three catalog sections from JSON text.
    pub fn from_json(dreams: &str, zodiac: &str, tarot: &str) -> DfResult<Self> {
        let dreams: DreamFile = serde_json::from_str(dreams)?;
        let zodiac: ZodiacTable = serde_json::from_str(zodiac)?;
        let tarot: TarotFile = serde_json::from_str(tarot)?;
        Self::new(dreams.subjects, zodiac, tarot.cards)
    }

    /// Load from a directory, falling back to the bundled data for any of
    /// `dreams.json`, `zodiac.json`, `tarot.json` that does not exist.
    pub fn from_dir(dir: &Path) -> DfResult<Self> {
        let read = |name: &str, builtin: &'static str| -> DfResult<String> {
            let path = dir.join(name);
            if path.exists() {
                debug!(path = %path.display(), "loading catalog section");
                Ok(std::fs::read_to_string(path)?)
            } else {
                Ok(builtin.to_string())
            }
        };
        let dreams = read("dreams.json", BUILTIN_DREAMS)?;
        let zodiac = read("zodiac.json", BUILTIN_ZODIAC)?;
        let tarot = read("tarot.json", BUILTIN_TAROT)?;
        Self::from_json(&dreams, &zodiac, &tarot)
    }

    /// Build a catalog from already-parsed sections.
    ///
    /// `subjects` must contain exactly one entry with id [`DEFAULT_ID`]; it is
    /// split off from the matchable keywords.
    pub fn new(
        subjects: Vec<SubjectEntry>,
        zodiac: ZodiacTable,
        tarot: Vec<TarotCard>,
    ) -> DfResult<Self> {
        let mut seen = HashSet::new();
        for entry in &subjects {
            entry.validate()?;
            if !seen.insert(entry.id.as_str()) {
                return Err(DfError::DuplicateSubject(entry.id.clone()));
            }
        }

        let (defaults, dreams): (Vec<_>, Vec<_>) =
            subjects.into_iter().partition(SubjectEntry::is_default);
        let default_dream = defaults.into_iter().next().ok_or(DfError::MissingDefault)?;

        zodiac.validate()?;

        if tarot.is_empty() {
            return Err(DfError::EmptyCatalog("tarot cards"));
        }
        for card in &tarot {
            card.validate()?;
        }

        debug!(
            dreams = dreams.len(),
            signs = zodiac.signs.len(),
            cards = tarot.len(),
            "catalog loaded"
        );

        Ok(Self {
            dreams,
            default_dream,
            zodiac,
            tarot,
        })
    }

    /// Matchable dream keywords in catalog order (the default entry excluded).
    pub fn dreams(&self) -> &[SubjectEntry] {
        &self.dreams
    }

    /// The generic fallback entry.
    pub fn default_dream(&self) -> &SubjectEntry {
        &self.default_dream
    }

    /// Look up a dream keyword by exact id.
    pub fn dream(&self, id: &str) -> Option<&SubjectEntry> {
        self.dreams.iter().find(|e| e.id == id)
    }

    /// The zodiac section.
    pub fn zodiac(&self) -> &ZodiacTable {
        &self.zodiac
    }

    /// All zodiac signs.
    pub fn signs(&self) -> &[ZodiacEntry] {
        &self.zodiac.signs
    }

    /// Find a sign by display name or identifier.
    pub fn sign(&self, query: &str) -> DfResult<&ZodiacEntry> {
        self.zodiac
            .signs
            .iter()
            .find(|s| s.matches(query))
            .ok_or_else(|| DfError::UnknownZodiac(query.to_string()))
    }

    /// Find the sign a birthday falls under.
    pub fn zodiac_for_birthday(&self, month: u32, day: u32) -> DfResult<&ZodiacEntry> {
        self.zodiac
            .signs
            .iter()
            .find(|s| s.contains(month, day))
            .ok_or_else(|| DfError::UnknownZodiac(format!("{month}/{day}")))
    }

    /// The tarot deck.
    pub fn tarot(&self) -> &[TarotCard] {
        &self.tarot
    }
}
