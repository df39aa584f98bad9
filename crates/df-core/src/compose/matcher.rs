//! Keyword matching of free text against the dream catalog.
//!
//! Matching runs in three stages and stops at the first that finds anything:
//!
//! 1. Containment: the input contains a catalog key. A single-word input of
//!    two or more characters also matches keys that contain it ("고양" finds
//!    "고양이").
//! 2. Token fallback: the input is split on whitespace and `, . : ; ! ?`,
//!    single-character tokens are dropped, and each token is tested for
//!    partial containment against every key.
//! 3. Nothing matched: the caller uses the catalog's default entry.
//!
//! Matches keep catalog order and never repeat.

use tracing::debug;

use crate::catalog::{Catalog, SubjectEntry};

/// Which stage produced the matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStage {
    /// Whole-input containment.
    Contains,
    /// Token-level partial containment.
    Tokens,
    /// No match; the default entry applies.
    Fallback,
}

/// Result of matching an input against the catalog.
#[derive(Debug, Clone)]
pub struct Matches<'a> {
    /// Matched entries in catalog order; empty for [`MatchStage::Fallback`].
    pub entries: Vec<&'a SubjectEntry>,
    /// Stage that produced `entries`.
    pub stage: MatchStage,
}

impl Matches<'_> {
    /// Matched identifiers.
    pub fn ids(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.id.clone()).collect()
    }
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | '.' | ':' | ';' | '!' | '?')
}

/// Tokens of two or more characters.
pub fn tokens(input: &str) -> Vec<&str> {
    input
        .split(is_separator)
        .filter(|w| w.chars().count() > 1)
        .collect()
}

fn is_short_input(input: &str) -> bool {
    input.chars().count() > 1 && !input.chars().any(is_separator)
}

/// Match `input` against the catalog's dream keywords.
pub fn match_keywords<'a>(catalog: &'a Catalog, input: &str) -> Matches<'a> {
    let input = input.trim();
    let short = is_short_input(input);

    let contained: Vec<&SubjectEntry> = catalog
        .dreams()
        .iter()
        .filter(|e| input.contains(e.id.as_str()) || (short && e.id.contains(input)))
        .collect();
    if !contained.is_empty() {
        debug!(input, matched = contained.len(), "keyword containment match");
        return Matches {
            entries: contained,
            stage: MatchStage::Contains,
        };
    }

    let mut partial: Vec<&SubjectEntry> = Vec::new();
    for token in tokens(input) {
        for entry in catalog.dreams() {
            let key = entry.id.as_str();
            let hit = key.contains(token) || token.contains(key);
            if hit && !partial.iter().any(|e| e.id == entry.id) {
                partial.push(entry);
            }
        }
    }
    if !partial.is_empty() {
        debug!(input, matched = partial.len(), "keyword token match");
        return Matches {
            entries: partial,
            stage: MatchStage::Tokens,
        };
    }

    debug!(input, "no keyword matched, using default entry");
    Matches {
        entries: Vec::new(),
        stage: MatchStage::Fallback,
    }
}
