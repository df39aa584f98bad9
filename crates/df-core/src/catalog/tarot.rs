//! Tarot cards.

use serde::{Deserialize, Serialize};

use crate::error::{DfError, DfResult};

/// One orientation of a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TarotFace {
    /// Keywords.
    pub keyword: String,
    /// General meaning.
    pub meaning: String,
    /// Love reading.
    pub love: String,
    /// Career and money reading.
    pub career: String,
    /// Advice for today.
    pub advice: String,
}

/// A tarot card with upright and reversed readings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TarotCard {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Glyph shown when the card is turned.
    pub icon: String,
    /// Upright reading.
    pub upright: TarotFace,
    /// Reversed reading.
    pub reversed: TarotFace,
}

impl TarotCard {
    /// Reading for the given orientation.
    pub fn face(&self, reversed: bool) -> &TarotFace {
        if reversed {
            &self.reversed
        } else {
            &self.upright
        }
    }

    pub(crate) fn validate(&self) -> DfResult<()> {
        for face in [&self.upright, &self.reversed] {
            if face.keyword.trim().is_empty() || face.meaning.trim().is_empty() {
                return Err(DfError::invalid(&self.id, "tarot face needs keyword and meaning"));
            }
        }
        Ok(())
    }
}
