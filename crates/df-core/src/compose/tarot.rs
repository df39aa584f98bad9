//! Tarot draws.
//!
//! Unlike every other reading, a draw is not tied to the date: each call
//! picks a card uniformly from the deck and reverses it with probability
//! [`REVERSED_PROBABILITY`], using the supplied random source.

use rand::Rng;
use tracing::debug;

use super::pools::DIVIDER;
use crate::catalog::TarotCard;
use crate::error::{DfError, DfResult};

/// Chance that a drawn card is reversed.
pub const REVERSED_PROBABILITY: f64 = 0.3;

/// A drawn card and its reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TarotReading {
    /// Card identifier.
    pub card_id: String,
    /// Card glyph.
    pub icon: String,
    /// `"{name} (정방향)"` or `"{name} (역방향)"`.
    pub title: String,
    /// Whether the card came up reversed.
    pub reversed: bool,
    /// Keyword, meaning, love and career sections.
    pub body: String,
    /// Advice line.
    pub advice: String,
}

/// Compose the reading for `card` in the given orientation.
pub fn read_card(card: &TarotCard, reversed: bool) -> TarotReading {
    let face = card.face(reversed);
    let direction = if reversed { "(역방향)" } else { "(정방향)" };
    let body = format!(
        "🔑 키워드: {}\n\n📖 의미\n{}\n\n💕 연애 관점\n{}\n\n💼 직장/재정 관점\n{}\n\n{DIVIDER}",
        face.keyword, face.meaning, face.love, face.career
    );
    TarotReading {
        card_id: card.id.clone(),
        icon: card.icon.clone(),
        title: format!("{} {direction}", card.name),
        reversed,
        body,
        advice: format!("💫 오늘의 조언: {}", face.advice),
    }
}

/// Draw one card from `deck`.
pub fn draw<R: Rng>(deck: &[TarotCard], rng: &mut R) -> DfResult<TarotReading> {
    if deck.is_empty() {
        return Err(DfError::EmptyCatalog("tarot cards"));
    }
    let card = &deck[rng.random_range(0..deck.len())];
    let reversed = rng.random_bool(REVERSED_PROBABILITY);
    debug!(card = %card.id, reversed, "tarot card drawn");
    Ok(read_card(card, reversed))
}
