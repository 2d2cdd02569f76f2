//! Error types for card and guess conversions.
//!
//! Game transitions never fail: dealing after the deck is exhausted or
//! guessing before the first card is dealt is ignored rather than reported.

use thiserror::Error;

/// Errors that can occur when building a validated card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank is outside `1..=13`.
    #[error("invalid rank {0}, expected 1 through 13")]
    InvalidRank(u8),
}

/// Errors that can occur when parsing a card from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Input was empty.
    #[error("empty card notation")]
    Empty,
    /// Rank part was missing or not one of `A`, `2`..`10`, `J`, `Q`, `K`.
    #[error("invalid card rank")]
    InvalidRank,
    /// Suit part was not one of `S`, `H`, `D`, `C` or a suit glyph.
    #[error("invalid card suit")]
    InvalidSuit,
}

/// Errors that can occur when parsing a guess from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseGuessError {
    /// Input did not name a guess.
    #[error("unknown guess, expected higher, lower or equal")]
    Unknown,
}
