//! A high-low card guessing game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that deals a deck one card at a time
//! and scores the player's Higher / Lower / Equal guesses about each next
//! card against the card dealt before it.
//!
//! # Example
//!
//! ```
//! use hilo::{Game, GameOptions, Guess};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.play_next_card();
//! game.submit_guess(Guess::Higher);
//! game.play_next_card();
//! assert_eq!(game.correct_guesses(), 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod guess;
pub mod options;
pub mod snapshot;

// Re-export main types
pub use card::{Card, Color, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{CardError, ParseCardError, ParseGuessError};
pub use game::{Game, GameState};
pub use guess::Guess;
pub use options::GameOptions;
pub use snapshot::Snapshot;
