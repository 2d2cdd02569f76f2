//! Game engine and state management.

use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::card::Card;
use crate::deck::Deck;
use crate::guess::Guess;
use crate::options::GameOptions;
use crate::snapshot::Snapshot;

mod play;
pub mod state;

pub use state::GameState;

/// A high-low game engine.
///
/// The game owns the deck, the pending guess and the score. All transitions
/// take `&mut self`; one engine serves one game and is thrown away when a new
/// game starts.
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards still to be dealt and cards already dealt.
    deck: Deck,
    /// Guess waiting to be scored on the next deal.
    pending_guess: Option<Guess>,
    /// Number of guesses scored as correct.
    correct_guesses: usize,
    /// Random number generator used by [`Game::shuffle`].
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// The seed only drives shuffling. With default options the deck is the
    /// standard 52 cards in suit-major order and nothing is dealt.
    ///
    /// # Example
    ///
    /// ```
    /// use hilo::{Card, Game, GameOptions, Suit};
    ///
    /// let mut game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.play_next_card(), Some(Card::new(Suit::Spades, 1)));
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let GameOptions {
            cards,
            shuffle,
            deal_first_card,
        } = options;

        let deck = if cards.is_empty() {
            Deck::standard()
        } else {
            Deck::from_cards(cards)
        };

        let mut game = Self {
            deck,
            pending_guess: None,
            correct_guesses: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        debug!(cards = game.deck.len(), seed, "game created");

        if shuffle {
            game.shuffle();
        }
        if deal_first_card {
            game.play_next_card();
        }

        game
    }

    /// Creates a new game seeded from `rng`.
    ///
    /// Front ends keep one RNG for the whole session and build every new
    /// game from it, so consecutive games never repeat a shuffle.
    ///
    /// # Example
    ///
    /// ```
    /// use hilo::{Game, GameOptions};
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(1);
    /// let first = Game::from_rng(GameOptions::new_game(), &mut rng);
    /// let second = Game::from_rng(GameOptions::new_game(), &mut rng);
    /// assert!(!first.remaining().eq(second.remaining()));
    /// ```
    #[must_use]
    pub fn from_rng<R: Rng + ?Sized>(options: GameOptions, rng: &mut R) -> Self {
        Self::new(options, rng.next_u64())
    }

    /// Creates an unshuffled game over the standard deck.
    #[must_use]
    pub fn standard(seed: u64) -> Self {
        Self::new(GameOptions::default(), seed)
    }

    /// Creates an unshuffled game that deals `cards` in order.
    ///
    /// An empty list falls back to the standard deck.
    #[must_use]
    pub fn with_cards(cards: Vec<Card>, seed: u64) -> Self {
        Self::new(GameOptions::default().with_cards(cards), seed)
    }

    /// Shuffles the cards not yet dealt using the game's own RNG.
    ///
    /// Dealt cards and the score are untouched.
    pub fn shuffle(&mut self) {
        self.deck.shuffle(&mut self.rng);
    }

    /// Shuffles the cards not yet dealt using the supplied RNG.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.deck.shuffle(rng);
    }

    /// Returns whether every card has been dealt.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.deck.is_exhausted()
    }

    /// Returns the current game state.
    #[must_use]
    pub fn state(&self) -> GameState {
        if self.deck.is_exhausted() {
            GameState::Done
        } else if self.deck.played().is_empty() {
            GameState::Ready
        } else {
            GameState::InProgress
        }
    }

    /// Returns the most recently dealt card.
    #[must_use]
    pub fn current_card(&self) -> Option<Card> {
        self.deck.last_played()
    }

    /// Returns the guess waiting to be scored.
    #[must_use]
    pub const fn pending_guess(&self) -> Option<Guess> {
        self.pending_guess
    }

    /// Returns the number of correct guesses so far.
    #[must_use]
    pub const fn correct_guesses(&self) -> usize {
        self.correct_guesses
    }

    /// Returns the cards still to be dealt, next card first.
    pub fn remaining(&self) -> impl ExactSizeIterator<Item = &Card> {
        self.deck.remaining()
    }

    /// Returns the dealt cards, oldest first.
    #[must_use]
    pub fn played(&self) -> &[Card] {
        self.deck.played()
    }

    /// Returns the number of cards still to be dealt.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining_len()
    }

    /// Returns the number of cards dealt.
    #[must_use]
    pub fn cards_played(&self) -> usize {
        self.deck.played().len()
    }

    /// Returns a view of the game for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state(),
            current_card: self.current_card(),
            correct_guesses: self.correct_guesses,
            pending_guess: self.pending_guess,
            cards_remaining: self.cards_remaining(),
            cards_played: self.cards_played(),
        }
    }
}

