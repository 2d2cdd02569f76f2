//! The remaining and played card piles.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, standard_deck};

/// A deck split into cards still to be dealt and cards already dealt.
///
/// Cards only ever move from the front of `remaining` to the end of
/// `played`, so the two piles together always hold the initial cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    remaining: VecDeque<Card>,
    played: Vec<Card>,
}

impl Deck {
    /// Creates the standard 52-card deck in suit-major, rank-ascending order.
    #[must_use]
    pub fn standard() -> Self {
        let mut remaining = VecDeque::with_capacity(DECK_SIZE);
        remaining.extend(standard_deck());
        Self {
            remaining,
            played: Vec::with_capacity(DECK_SIZE),
        }
    }

    /// Creates a deck that deals `cards` in the given order.
    ///
    /// The cards are not validated; duplicates and non-standard ranks are
    /// kept as supplied.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        let played = Vec::with_capacity(cards.len());
        Self {
            remaining: VecDeque::from(cards),
            played,
        }
    }

    /// Shuffles the cards that have not been dealt yet.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.remaining.make_contiguous().shuffle(rng);
    }

    /// Moves the next card onto the played pile and returns it.
    pub fn deal(&mut self) -> Option<Card> {
        let card = self.remaining.pop_front()?;
        self.played.push(card);
        Some(card)
    }

    /// Returns the card that will be dealt next.
    #[must_use]
    pub fn next_card(&self) -> Option<Card> {
        self.remaining.front().copied()
    }

    /// Returns the most recently dealt card.
    #[must_use]
    pub fn last_played(&self) -> Option<Card> {
        self.played.last().copied()
    }

    /// Returns the cards still to be dealt, next card first.
    pub fn remaining(&self) -> impl ExactSizeIterator<Item = &Card> {
        self.remaining.iter()
    }

    /// Returns the dealt cards, oldest first.
    #[must_use]
    pub fn played(&self) -> &[Card] {
        &self.played
    }

    /// Returns the number of cards still to be dealt.
    #[must_use]
    pub fn remaining_len(&self) -> usize {
        self.remaining.len()
    }

    /// Returns the number of cards in the deck, dealt or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.remaining.len() + self.played.len()
    }

    /// Returns `true` if the deck holds no cards at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` once every card has been dealt.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining.is_empty()
    }
}
