//! Game configuration options.

use alloc::vec::Vec;

use crate::card::Card;

/// Configuration options for a high-low game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use hilo::{Card, GameOptions, Suit};
///
/// let options = GameOptions::default()
///     .with_cards(vec![Card::new(Suit::Hearts, 5), Card::new(Suit::Clubs, 5)])
///     .with_deal_first_card(true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameOptions {
    /// Cards to deal, in order. Empty means the standard 52-card deck.
    pub cards: Vec<Card>,
    /// Whether the deck is shuffled once when the game is built.
    pub shuffle: bool,
    /// Whether the first card is dealt when the game is built, so a guess
    /// can be made straight away.
    pub deal_first_card: bool,
}

impl GameOptions {
    /// Options for the "new game" action of the front ends: a shuffled
    /// standard deck with the first card already on the table.
    ///
    /// # Example
    ///
    /// ```
    /// use hilo::GameOptions;
    ///
    /// let options = GameOptions::new_game();
    /// assert!(options.shuffle);
    /// assert!(options.deal_first_card);
    /// assert!(options.cards.is_empty());
    /// ```
    #[must_use]
    pub const fn new_game() -> Self {
        Self {
            cards: Vec::new(),
            shuffle: true,
            deal_first_card: true,
        }
    }

    /// Sets the cards to deal.
    ///
    /// The cards are used verbatim; no check is made that they form a
    /// standard deck.
    ///
    /// # Example
    ///
    /// ```
    /// use hilo::{Card, GameOptions, Suit};
    ///
    /// let options = GameOptions::default().with_cards(vec![Card::new(Suit::Spades, 3)]);
    /// assert_eq!(options.cards.len(), 1);
    /// ```
    #[must_use]
    pub fn with_cards(mut self, cards: Vec<Card>) -> Self {
        self.cards = cards;
        self
    }

    /// Sets whether the deck is shuffled when the game is built.
    ///
    /// # Example
    ///
    /// ```
    /// use hilo::GameOptions;
    ///
    /// let options = GameOptions::default().with_shuffle(true);
    /// assert!(options.shuffle);
    /// ```
    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Sets whether the first card is dealt when the game is built.
    ///
    /// # Example
    ///
    /// ```
    /// use hilo::GameOptions;
    ///
    /// let options = GameOptions::default().with_deal_first_card(true);
    /// assert!(options.deal_first_card);
    /// ```
    #[must_use]
    pub fn with_deal_first_card(mut self, deal: bool) -> Self {
        self.deal_first_card = deal;
        self
    }
}
