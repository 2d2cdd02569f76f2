use tracing::{debug, trace};

use crate::card::Card;
use crate::guess::Guess;

use super::Game;

impl Game {
    /// Records a guess about the next card.
    ///
    /// The guess replaces any guess not yet scored. It is ignored when no
    /// card has been dealt (there is nothing to compare against) or when the
    /// game is done.
    ///
    /// Returns `true` if the guess was recorded.
    ///
    /// # Example
    ///
    /// ```
    /// use hilo::{Game, Guess};
    ///
    /// let mut game = Game::standard(7);
    /// assert!(!game.submit_guess(Guess::Higher));
    ///
    /// game.play_next_card();
    /// assert!(game.submit_guess(Guess::Higher));
    /// assert_eq!(game.pending_guess(), Some(Guess::Higher));
    /// ```
    pub fn submit_guess(&mut self, guess: Guess) -> bool {
        if !self.state().accepts_guess() {
            trace!(%guess, state = self.state().as_str(), "guess ignored");
            return false;
        }

        if let Some(previous) = self.pending_guess.replace(guess) {
            trace!(%previous, %guess, "unscored guess replaced");
        }
        true
    }

    /// Deals the next card, scoring the pending guess first.
    ///
    /// The pending guess is checked against the card about to be dealt and
    /// the card dealt before it, then cleared. Returns `None` without
    /// changing anything once every card has been dealt.
    ///
    /// # Example
    ///
    /// ```
    /// use hilo::{Card, Game, Guess, Suit};
    ///
    /// let mut game = Game::standard(7);
    /// game.play_next_card();
    /// game.submit_guess(Guess::Higher);
    ///
    /// assert_eq!(game.play_next_card(), Some(Card::new(Suit::Spades, 2)));
    /// assert_eq!(game.correct_guesses(), 1);
    /// ```
    pub fn play_next_card(&mut self) -> Option<Card> {
        let Some(next) = self.deck.next_card() else {
            trace!("deal ignored, deck exhausted");
            return None;
        };

        if let Some(guess) = self.pending_guess.take() {
            self.score(guess, next);
        }

        let card = self.deck.deal()?;
        debug!(
            card = %card,
            remaining = self.deck.remaining_len(),
            "card dealt"
        );
        Some(card)
    }

    fn score(&mut self, guess: Guess, next: Card) {
        // A pending guess implies a card has been dealt.
        let Some(last) = self.deck.last_played() else {
            return;
        };

        let correct = guess.is_correct(next, last);
        if correct {
            self.correct_guesses += 1;
        }
        debug!(
            %guess,
            actual = %Guess::between(next, last),
            correct,
            correct_guesses = self.correct_guesses,
            "guess scored"
        );
    }
}
