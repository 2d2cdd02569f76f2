//! View state handed to front ends after each transition.

use crate::card::Card;
use crate::game::GameState;
use crate::guess::Guess;

/// An immutable view of a game, rebuilt after every transition.
///
/// Front ends render from snapshots only; the game itself stays private to
/// the controller that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    /// Current game state.
    pub state: GameState,
    /// The card on top of the played pile.
    pub current_card: Option<Card>,
    /// Number of correct guesses so far.
    pub correct_guesses: usize,
    /// Guess waiting to be scored on the next deal.
    pub pending_guess: Option<Guess>,
    /// Number of cards still to be dealt.
    pub cards_remaining: usize,
    /// Number of cards dealt.
    pub cards_played: usize,
}

impl Snapshot {
    /// Returns whether the game is over.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.state == GameState::Done
    }

    /// Returns whether the guess and deal actions should be offered.
    #[must_use]
    pub fn can_play(&self) -> bool {
        !self.is_done()
    }
}
