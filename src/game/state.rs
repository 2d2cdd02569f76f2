//! Game state types.

/// Game state, derived from the deck and played cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Nothing has been dealt yet; guesses are ignored.
    Ready,
    /// At least one card has been dealt and more remain.
    InProgress,
    /// Every card has been dealt; guesses and deals are ignored.
    Done,
}

impl GameState {
    /// Returns whether a guess would be recorded in this state.
    #[must_use]
    pub const fn accepts_guess(self) -> bool {
        matches!(self, Self::InProgress)
    }

    /// Returns the name used by front ends.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ready => "Ready",
            Self::InProgress => "InProgress",
            Self::Done => "Done",
        }
    }
}
