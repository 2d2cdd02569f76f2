//! Player predictions and how they are scored.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::card::Card;
use crate::error::ParseGuessError;

/// A prediction about the next card's rank relative to the last dealt card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Guess {
    /// Next card ranks above the last dealt card.
    Higher,
    /// Next card ranks below the last dealt card.
    Lower,
    /// Next card has the same rank as the last dealt card.
    Equal,
}

impl Guess {
    /// All guesses, in the order front ends offer them.
    pub const ALL: [Self; 3] = [Self::Higher, Self::Equal, Self::Lower];

    /// Returns the correct guess for `next` following `last`.
    ///
    /// Only ranks are compared; suits never matter.
    ///
    /// ```
    /// use hilo::{Card, Guess, Suit};
    ///
    /// let last = Card::new(Suit::Spades, 1);
    /// let next = Card::new(Suit::Spades, 2);
    /// assert_eq!(Guess::between(next, last), Guess::Higher);
    /// ```
    #[must_use]
    pub fn between(next: Card, last: Card) -> Self {
        match next.rank.cmp(&last.rank) {
            Ordering::Greater => Self::Higher,
            Ordering::Less => Self::Lower,
            Ordering::Equal => Self::Equal,
        }
    }

    /// Returns whether this guess is correct for `next` following `last`.
    #[must_use]
    pub fn is_correct(self, next: Card, last: Card) -> bool {
        Self::between(next, last) == self
    }

    /// Returns the label shown to players.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Higher => "Higher",
            Self::Lower => "Lower",
            Self::Equal => "Equal",
        }
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Guess {
    type Err = ParseGuessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("h") || s.eq_ignore_ascii_case("higher") {
            Ok(Self::Higher)
        } else if s.eq_ignore_ascii_case("l") || s.eq_ignore_ascii_case("lower") {
            Ok(Self::Lower)
        } else if s.eq_ignore_ascii_case("e") || s.eq_ignore_ascii_case("equal") {
            Ok(Self::Equal)
        } else {
            Err(ParseGuessError::Unknown)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    #[test]
    fn comparison_ignores_suit() {
        let last = Card::new(Suit::Hearts, 7);
        assert_eq!(Guess::between(Card::new(Suit::Spades, 7), last), Guess::Equal);
        assert_eq!(Guess::between(Card::new(Suit::Clubs, 8), last), Guess::Higher);
        assert_eq!(Guess::between(Card::new(Suit::Hearts, 1), last), Guess::Lower);
    }

    #[test]
    fn correctness_is_exact_match() {
        let last = Card::new(Suit::Diamonds, 10);
        let next = Card::new(Suit::Diamonds, 10);
        assert!(Guess::Equal.is_correct(next, last));
        assert!(!Guess::Higher.is_correct(next, last));
        assert!(!Guess::Lower.is_correct(next, last));
    }

    #[test]
    fn parse_accepts_words_and_letters() {
        assert_eq!("H".parse::<Guess>(), Ok(Guess::Higher));
        assert_eq!(" lower ".parse::<Guess>(), Ok(Guess::Lower));
        assert_eq!("Equal".parse::<Guess>(), Ok(Guess::Equal));
        assert_eq!("up".parse::<Guess>(), Err(ParseGuessError::Unknown));
    }

    #[test]
    fn every_guess_parses_from_its_first_letter() {
        for guess in Guess::ALL {
            let (key, _) = guess.label().split_at(1);
            assert_eq!(key.parse::<Guess>(), Ok(guess));
        }
        assert_eq!(Guess::ALL.len(), 3);
    }
}
