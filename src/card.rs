//! Card types and deck utilities.

use core::fmt;
use core::str::FromStr;

use crate::error::{CardError, ParseCardError};

/// Card suit.
///
/// Variants are listed in deck order: a standard deck starts with every
/// spade, then hearts, diamonds and clubs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

/// Display colour of a suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Spades and clubs.
    Black,
    /// Hearts and diamonds.
    Red,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Returns the Unicode glyph for the suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Spades => '\u{2660}',
            Self::Hearts => '\u{2665}',
            Self::Diamonds => '\u{2666}',
            Self::Clubs => '\u{2663}',
        }
    }

    /// Returns the colour the suit is drawn in.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Spades | Self::Clubs => Color::Black,
            Self::Hearts | Self::Diamonds => Color::Red,
        }
    }

    const fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'S' | '\u{2660}' => Some(Self::Spades),
            'H' | '\u{2665}' => Some(Self::Hearts),
            'D' | '\u{2666}' => Some(Self::Diamonds),
            'C' | '\u{2663}' => Some(Self::Clubs),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Black => f.write_str("black"),
            Self::Red => f.write_str("red"),
        }
    }
}

/// Lowest rank (Ace).
pub const ACE: u8 = 1;
/// Highest rank (King).
pub const KING: u8 = 13;

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Custom decks may carry
    /// any value; ranks are only ever compared against each other.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Creates a new card, rejecting ranks outside `1..=13`.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if the rank is out of range.
    pub const fn try_new(suit: Suit, rank: u8) -> Result<Self, CardError> {
        if rank < ACE || rank > KING {
            return Err(CardError::InvalidRank(rank));
        }
        Ok(Self::new(suit, rank))
    }

    /// Returns the rank label shown to players (`ACE`, `2`..`10`, `JACK`,
    /// `QUEEN`, `KING`).
    ///
    /// Ranks outside the standard range are labelled `?`.
    #[must_use]
    pub const fn rank_label(&self) -> &'static str {
        match self.rank {
            1 => "ACE",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "JACK",
            12 => "QUEEN",
            13 => "KING",
            _ => "?",
        }
    }

    /// Returns the display colour of the card.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.rank_label(), self.suit.symbol())
    }
}

/// Parses short card notation: a rank followed by a suit letter or glyph.
///
/// Ranks are `A`, `2`..`10`, `J`, `Q`, `K`; suits are `S`, `H`, `D`, `C`
/// (case-insensitive) or the matching glyph.
///
/// ```
/// use hilo::{Card, Suit};
///
/// let card: Card = "10h".parse().unwrap();
/// assert_eq!(card, Card::new(Suit::Hearts, 10));
/// ```
impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let suit_char = chars.next_back().ok_or(ParseCardError::Empty)?;
        let rank_str = chars.as_str();
        if rank_str.is_empty() {
            return Err(ParseCardError::InvalidRank);
        }

        let rank = match rank_str {
            "A" | "a" => ACE,
            "J" | "j" => 11,
            "Q" | "q" => 12,
            "K" | "k" => KING,
            digits if digits.bytes().all(|b| b.is_ascii_digit()) => digits
                .parse::<u8>()
                .ok()
                .filter(|rank| (2..=10).contains(rank))
                .ok_or(ParseCardError::InvalidRank)?,
            _ => return Err(ParseCardError::InvalidRank),
        };
        let suit = Suit::from_letter(suit_char).ok_or(ParseCardError::InvalidSuit)?;

        Ok(Self::new(suit, rank))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Returns an iterator over the standard deck in suit-major, rank-ascending
/// order (ACE of spades first, KING of clubs last).
pub fn standard_deck() -> impl Iterator<Item = Card> {
    Suit::ALL
        .into_iter()
        .flat_map(|suit| (ACE..=KING).map(move |rank| Card::new(suit, rank)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_deck_order_is_suit_major() {
        let cards: alloc::vec::Vec<Card> = standard_deck().collect();
        assert_eq!(cards.len(), DECK_SIZE);
        assert_eq!(cards[0], Card::new(Suit::Spades, ACE));
        assert_eq!(cards[1], Card::new(Suit::Spades, 2));
        assert_eq!(cards[13], Card::new(Suit::Hearts, ACE));
        assert_eq!(cards[DECK_SIZE - 1], Card::new(Suit::Clubs, KING));
    }

    #[test]
    fn try_new_rejects_out_of_range_ranks() {
        assert_eq!(
            Card::try_new(Suit::Hearts, 0),
            Err(CardError::InvalidRank(0))
        );
        assert_eq!(
            Card::try_new(Suit::Hearts, 14),
            Err(CardError::InvalidRank(14))
        );
        assert!(Card::try_new(Suit::Hearts, 13).is_ok());
    }

    #[test]
    fn display_uses_label_and_glyph() {
        assert_eq!(
            alloc::format!("{}", Card::new(Suit::Spades, 1)),
            "ACE \u{2660}"
        );
        assert_eq!(
            alloc::format!("{}", Card::new(Suit::Diamonds, 12)),
            "QUEEN \u{2666}"
        );
        assert_eq!(Card::new(Suit::Clubs, 99).rank_label(), "?");
    }

    #[test]
    fn suit_colors() {
        assert_eq!(Suit::Spades.color(), Color::Black);
        assert_eq!(Suit::Clubs.color(), Color::Black);
        assert_eq!(Suit::Hearts.color(), Color::Red);
        assert_eq!(Suit::Diamonds.color(), Color::Red);
    }

    #[test]
    fn parse_short_notation() {
        assert_eq!("AS".parse::<Card>(), Ok(Card::new(Suit::Spades, 1)));
        assert_eq!("kd".parse::<Card>(), Ok(Card::new(Suit::Diamonds, 13)));
        assert_eq!("7\u{2663}".parse::<Card>(), Ok(Card::new(Suit::Clubs, 7)));
        assert_eq!("".parse::<Card>(), Err(ParseCardError::Empty));
        assert_eq!("S".parse::<Card>(), Err(ParseCardError::InvalidRank));
        assert_eq!("11H".parse::<Card>(), Err(ParseCardError::InvalidRank));
        assert_eq!("QX".parse::<Card>(), Err(ParseCardError::InvalidSuit));
    }

    #[test]
    fn parse_rejects_signed_ranks() {
        assert_eq!("+5s".parse::<Card>(), Err(ParseCardError::InvalidRank));
        assert_eq!("-5s".parse::<Card>(), Err(ParseCardError::InvalidRank));
        assert_eq!(" 5s".parse::<Card>(), Ok(Card::new(Suit::Spades, 5)));
    }
}
