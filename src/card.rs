//! Card, rank, and suit types.

use alloc::string::{String, ToString};
use core::fmt;

use crate::error::ParseCardError;

/// Glyph shown for a face-down card.
pub const FACE_DOWN_GLYPH: char = '\u{1F0A0}';

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks in ascending order (A..K).
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Parses a rank from its one-character symbol, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`ParseCardError::InvalidRank`] if the symbol is not one of
    /// `A`, `2`..`9`, `T`, `J`, `Q`, `K`.
    pub fn from_symbol(symbol: char) -> Result<Self, ParseCardError> {
        match symbol.to_ascii_uppercase() {
            'A' => Ok(Self::Ace),
            '2' => Ok(Self::Two),
            '3' => Ok(Self::Three),
            '4' => Ok(Self::Four),
            '5' => Ok(Self::Five),
            '6' => Ok(Self::Six),
            '7' => Ok(Self::Seven),
            '8' => Ok(Self::Eight),
            '9' => Ok(Self::Nine),
            'T' => Ok(Self::Ten),
            'J' => Ok(Self::Jack),
            'Q' => Ok(Self::Queen),
            'K' => Ok(Self::King),
            _ => Err(ParseCardError::InvalidRank(symbol)),
        }
    }

    /// Returns the upper-case display symbol for this rank.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Ace => 'A',
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => 'T',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
        }
    }

    /// Returns the scoring value: A = 1, 2..9 = face value, T/J/Q/K = 10.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Ace => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 10,
        }
    }
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in deck-construction order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Parses a suit from its English name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`ParseCardError::InvalidSuit`] if the name is not one of
    /// `hearts`, `diamonds`, `clubs`, `spades`.
    pub fn from_name(name: &str) -> Result<Self, ParseCardError> {
        if name.eq_ignore_ascii_case("hearts") {
            Ok(Self::Hearts)
        } else if name.eq_ignore_ascii_case("diamonds") {
            Ok(Self::Diamonds)
        } else if name.eq_ignore_ascii_case("clubs") {
            Ok(Self::Clubs)
        } else if name.eq_ignore_ascii_case("spades") {
            Ok(Self::Spades)
        } else {
            Err(ParseCardError::InvalidSuit)
        }
    }

    /// Returns the display glyph for this suit.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Hearts => '\u{2661}',
            Self::Diamonds => '\u{2662}',
            Self::Clubs => '\u{2667}',
            Self::Spades => '\u{2664}',
        }
    }

    /// Returns the lower-case English name of this suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "hearts",
            Self::Diamonds => "diamonds",
            Self::Clubs => "clubs",
            Self::Spades => "spades",
        }
    }
}

/// A playing card with a display orientation.
///
/// Cards are created face-up; drawing from a [`Deck`](crate::Deck) deals
/// them face-down. Orientation affects display only, never scoring.
///
/// # Example
///
/// ```
/// use golfrs::{Card, Rank, Suit};
///
/// let card = Card::new(Rank::Ace, Suit::Hearts);
/// assert_eq!(card.value(), 1);
/// assert_eq!(card.render(), "A\u{2661}");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
    /// Display orientation.
    face_up: bool,
}

impl Card {
    /// Creates a new face-up card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            face_up: true,
        }
    }

    /// Creates a card from a rank symbol and a suit name.
    ///
    /// # Errors
    ///
    /// Returns [`ParseCardError::InvalidRank`] or
    /// [`ParseCardError::InvalidSuit`] for unrecognized symbols.
    pub fn from_symbols(rank: char, suit: &str) -> Result<Self, ParseCardError> {
        Ok(Self::new(Rank::from_symbol(rank)?, Suit::from_name(suit)?))
    }

    /// Returns whether the card is face-up.
    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Toggles the display orientation.
    pub const fn flip(&mut self) {
        self.face_up = !self.face_up;
    }

    /// Returns the scoring value of the card, regardless of orientation.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.rank.value()
    }

    /// Renders the card: rank symbol plus suit glyph when face-up, the
    /// card-back glyph when face-down.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.face_up {
            write!(f, "{}{}", self.rank.symbol(), self.suit.glyph())
        } else {
            write!(f, "{FACE_DOWN_GLYPH}")
        }
    }
}
