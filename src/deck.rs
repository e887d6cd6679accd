//! Deck construction, shuffling, and drawing.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DrawError;

/// An ordered deck of cards.
///
/// A fresh deck holds each (suit, rank) combination exactly once, built
/// suit-major (hearts, diamonds, clubs, spades), rank-minor (A..K), every
/// card face-up. Draws remove cards from the top; nothing is ever added
/// back.
///
/// # Example
///
/// ```
/// use golfrs::Deck;
///
/// let deck = Deck::new();
/// assert_eq!(deck.len(), 52);
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    /// Remaining cards. The last element is the top of the deck.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full ordered 52-card deck.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    /// Creates a deck with a fixed card sequence.
    ///
    /// The last card of `cards` is the first to be drawn. Useful for
    /// deterministic games in tests and demos.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Applies a uniform random permutation to the remaining cards.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card, forced face-down.
    ///
    /// Drawing represents dealing, and dealt cards always land face-down
    /// no matter how often they were flipped while in the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, DrawError> {
        let mut card = self.cards.pop().ok_or(DrawError::EmptyDeck)?;
        if card.is_face_up() {
            card.flip();
        }
        Ok(card)
    }

    /// Removes and returns the top card, forced face-up.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if no cards remain.
    pub fn draw_face_up(&mut self) -> Result<Card, DrawError> {
        let mut card = self.cards.pop().ok_or(DrawError::EmptyDeck)?;
        if !card.is_face_up() {
            card.flip();
        }
        Ok(card)
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of remaining cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
