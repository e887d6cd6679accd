//! Player state and hand rendering.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{DrawError, FlipError};
use crate::io::LineWrite;

/// Cards per display row.
const ROW_WIDTH: usize = 3;

/// A named player and their hand.
///
/// The hand keeps draw order; that order is what the user-facing 1-based
/// card choices refer to.
#[derive(Debug, Clone)]
pub struct Player {
    /// Display name.
    name: String,
    /// Cards in draw order.
    hand: Vec<Card>,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cards in the hand, in draw order.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Draws one card from the deck and appends it to the hand.
    ///
    /// `face_up` chooses the orientation the card lands with.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if the deck is exhausted.
    pub fn draw_card(&mut self, deck: &mut Deck, face_up: bool) -> Result<(), DrawError> {
        let card = if face_up {
            deck.draw_face_up()?
        } else {
            deck.draw()?
        };
        self.hand.push(card);
        Ok(())
    }

    /// Renders the hand as rows of at most three cards each.
    #[must_use]
    pub fn hand_rows(&self) -> Vec<String> {
        self.hand
            .chunks(ROW_WIDTH)
            .map(|row| {
                let rendered: Vec<String> = row.iter().map(Card::render).collect();
                rendered.join(" ")
            })
            .collect()
    }

    /// Writes the rendered hand to the given sink, one row per line.
    pub fn show_hand<W: LineWrite + ?Sized>(&self, out: &mut W) {
        for row in self.hand_rows() {
            out.write_line(&row);
        }
    }

    /// Flips the card at the given 0-based index face-up.
    ///
    /// # Errors
    ///
    /// Returns [`FlipError::OutOfRange`] if the index is outside the hand
    /// and [`FlipError::AlreadyFaceUp`] if the card is already revealed.
    /// The hand is unchanged in both cases.
    pub fn flip_card(&mut self, index: usize) -> Result<(), FlipError> {
        let card = self.hand.get_mut(index).ok_or(FlipError::OutOfRange)?;
        if card.is_face_up() {
            return Err(FlipError::AlreadyFaceUp);
        }
        card.flip();
        Ok(())
    }

    /// Flips every remaining face-down card face-up. Idempotent.
    pub fn reveal_all(&mut self) {
        for card in &mut self.hand {
            if !card.is_face_up() {
                card.flip();
            }
        }
    }

    /// Sums the scoring values of all cards in the hand.
    ///
    /// Orientation never affects the score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.hand.iter().map(|card| u32::from(card.value())).sum()
    }
}
