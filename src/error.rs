//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when building a card from loose symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Rank symbol is not one of the 13 recognized symbols.
    #[error("invalid rank symbol `{0}`")]
    InvalidRank(char),
    /// Suit name is not one of the 4 recognized names.
    #[error("invalid suit name")]
    InvalidSuit,
}

/// Errors that can occur when drawing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// No cards remain in the deck.
    #[error("no cards remain in the deck")]
    EmptyDeck,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game phase for dealing.
    #[error("invalid game phase for dealing")]
    InvalidState,
    /// Not enough cards in the deck to fill both hands.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur when flipping a hand card during a reveal round.
///
/// `OutOfRange` and `AlreadyFaceUp` are the recoverable rejections: the
/// hand is left unchanged and the player is prompted again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FlipError {
    /// Invalid game phase for flipping.
    #[error("invalid game phase for flipping")]
    InvalidState,
    /// Player index does not name a seated player.
    #[error("player not found")]
    PlayerNotFound,
    /// Choice is outside the hand.
    #[error("choice is outside the hand")]
    OutOfRange,
    /// The chosen card is already face-up.
    #[error("card is already face up")]
    AlreadyFaceUp,
}

/// Errors that can occur when advancing or closing the reveal rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RevealError {
    /// Invalid game phase for this transition.
    #[error("invalid game phase for this transition")]
    InvalidState,
}

/// Errors that can occur during the showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game phase for showdown.
    #[error("invalid game phase for showdown")]
    InvalidState,
}

/// Errors that can abort an interactive game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The input source reached end-of-input mid-game.
    #[error("console input was closed")]
    InputClosed,
    /// Dealing failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A flip failed for a non-recoverable reason.
    #[error(transparent)]
    Flip(#[from] FlipError),
    /// A reveal-round transition failed.
    #[error(transparent)]
    Reveal(#[from] RevealError),
    /// The showdown failed.
    #[error(transparent)]
    Showdown(#[from] ShowdownError),
}
