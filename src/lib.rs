//! A two-player six-card golf game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that manages the full round flow:
//! dealing six face-down cards to each player, two rounds of card reveals,
//! the final reveal, and the showdown where the lower hand total wins.
//! Console interaction goes through the injectable [`LineRead`] and
//! [`LineWrite`] interfaces, so games can run against the real terminal or
//! scripted fakes.
//!
//! # Example
//!
//! ```no_run
//! use golfrs::{ConsoleInput, ConsoleOutput, Game, GameOptions};
//!
//! let options = GameOptions::default();
//! let mut game = Game::new(options, 42);
//! let result = game.play(&mut ConsoleInput, &mut ConsoleOutput);
//! let _ = result;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod io;
pub mod options;
pub mod player;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, FACE_DOWN_GLYPH, Rank, Suit};
pub use deck::Deck;
pub use error::{
    DealError, DrawError, FlipError, ParseCardError, PlayError, RevealError, ShowdownError,
};
pub use game::{Game, GamePhase, PLAYER_COUNT};
#[cfg(feature = "std")]
pub use io::{ConsoleInput, ConsoleOutput};
pub use io::{LineRead, LineWrite};
pub use options::GameOptions;
pub use player::Player;
pub use result::{Outcome, RoundResult};
