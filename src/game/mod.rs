//! Game engine and phase management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::{DealError, FlipError, RevealError, ShowdownError};
use crate::options::GameOptions;
use crate::player::Player;
use crate::result::{Outcome, RoundResult};

mod play;
pub mod state;

pub use state::GamePhase;

/// Number of seated players.
pub const PLAYER_COUNT: usize = 2;

/// A two-player game that manages the deck, both hands, and the round flow.
///
/// The game owns the deck and player state. Use [`GameOptions`] to
/// configure hand size and reveal rounds.
///
/// # Example
///
/// ```no_run
/// use golfrs::{Game, GameOptions};
///
/// let options = GameOptions::default();
/// let game = Game::new(options, 42);
/// let _ = game;
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    /// The shared pool of undrawn cards.
    pub deck: Deck,
    /// Both players, seat order.
    pub players: [Player; 2],
    /// Game options.
    pub options: GameOptions,
    /// Current game phase.
    phase: GamePhase,
}

impl Game {
    /// Creates a new game with a freshly shuffled deck.
    ///
    /// The shuffle is driven by a `ChaCha8Rng` seeded with `seed`, so a
    /// given seed always produces the same deal.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);

        Self {
            deck,
            players: [Player::new("Player 1"), Player::new("Player 2")],
            options,
            phase: GamePhase::Setup,
        }
    }

    /// Returns the current game phase.
    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Deals each player their hand, alternating one card at a time.
    ///
    /// All dealt cards land face-down.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the setup phase or the deck
    /// holds fewer than `2 * hand_size` cards.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.phase != GamePhase::Setup {
            return Err(DealError::InvalidState);
        }
        if self.deck.len() < self.options.hand_size * PLAYER_COUNT {
            return Err(DealError::NotEnoughCards);
        }

        for _ in 0..self.options.hand_size {
            for player in &mut self.players {
                player
                    .draw_card(&mut self.deck, false)
                    .map_err(|_| DealError::NotEnoughCards)?;
            }
        }

        self.phase = GamePhase::Dealt;
        Ok(())
    }

    /// Advances to the next reveal round and returns its 1-based number.
    ///
    /// # Errors
    ///
    /// Returns an error if dealing has not happened yet or all reveal
    /// rounds have already been played.
    pub fn start_round(&mut self) -> Result<u8, RevealError> {
        let next = match self.phase {
            GamePhase::Dealt if self.options.reveal_rounds > 0 => 1,
            GamePhase::RevealRound(round) if round < self.options.reveal_rounds => round + 1,
            _ => return Err(RevealError::InvalidState),
        };
        self.phase = GamePhase::RevealRound(next);
        Ok(next)
    }

    /// Flips one of a player's cards face-up during a reveal round.
    ///
    /// `choice` is the 1-based index the player was prompted for.
    ///
    /// # Errors
    ///
    /// Returns an error if no reveal round is in progress, the player
    /// index is not a seat, the choice is outside the hand, or the chosen
    /// card is already face-up. The hand is unchanged on every error.
    pub fn flip(&mut self, player_index: usize, choice: usize) -> Result<(), FlipError> {
        if !matches!(self.phase, GamePhase::RevealRound(_)) {
            return Err(FlipError::InvalidState);
        }
        let player = self
            .players
            .get_mut(player_index)
            .ok_or(FlipError::PlayerNotFound)?;
        if choice == 0 || choice > self.options.hand_size {
            return Err(FlipError::OutOfRange);
        }
        player.flip_card(choice - 1)
    }

    /// Flips every remaining face-down card in both hands face-up.
    ///
    /// Already-face-up cards are left alone.
    ///
    /// # Errors
    ///
    /// Returns an error unless the final reveal round has finished (or no
    /// reveal rounds are configured and the hands are dealt).
    pub fn reveal_all(&mut self) -> Result<(), RevealError> {
        let done = match self.phase {
            GamePhase::RevealRound(round) => round == self.options.reveal_rounds,
            GamePhase::Dealt => self.options.reveal_rounds == 0,
            _ => false,
        };
        if !done {
            return Err(RevealError::InvalidState);
        }

        for player in &mut self.players {
            player.reveal_all();
        }
        self.phase = GamePhase::FinalReveal;
        Ok(())
    }

    /// Computes both scores and decides the winner. Lower total wins.
    ///
    /// # Errors
    ///
    /// Returns an error if the final reveal has not happened yet.
    pub fn showdown(&mut self) -> Result<RoundResult, ShowdownError> {
        if self.phase != GamePhase::FinalReveal {
            return Err(ShowdownError::InvalidState);
        }

        let scores = [self.players[0].score(), self.players[1].score()];
        let outcome = match scores[0].cmp(&scores[1]) {
            core::cmp::Ordering::Less => Outcome::PlayerOne,
            core::cmp::Ordering::Greater => Outcome::PlayerTwo,
            core::cmp::Ordering::Equal => Outcome::Tie,
        };

        self.phase = GamePhase::Scored;
        Ok(RoundResult { scores, outcome })
    }
}
