//! Game configuration options.

/// Configuration options for a game.
///
/// The defaults reproduce the standard game: six cards per hand, two
/// reveal rounds, two flips per player per round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use golfrs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_hand_size(4)
///     .with_reveal_rounds(1);
/// assert_eq!(options.hand_size, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Cards dealt to each player.
    pub hand_size: usize,
    /// Number of reveal rounds before the showdown.
    pub reveal_rounds: u8,
    /// Flips each player makes per reveal round.
    pub flips_per_turn: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hand_size: 6,
            reveal_rounds: 2,
            flips_per_turn: 2,
        }
    }
}

impl GameOptions {
    /// Sets the number of cards dealt to each player.
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets the number of reveal rounds.
    #[must_use]
    pub const fn with_reveal_rounds(mut self, reveal_rounds: u8) -> Self {
        self.reveal_rounds = reveal_rounds;
        self
    }

    /// Sets the number of flips each player makes per reveal round.
    #[must_use]
    pub const fn with_flips_per_turn(mut self, flips_per_turn: u8) -> Self {
        self.flips_per_turn = flips_per_turn;
        self
    }
}
