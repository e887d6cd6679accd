//! Interactive game loop over injected line I/O.

use alloc::format;

use crate::error::{FlipError, PlayError};
use crate::io::{LineRead, LineWrite};
use crate::result::{Outcome, RoundResult};

use super::{Game, GamePhase};

impl Game {
    /// Plays a full game against the given input source and output sink.
    ///
    /// Deals both hands, runs the reveal rounds with validated
    /// re-prompting, reveals the remaining cards, prints both scores, and
    /// announces the winner. Invalid choices (out of range, already
    /// face-up, or not a number) never abort the game; the player is
    /// prompted again.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::InputClosed`] if the input source ends before
    /// the game does, or the underlying phase error if the game was not in
    /// the setup phase.
    pub fn play<R, W>(&mut self, input: &mut R, output: &mut W) -> Result<RoundResult, PlayError>
    where
        R: LineRead + ?Sized,
        W: LineWrite + ?Sized,
    {
        self.deal()?;

        output.write_line("Player 1's hand (face down):");
        self.players[0].show_hand(output);
        output.write_line("=============================");
        output.write_line("");
        output.write_line("Player 2's hand (face down):");
        self.players[1].show_hand(output);

        output.write_line("");
        output.write_line(&format!(
            "Players choose two cards to flip (1-{}):",
            self.options.hand_size
        ));

        for _ in 0..self.options.reveal_rounds {
            self.start_round()?;
            for player_index in 0..self.players.len() {
                output.write_line("");
                output.write_line(&format!("{}'s turn:", self.players[player_index].name()));
                for _ in 0..self.options.flips_per_turn {
                    self.prompt_flip(player_index, input, output)?;
                }
                self.show_hands(output);
            }
        }

        self.reveal_all()?;
        output.write_line("");
        output.write_line("Final hands:");
        output.write_line("Player 1's hand:");
        self.players[0].show_hand(output);
        output.write_line("");
        output.write_line("Player 2's hand:");
        self.players[1].show_hand(output);

        let result = self.showdown()?;
        output.write_line("");
        output.write_line(&format!("Player 1's score: {}", result.scores[0]));
        output.write_line(&format!("Player 2's score: {}", result.scores[1]));
        output.write_line(match result.outcome {
            Outcome::PlayerOne => "Player 1 wins!",
            Outcome::PlayerTwo => "Player 2 wins!",
            Outcome::Tie => "It's a tie!",
        });

        self.phase = GamePhase::Terminal;
        Ok(result)
    }

    /// Prompts until the player names a face-down card, then flips it.
    fn prompt_flip<R, W>(
        &mut self,
        player_index: usize,
        input: &mut R,
        output: &mut W,
    ) -> Result<(), PlayError>
    where
        R: LineRead + ?Sized,
        W: LineWrite + ?Sized,
    {
        let hand_size = self.options.hand_size;
        loop {
            output.write_line(&format!("Choose a card to flip (1-{hand_size}):"));
            let line = input.read_line().ok_or(PlayError::InputClosed)?;

            let Ok(choice) = line.trim().parse::<usize>() else {
                output.write_line("Please enter a number.");
                continue;
            };

            match self.flip(player_index, choice) {
                Ok(()) => return Ok(()),
                Err(FlipError::OutOfRange) => {
                    output.write_line(&format!(
                        "Invalid choice. Choose a number between 1 and {hand_size}."
                    ));
                }
                Err(FlipError::AlreadyFaceUp) => {
                    output.write_line("Card is already face up. Choose another card.");
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Re-renders both hands after a player's turn.
    fn show_hands<W: LineWrite + ?Sized>(&self, output: &mut W) {
        output.write_line("");
        output.write_line("Player 1's hand:");
        self.players[0].show_hand(output);
        output.write_line("");
        output.write_line("Player 2's hand:");
        self.players[1].show_hand(output);
    }
}
