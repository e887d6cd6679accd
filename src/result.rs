//! Round result types for the showdown.

/// Outcome of a finished round. The lower hand total wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player 1 has the lower total.
    PlayerOne,
    /// Player 2 has the lower total.
    PlayerTwo,
    /// Both totals are equal.
    Tie,
}

/// Result of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// Final hand totals, seat order.
    pub scores: [u32; 2],
    /// Who won.
    pub outcome: Outcome,
}
