//! Game phase types.

/// Game phase.
///
/// Phases advance strictly forward:
/// `Setup → Dealt → RevealRound(1..) → FinalReveal → Scored → Terminal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Deck shuffled, hands not yet dealt.
    Setup,
    /// Both hands dealt face-down.
    Dealt,
    /// Reveal round in progress (1-based round number).
    RevealRound(u8),
    /// All remaining cards flipped face-up.
    FinalReveal,
    /// Scores computed and the winner decided.
    Scored,
    /// Game over.
    Terminal,
}
