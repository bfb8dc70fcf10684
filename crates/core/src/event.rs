use crate::types::SoundCue;

/// Side-effect notification queued by the round engine.
///
/// Drained by the session layer and routed to the render, audio and
/// persistence collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreEvent {
    /// A new order was generated and should be shown
    OrderDisplayed,
    /// The player's progress changed (possibly to empty)
    ProgressDisplayed,
    LivesChanged { lives: u8 },
    ScoreChanged { score: u32, level: u32 },
    Sound(SoundCue),
    /// Lives reached zero; the run is over
    GameOver { score: u32, new_high_score: bool },
}
