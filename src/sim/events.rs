//! Gameplay output events
//!
//! Queued during a frame and drained by `update`'s return value. Audio and
//! rendering collaborators react to these; the simulation never calls out to
//! them directly.

use serde::{Deserialize, Serialize};

/// A fire-and-forget notification produced by one simulation frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player jumped; `air` distinguishes the mid-air jump (distinct cue)
    Jump { air: bool },
    /// Player touched down after falling faster than the impact threshold
    Land { impact: f32 },
    /// Coin credited to the score
    CoinPickup { worth: u32, x: f32, y: f32 },
    /// Camera shake request for the renderer
    Shake { magnitude: f32, duration: f32 },
    /// Run ended; `new_best` is set when the floored score beat the record
    GameOver {
        score: u32,
        high_score: u32,
        new_best: bool,
    },
}
