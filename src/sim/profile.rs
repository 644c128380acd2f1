//! Mood-to-difficulty mapping
//!
//! A pure table: every mood resolves to a fully populated parameter bundle.
//! Happy is the easiest tuning, Stressed the hardest; the cosmetic palette
//! rides along for the renderer.

use serde::{Deserialize, Serialize};

use super::state::Mood;

/// Cosmetic colors for the active mood (0xRRGGBB, consumed by rendering only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub sky: u32,
    pub ground: u32,
    pub accent: u32,
}

/// World parameters derived from the current mood.
///
/// Recomputed on demand (cheap, deterministic) rather than cached; never
/// mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    pub mood: Mood,
    /// Base scroll speed (px/s) before the run-time creep
    pub speed_base: f32,
    /// Gravity magnitude (px/s^2)
    pub gravity: f32,
    /// Base seconds between obstacle spawns
    pub spawn_rate_base: f32,
    /// Widens (+) or narrows (-) gap patterns (px)
    pub gap_bias: f32,
    /// Coin-arc frequency multiplier
    pub coin_rate: f32,
    /// Cumulative pattern cutoffs; remainder maps to gap-with-bridge
    pub drone_rate: f32,
    pub pillar_rate: f32,
    /// Chance a gap pattern adds the overhead gate hazard
    pub gate_rate: f32,
    /// Drone bob amplitude/speed multiplier
    pub bob_scale: f32,
    pub palette: Palette,
}

impl DifficultyProfile {
    /// Resolve the parameter bundle for `mood`. Pure and total.
    pub fn resolve(mood: Mood) -> Self {
        match mood {
            Mood::Happy => Self {
                mood,
                speed_base: 300.0,
                gravity: 1480.0,
                spawn_rate_base: 1.10,
                gap_bias: 40.0,
                coin_rate: 1.5,
                drone_rate: 0.18,
                pillar_rate: 0.46,
                gate_rate: 0.35,
                bob_scale: 1.0,
                palette: Palette {
                    sky: 0x8ed8f8,
                    ground: 0x7bc96f,
                    accent: 0xffd24a,
                },
            },
            Mood::Calm => Self {
                mood,
                speed_base: 330.0,
                gravity: 1520.0,
                spawn_rate_base: 0.95,
                gap_bias: 10.0,
                coin_rate: 1.0,
                drone_rate: 0.25,
                pillar_rate: 0.45,
                gate_rate: 0.50,
                bob_scale: 1.15,
                palette: Palette {
                    sky: 0x1b2a4a,
                    ground: 0x3a4f6e,
                    accent: 0xb9d4ff,
                },
            },
            Mood::Stressed => Self {
                mood,
                speed_base: 360.0,
                gravity: 1560.0,
                spawn_rate_base: 0.82,
                gap_bias: -20.0,
                coin_rate: 0.85,
                drone_rate: 0.33,
                pillar_rate: 0.40,
                gate_rate: 0.62,
                bob_scale: 1.35,
                palette: Palette {
                    sky: 0x3d3a52,
                    ground: 0x2e2b3f,
                    accent: 0xff6a5e,
                },
            },
        }
    }
}
