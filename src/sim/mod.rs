//! Runner simulation module
//!
//! All gameplay logic lives here, driven one `update(dt)` at a time by the
//! host's frame callback:
//! - Single-threaded, no blocking work in the per-frame path
//! - Mood is sampled once per frame and may change between any two frames
//! - No rendering or platform dependencies

pub mod collision;
pub mod events;
pub mod fx;
pub mod player;
pub mod profile;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{circle_rect_overlap, rects_overlap};
pub use events::GameEvent;
pub use fx::{AmbientKind, AmbientParticle, BurstParticle};
pub use player::Player;
pub use profile::{DifficultyProfile, Palette};
pub use state::{Coin, Decoration, FrameInput, GamePhase, GameSession, Mood, Obstacle};
pub use tick::update;
