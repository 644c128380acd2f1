//! Session state and core simulation types
//!
//! Everything the frame loop owns lives in one [`GameSession`] aggregate:
//! player, entity collections, timers, score and the RNG. External
//! collaborators only touch it through the documented entry points
//! (`start`/`pause`/`resume`/`reset`/`set_mood`/`visibility_changed`/`update`).

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::events::GameEvent;
use super::fx::{self, AmbientParticle, BurstParticle};
use super::player::Player;

/// Detected mood driving difficulty and theme.
///
/// Produced by an external inference pipeline (or a manual override); the
/// simulation only ever reads it, once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mood {
    Happy,
    /// Neutral default, also the fallback for missing or unknown labels
    #[default]
    Calm,
    Stressed,
}

impl Mood {
    pub fn name(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Calm => "calm",
            Mood::Stressed => "stressed",
        }
    }

    /// Lenient label parsing; anything unrecognized maps to `Calm`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "happy" => Mood::Happy,
            "stressed" => Mood::Stressed,
            _ => Mood::Calm,
        }
    }
}

/// Per-frame input snapshot; the host collapses keyboard/touch to this shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    /// Edge-triggered jump request (held keys are debounced by the host)
    pub jump: bool,
}

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Pre-start or post-game-over; the renderer shows an overlay
    #[default]
    Idle,
    /// Normal per-frame updates
    Playing,
    /// Updates skipped, rendering continues
    Paused,
}

/// A hazard scrolling in from the right edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Obstacle {
    /// Static rectangle standing on the ground
    Block { x: f32, y: f32, w: f32, h: f32 },
    /// Circular hazard bobbing sinusoidally; `spin` is cosmetic
    Drone {
        x: f32,
        y: f32,
        base_y: f32,
        r: f32,
        phase: f32,
        amplitude: f32,
        bob_speed: f32,
        spin: f32,
    },
    /// Thin horizontal bar over a gap, same collision rule as Block
    Gate { x: f32, y: f32, w: f32, h: f32 },
}

impl Obstacle {
    /// Left edge, used for scrolling and pruning
    pub fn x(&self) -> f32 {
        match self {
            Obstacle::Block { x, .. } | Obstacle::Drone { x, .. } | Obstacle::Gate { x, .. } => *x,
        }
    }

    pub fn y(&self) -> f32 {
        match self {
            Obstacle::Block { y, .. } | Obstacle::Drone { y, .. } | Obstacle::Gate { y, .. } => *y,
        }
    }
}

/// A collectible coin; `phase` drives the cosmetic spin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub worth: u32,
    pub phase: f32,
}

/// Cosmetic parallax hill with its own scroll speed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Decoration {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub speed: f32,
}

/// One runner session: all world state plus the per-run bookkeeping.
///
/// Fields are public so the renderer can snapshot them each frame; mutation
/// goes through the entry points below and [`super::tick::update`].
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Run seed, kept for reference/logging
    pub seed: u64,
    pub mood: Mood,
    pub phase: GamePhase,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub coins: Vec<Coin>,
    pub decorations: Vec<Decoration>,
    /// Mood-themed ambient pool, rebuilt wholesale on mood change
    pub ambient: Vec<AmbientParticle>,
    /// Short-lived sparkle/dust particles
    pub particles: Vec<BurstParticle>,
    /// Raw score; floored for display and persistence
    pub score: f32,
    /// Monotonic best across runs
    pub high_score: u32,
    pub run_time: f32,
    pub time_since_last_spawn: f32,
    /// Scroll-speed creep accumulated over the run, on top of the mood base
    pub speed_bonus: f32,
    /// Events queued this frame, drained by `update`
    pub events: Vec<GameEvent>,
    pub rng: Pcg32,
}

impl GameSession {
    /// Create a session in `Idle` with the persisted best score.
    pub fn new(seed: u64, high_score: u32) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mood = Mood::default();
        let ambient = fx::build_pools(mood, &mut rng);
        Self {
            seed,
            mood,
            phase: GamePhase::Idle,
            player: Player::new(),
            obstacles: Vec::new(),
            coins: Vec::new(),
            decorations: Vec::new(),
            ambient,
            particles: Vec::new(),
            score: 0.0,
            high_score,
            run_time: 0.0,
            time_since_last_spawn: 0.0,
            speed_bonus: 0.0,
            events: Vec::new(),
            rng,
        }
    }

    /// Floored score for display
    pub fn score_display(&self) -> u32 {
        self.score.max(0.0).floor() as u32
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    /// Begin a fresh run: clear the world, rebuild scenery, reset the player.
    pub fn start(&mut self) {
        self.clear_world();
        self.rebuild_ambient();
        self.player = Player::new();
        self.score = 0.0;
        self.run_time = 0.0;
        self.time_since_last_spawn = 0.0;
        self.speed_bonus = 0.0;
        self.phase = GamePhase::Playing;
        log::info!("run started (mood: {})", self.mood.name());
    }

    pub fn pause(&mut self) {
        if self.phase == GamePhase::Playing {
            self.phase = GamePhase::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.phase == GamePhase::Paused {
            self.phase = GamePhase::Playing;
        }
    }

    /// Force `Idle` and clear everything; scenery is rebuilt so the idle
    /// screen still shows the mood theme.
    pub fn reset(&mut self) {
        self.clear_world();
        self.rebuild_ambient();
        self.player = Player::new();
        self.score = 0.0;
        self.run_time = 0.0;
        self.time_since_last_spawn = 0.0;
        self.speed_bonus = 0.0;
        self.phase = GamePhase::Idle;
    }

    /// Advance one frame and return the events it produced.
    ///
    /// Convenience delegate to [`super::tick::update`].
    pub fn update(&mut self, input: &FrameInput, dt: f32) -> Vec<GameEvent> {
        super::tick::update(self, input, dt)
    }

    /// Tab-hidden/shown notification from the host; hiding forces a pause.
    pub fn visibility_changed(&mut self, visible: bool) {
        if !visible {
            self.pause();
        }
    }

    /// Adopt a new mood. In-flight obstacles, coins and the player are left
    /// untouched; only the ambient pool is rebuilt.
    pub fn set_mood(&mut self, mood: Mood) {
        if mood != self.mood {
            self.mood = mood;
            self.rebuild_ambient();
        }
    }

    pub(crate) fn rebuild_ambient(&mut self) {
        self.ambient = fx::build_pools(self.mood, &mut self.rng);
    }

    /// Terminal transition after a fatal collision: freeze the run, fold the
    /// floored score into the best, notify listeners.
    pub(crate) fn finish_run(&mut self) {
        self.phase = GamePhase::Idle;
        let final_score = self.score_display();
        let new_best = final_score > self.high_score;
        self.high_score = self.high_score.max(final_score);
        self.events.push(GameEvent::Shake {
            magnitude: 0.8,
            duration: 0.5,
        });
        self.events.push(GameEvent::GameOver {
            score: final_score,
            high_score: self.high_score,
            new_best,
        });
        log::info!(
            "game over: score {} (best {}{})",
            final_score,
            self.high_score,
            if new_best { ", new best" } else { "" }
        );
    }

    fn clear_world(&mut self) {
        self.obstacles.clear();
        self.coins.clear();
        self.decorations.clear();
        self.particles.clear();
        self.events.clear();
        self.player.clear_trail();
    }
}
