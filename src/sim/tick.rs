//! Per-frame orchestration
//!
//! One `update` per rendered frame, in a fixed order: time/score accrual,
//! difficulty resolution, player physics, spawning, world scroll, ambient
//! FX, collisions, transient particles, off-screen pruning. The host owns
//! the cadence; the step is clamped so dropped frames and tab resumes never
//! destabilize the integration.

use glam::Vec2;

use super::collision;
use super::events::GameEvent;
use super::fx;
use super::profile::DifficultyProfile;
use super::spawn;
use super::state::{FrameInput, GamePhase, GameSession, Obstacle};
use crate::consts::*;

/// Cosmetic spin rate shared by all drones (rad/s)
const DRONE_SPIN_RATE: f32 = 3.4;
/// Coin spin phase rate
const COIN_PHASE_RATE: f32 = 4.0;

/// Advance the session one frame and return the events it produced.
///
/// Never panics: a non-finite or negative `dt` is treated as zero and any
/// step is capped at [`MAX_FRAME_DT`].
pub fn update(s: &mut GameSession, input: &FrameInput, dt: f32) -> Vec<GameEvent> {
    let dt = if dt.is_finite() {
        dt.clamp(0.0, MAX_FRAME_DT)
    } else {
        0.0
    };

    if s.phase != GamePhase::Playing {
        return std::mem::take(&mut s.events);
    }

    s.run_time += dt;
    s.score += SCORE_PER_SEC * dt;

    // Mood is sampled once per frame; it may have changed since the last one
    let profile = DifficultyProfile::resolve(s.mood);

    s.player.integrate(input, profile.gravity, dt, &mut s.events);
    motion_feedback(s);

    spawn::spawn_step(s, &profile, dt);

    let speed = profile.speed_base + s.speed_bonus;
    s.speed_bonus += SPEED_CREEP * dt;
    advance_world(s, speed, dt);

    fx::update_ambient(&mut s.ambient, dt, &mut s.rng);

    collision::resolve_collisions(s);

    fx::update_bursts(&mut s.particles, dt);
    prune_world(s);

    std::mem::take(&mut s.events)
}

/// Dust, puffs and shake in response to the physics events of this frame.
fn motion_feedback(s: &mut GameSession) {
    let mut landing = None;
    let mut air_jump = false;
    for e in &s.events {
        match e {
            GameEvent::Land { impact } => landing = Some(*impact),
            GameEvent::Jump { air: true } => air_jump = true,
            _ => {}
        }
    }

    let feet = Vec2::new(s.player.pos.x + s.player.w / 2.0, GROUND_Y);
    if let Some(impact) = landing {
        fx::spawn_burst(&mut s.particles, &mut s.rng, feet, 0x9a8f7a, 6);
        s.events.push(GameEvent::Shake {
            magnitude: (impact / 1200.0).min(0.6),
            duration: 0.22,
        });
    }
    if air_jump {
        let center = Vec2::new(s.player.pos.x + s.player.w / 2.0, s.player.pos.y + s.player.h);
        fx::spawn_burst(&mut s.particles, &mut s.rng, center, 0xffffff, 5);
    }
}

/// Scroll every world entity leftward; drones bob and spin, coins advance
/// their cosmetic phase, decoration moves at its own parallax speed.
fn advance_world(s: &mut GameSession, speed: f32, dt: f32) {
    for o in &mut s.obstacles {
        match o {
            Obstacle::Block { x, .. } | Obstacle::Gate { x, .. } => *x -= speed * dt,
            Obstacle::Drone {
                x,
                y,
                base_y,
                phase,
                amplitude,
                bob_speed,
                spin,
                ..
            } => {
                *x -= speed * dt;
                *phase += dt;
                *y = *base_y + (*phase * *bob_speed).sin() * *amplitude;
                *spin += DRONE_SPIN_RATE * dt;
            }
        }
    }
    for c in &mut s.coins {
        c.x -= speed * dt;
        c.phase += COIN_PHASE_RATE * dt;
    }
    for d in &mut s.decorations {
        d.x -= d.speed * dt;
    }
}

/// Drop entities past the off-screen thresholds.
fn prune_world(s: &mut GameSession) {
    s.obstacles
        .retain(|o| o.x() > OBSTACLE_PRUNE_X && o.y() < OBSTACLE_PRUNE_Y);
    s.coins.retain(|c| c.x > COIN_PRUNE_X);
    s.decorations.retain(|d| d.x > DECOR_PRUNE_X);
}
