//! Procedural obstacle, coin and decoration generation
//!
//! Spawn cadence ramps up slowly over the run and is parameterized by the
//! active difficulty profile; pattern choice uses the profile's cumulative
//! pillar/drone cutoffs, with the remainder mapping to gap-with-bridge.
//! Everything originates off the right edge of the playfield.

use rand::Rng;
use std::f32::consts::{PI, TAU};

use super::profile::DifficultyProfile;
use super::state::{Coin, Decoration, GameSession, Obstacle};
use crate::consts::*;

const COIN_RADIUS: f32 = 11.0;
const COIN_SPACING: f32 = 34.0;
/// 1-in-N chance a coin is worth 5 instead of 1
const BONUS_COIN_ODDS: u32 = 8;
/// Chance per frame of adding a parallax hill
const DECOR_CHANCE: f64 = 0.08;

/// Seconds between obstacle spawns for the current profile and run time.
///
/// A slow linear ramp, floored and capped around the per-mood base.
pub fn spawn_interval(profile: &DifficultyProfile, run_time: f32) -> f32 {
    (profile.spawn_rate_base - run_time * 0.006).clamp(0.55, 1.15)
}

/// Run one frame of spawn logic.
pub fn spawn_step(s: &mut GameSession, profile: &DifficultyProfile, dt: f32) {
    s.time_since_last_spawn += dt;
    if s.time_since_last_spawn >= spawn_interval(profile, s.run_time) {
        s.time_since_last_spawn = 0.0;

        let roll: f32 = s.rng.random();
        if roll < profile.pillar_rate {
            spawn_block_pattern(s, profile);
        } else if roll < profile.pillar_rate + profile.drone_rate {
            spawn_drone(s, profile);
        } else {
            spawn_gap_with_bridge(s, profile);
        }

        let coin_chance = (0.75 * profile.coin_rate as f64).min(1.0);
        if s.rng.random_bool(coin_chance) {
            spawn_coin_arc(s);
        }
    }

    if s.rng.random_bool(DECOR_CHANCE) {
        spawn_decoration(s);
    }
}

fn pillar(s: &mut GameSession, x: f32, w: f32, h: f32) {
    s.obstacles.push(Obstacle::Block {
        x,
        y: GROUND_Y - h,
        w,
        h,
    });
}

/// One pillar, or a staggered pair with a mood-dependent gap.
fn spawn_block_pattern(s: &mut GameSession, profile: &DifficultyProfile) {
    let x = VIEW_W + 30.0;
    let w = s.rng.random_range(50.0..92.0);
    let h = s.rng.random_range(50.0..160.0);
    pillar(s, x, w, h);

    if s.rng.random_bool(0.5) {
        let gap = (90.0 + s.rng.random_range(0.0..60.0) + profile.gap_bias).max(60.0);
        let h2 = (h + s.rng.random_range(-24.0..24.0)).clamp(60.0, 160.0);
        let w2 = s.rng.random_range(50.0..92.0);
        pillar(s, x + w + gap, w2, h2);
    }
}

/// A bobbing circular hazard; amplitude and speed scale with the mood bias.
fn spawn_drone(s: &mut GameSession, profile: &DifficultyProfile) {
    let r = s.rng.random_range(22.0..32.0);
    let base_y = s.rng.random_range(GROUND_Y - 280.0..GROUND_Y - 90.0);
    s.obstacles.push(Obstacle::Drone {
        x: VIEW_W + 40.0,
        y: base_y,
        base_y,
        r,
        phase: s.rng.random_range(0.0..TAU),
        amplitude: s.rng.random_range(26.0..60.0) * profile.bob_scale,
        bob_speed: s.rng.random_range(1.6..2.6) * profile.bob_scale,
        spin: 0.0,
    });
}

/// Two pillars around a jumpable gap; the gap bias narrows it on harder
/// moods, and a thin gate hazard may cap it from above.
fn spawn_gap_with_bridge(s: &mut GameSession, profile: &DifficultyProfile) {
    let x = VIEW_W + 20.0;
    let w1 = s.rng.random_range(46.0..70.0);
    let h1 = s.rng.random_range(70.0..150.0);
    pillar(s, x, w1, h1);

    let gap = (160.0 + s.rng.random_range(0.0..90.0) + profile.gap_bias).max(90.0);
    let w2 = s.rng.random_range(46.0..70.0);
    let h2 = s.rng.random_range(70.0..150.0);
    pillar(s, x + w1 + gap, w2, h2);

    if s.rng.random_bool(profile.gate_rate as f64) {
        let clearance = s.rng.random_range(120.0..170.0);
        s.obstacles.push(Obstacle::Gate {
            x: x + w1,
            y: GROUND_Y - clearance,
            w: gap,
            h: 14.0,
        });
    }
}

/// 5-8 coins along a sine arch above the ground.
fn spawn_coin_arc(s: &mut GameSession) {
    let n = s.rng.random_range(5..=8);
    let x0 = VIEW_W + 40.0;
    let base_y = GROUND_Y - s.rng.random_range(110.0..150.0);
    let arch = s.rng.random_range(40.0..90.0);
    for i in 0..n {
        let t = i as f32 / (n - 1) as f32;
        let worth = if s.rng.random_range(0..BONUS_COIN_ODDS) == 0 {
            5
        } else {
            1
        };
        s.coins.push(Coin {
            x: x0 + i as f32 * COIN_SPACING,
            y: base_y - (t * PI).sin() * arch,
            r: COIN_RADIUS,
            worth,
            phase: 0.0,
        });
    }
}

fn spawn_decoration(s: &mut GameSession) {
    let h = s.rng.random_range(40.0..140.0);
    s.decorations.push(Decoration {
        x: VIEW_W + 80.0,
        y: GROUND_Y - h,
        w: s.rng.random_range(120.0..320.0),
        h,
        speed: s.rng.random_range(40.0..90.0),
    });
}
