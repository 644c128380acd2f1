//! Mood ambient FX and transient particles
//!
//! Each mood owns a themed ambient pool (clouds and balloons, twinkling
//! stars, rain streaks). Pools are rebuilt wholesale when the mood changes
//! and members are recycled in place by wrap-around reset, never destroyed
//! per frame. Transient burst particles (coin sparkle, landing dust) decay
//! and are culled on lifespan.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use super::state::Mood;
use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AmbientKind {
    Cloud,
    Balloon,
    Star,
    Rain,
}

/// One member of the mood ambient pool
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AmbientParticle {
    pub kind: AmbientKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    /// Twinkle/bob phase, advanced every frame
    pub phase: f32,
}

/// A short-lived sparkle/dust particle
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BurstParticle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// 0xRRGGBB, renderer looks this up directly
    pub color: u32,
    pub age: f32,
    pub lifespan: f32,
}

/// Build the ambient pool for `mood` from scratch.
pub fn build_pools(mood: Mood, rng: &mut Pcg32) -> Vec<AmbientParticle> {
    match mood {
        Mood::Happy => {
            let mut pool = Vec::with_capacity(14);
            for _ in 0..9 {
                pool.push(AmbientParticle {
                    kind: AmbientKind::Cloud,
                    pos: Vec2::new(
                        rng.random_range(0.0..VIEW_W),
                        rng.random_range(30.0..VIEW_H * 0.45),
                    ),
                    vel: Vec2::new(-rng.random_range(10.0..30.0), 0.0),
                    size: rng.random_range(36.0..90.0),
                    phase: rng.random_range(0.0..TAU),
                });
            }
            for _ in 0..5 {
                pool.push(AmbientParticle {
                    kind: AmbientKind::Balloon,
                    pos: Vec2::new(
                        rng.random_range(0.0..VIEW_W),
                        rng.random_range(VIEW_H * 0.3..VIEW_H),
                    ),
                    vel: Vec2::new(-rng.random_range(14.0..26.0), -rng.random_range(20.0..45.0)),
                    size: rng.random_range(10.0..18.0),
                    phase: rng.random_range(0.0..TAU),
                });
            }
            pool
        }
        Mood::Calm => (0..48)
            .map(|_| AmbientParticle {
                kind: AmbientKind::Star,
                pos: Vec2::new(
                    rng.random_range(0.0..VIEW_W),
                    rng.random_range(0.0..GROUND_Y * 0.8),
                ),
                vel: Vec2::new(-rng.random_range(1.0..4.0), 0.0),
                size: rng.random_range(1.0..3.2),
                phase: rng.random_range(0.0..TAU),
            })
            .collect(),
        Mood::Stressed => (0..70)
            .map(|_| AmbientParticle {
                kind: AmbientKind::Rain,
                pos: Vec2::new(
                    rng.random_range(-40.0..VIEW_W + 40.0),
                    rng.random_range(-VIEW_H..VIEW_H),
                ),
                vel: Vec2::new(-rng.random_range(40.0..80.0), rng.random_range(380.0..520.0)),
                size: rng.random_range(8.0..18.0),
                phase: 0.0,
            })
            .collect(),
    }
}

/// Advance the ambient pool one frame, recycling members in place.
pub fn update_ambient(pool: &mut [AmbientParticle], dt: f32, rng: &mut Pcg32) {
    for p in pool.iter_mut() {
        p.pos += p.vel * dt;
        p.phase += dt * 2.0;
        match p.kind {
            AmbientKind::Cloud => {
                if p.pos.x < -p.size * 2.0 {
                    p.pos.x = VIEW_W + p.size;
                    p.pos.y = rng.random_range(30.0..VIEW_H * 0.45);
                }
            }
            AmbientKind::Balloon => {
                if p.pos.y < -30.0 || p.pos.x < -30.0 {
                    p.pos.x = rng.random_range(0.0..VIEW_W + 60.0);
                    p.pos.y = VIEW_H + rng.random_range(10.0..60.0);
                }
            }
            AmbientKind::Star => {
                if p.pos.x < -4.0 {
                    p.pos.x += VIEW_W + 8.0;
                }
            }
            AmbientKind::Rain => {
                if p.pos.y > VIEW_H + 20.0 {
                    p.pos.y = -rng.random_range(10.0..80.0);
                    p.pos.x = rng.random_range(-40.0..VIEW_W + 80.0);
                }
            }
        }
    }
}

/// Spawn a radial burst of `count` particles at `pos`.
///
/// The pool is capped; the oldest particles are evicted to make room.
pub fn spawn_burst(
    particles: &mut Vec<BurstParticle>,
    rng: &mut Pcg32,
    pos: Vec2,
    color: u32,
    count: usize,
) {
    for _ in 0..count {
        if particles.len() >= MAX_PARTICLES {
            particles.remove(0);
        }
        let angle = rng.random_range(0.0..TAU);
        let speed = rng.random_range(60.0..220.0);
        particles.push(BurstParticle {
            pos,
            vel: Vec2::new(angle.cos(), angle.sin()) * speed,
            radius: rng.random_range(2.0..5.5),
            color,
            age: 0.0,
            lifespan: rng.random_range(0.3..0.7),
        });
    }
}

/// Advance and cull transient particles.
pub fn update_bursts(particles: &mut Vec<BurstParticle>, dt: f32) {
    for p in particles.iter_mut() {
        p.pos += p.vel * dt;
        p.vel *= 0.96;
        p.radius *= 0.97;
        p.age += dt;
    }
    particles.retain(|p| p.age <= p.lifespan);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(42)
    }

    #[test]
    fn test_pools_match_mood_theme() {
        let mut r = rng();
        let happy = build_pools(Mood::Happy, &mut r);
        assert!(happy
            .iter()
            .all(|p| matches!(p.kind, AmbientKind::Cloud | AmbientKind::Balloon)));
        assert!(happy.iter().any(|p| p.kind == AmbientKind::Balloon));

        let calm = build_pools(Mood::Calm, &mut r);
        assert!(calm.iter().all(|p| p.kind == AmbientKind::Star));

        let stressed = build_pools(Mood::Stressed, &mut r);
        assert!(stressed.iter().all(|p| p.kind == AmbientKind::Rain));
    }

    #[test]
    fn test_ambient_pool_recycles_in_place() {
        let mut r = rng();
        let mut pool = build_pools(Mood::Stressed, &mut r);
        let n = pool.len();
        // Long enough for every streak to fall off screen at least once
        for _ in 0..600 {
            update_ambient(&mut pool, 1.0 / 60.0, &mut r);
        }
        assert_eq!(pool.len(), n);
        assert!(pool.iter().all(|p| p.pos.y <= VIEW_H + 20.0));
    }

    #[test]
    fn test_bursts_expire() {
        let mut r = rng();
        let mut particles = Vec::new();
        spawn_burst(&mut particles, &mut r, Vec2::new(100.0, 100.0), 0xffd24a, 12);
        assert_eq!(particles.len(), 12);
        for _ in 0..120 {
            update_bursts(&mut particles, 1.0 / 60.0);
        }
        assert!(particles.is_empty());
    }

    #[test]
    fn test_burst_pool_is_capped() {
        let mut r = rng();
        let mut particles = Vec::new();
        for _ in 0..100 {
            spawn_burst(&mut particles, &mut r, Vec2::ZERO, 0xffffff, 8);
        }
        assert!(particles.len() <= MAX_PARTICLES);
    }
}
