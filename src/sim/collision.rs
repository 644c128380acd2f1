//! Collision detection and resolution
//!
//! Rectangle-vs-rectangle for blocks and gates, circle-vs-rectangle for
//! drones and coins, all against the player's bounding box. The first
//! obstacle hit ends the run; everything after it in the same frame is
//! skipped.

use glam::Vec2;

use super::events::GameEvent;
use super::fx;
use super::state::{GameSession, Obstacle};

/// Axis-aligned rectangle overlap
#[inline]
pub fn rects_overlap(
    ax: f32,
    ay: f32,
    aw: f32,
    ah: f32,
    bx: f32,
    by: f32,
    bw: f32,
    bh: f32,
) -> bool {
    ax < bx + bw && ax + aw > bx && ay < by + bh && ay + ah > by
}

/// Circle-vs-rectangle overlap (closest-point test)
#[inline]
pub fn circle_rect_overlap(cx: f32, cy: f32, r: f32, rx: f32, ry: f32, rw: f32, rh: f32) -> bool {
    let nx = cx.clamp(rx, rx + rw);
    let ny = cy.clamp(ry, ry + rh);
    let dx = cx - nx;
    let dy = cy - ny;
    dx * dx + dy * dy <= r * r
}

/// Run the per-frame collision pass: obstacles first (fatal, short-circuit),
/// then coin pickups.
pub fn resolve_collisions(s: &mut GameSession) {
    let px = s.player.pos.x;
    let py = s.player.pos.y;
    let pw = s.player.w;
    let ph = s.player.h;

    for i in 0..s.obstacles.len() {
        let hit = match s.obstacles[i] {
            Obstacle::Block { x, y, w, h } | Obstacle::Gate { x, y, w, h } => {
                rects_overlap(px, py, pw, ph, x, y, w, h)
            }
            Obstacle::Drone { x, y, r, .. } => circle_rect_overlap(x, y, r, px, py, pw, ph),
        };
        if hit {
            let center = Vec2::new(px + pw / 2.0, py + ph / 2.0);
            fx::spawn_burst(&mut s.particles, &mut s.rng, center, 0xff6a5e, 14);
            s.finish_run();
            return;
        }
    }

    for i in 0..s.coins.len() {
        let coin = s.coins[i];
        if circle_rect_overlap(coin.x, coin.y, coin.r, px, py, pw, ph) {
            s.score += coin.worth as f32;
            s.events.push(GameEvent::CoinPickup {
                worth: coin.worth,
                x: coin.x,
                y: coin.y,
            });
            s.events.push(GameEvent::Shake {
                magnitude: 0.12,
                duration: 0.1,
            });
            fx::spawn_burst(
                &mut s.particles,
                &mut s.rng,
                Vec2::new(coin.x, coin.y),
                0xffd24a,
                8,
            );
            // Park the coin far off-screen instead of splicing mid-pass; the
            // prune step drops it and it can never be collected twice
            s.coins[i].x = -1000.0;
        }
    }
}
