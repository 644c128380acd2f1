//! Headless demo driver
//!
//! Runs a scripted session at a fixed 60 fps cadence and prints the events
//! a real host would forward to audio/rendering. Useful as a smoke run and
//! as a reference for wiring the core into a frontend.

use rand::Rng;

use mood_dash::sim::{FrameInput, GameEvent, GameSession, Mood};
use mood_dash::HighScores;

const DT: f32 = 1.0 / 60.0;
/// Hard stop for the scripted run (frames)
const MAX_FRAMES: u32 = 60 * 120;

fn main() {
    env_logger::init();

    let mut scores = HighScores::load();
    let seed: u64 = rand::rng().random();
    let mut session = GameSession::new(seed, scores.best);
    log::info!("session seeded with {seed:#x}");

    session.start();

    let mut frame: u32 = 0;
    'run: while frame < MAX_FRAMES {
        // Scripted input: hold right early on, hop periodically
        let input = FrameInput {
            right: frame % 240 < 90,
            left: false,
            jump: frame % 33 == 0,
        };

        // Walk through the moods to exercise the theme switch mid-run
        match frame {
            1200 => session.set_mood(Mood::Happy),
            2400 => session.set_mood(Mood::Stressed),
            _ => {}
        }

        for event in session.update(&input, DT) {
            match event {
                GameEvent::Jump { air } => {
                    log::debug!("jump ({})", if air { "air" } else { "ground" })
                }
                GameEvent::Land { impact } => log::debug!("landed at {impact:.0} px/s"),
                GameEvent::CoinPickup { worth, .. } => log::debug!("coin +{worth}"),
                GameEvent::Shake { .. } => {}
                GameEvent::GameOver {
                    score,
                    high_score,
                    new_best,
                } => {
                    if scores.record(score) {
                        scores.save();
                    }
                    println!(
                        "game over after {frame} frames: score {score}, best {high_score}{}",
                        if new_best { " (new best!)" } else { "" }
                    );
                    break 'run;
                }
            }
        }

        frame += 1;
    }

    if session.is_playing() {
        println!(
            "survived the whole script: score {}, best {}",
            session.score_display(),
            session.high_score
        );
    }
}
