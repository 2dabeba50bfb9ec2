//! Void Strike entry point
//!
//! Headless demo driver: runs the simulation under autopilot at 60 Hz,
//! logs sink notifications (sound cues, HUD changes) and records the
//! final score on the leaderboard. A graphical frontend would drive the
//! same `tick`/event loop with real input and a renderer.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use void_strike::audio::cue_for_event;
use void_strike::sim::{GamePhase, GameState, TickInput, tick};
use void_strike::ui::Hud;
use void_strike::HighScores;

const DT: f32 = 1.0 / 60.0;
const MAX_DEMO_SECONDS: f64 = 120.0;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0)
        });

    let mut state = GameState::new(seed);
    let mut hud = Hud::new(&state);
    let input = TickInput {
        start: true,
        autopilot: true,
        ..Default::default()
    };

    log::info!("demo run, seed {seed}");

    while state.phase != GamePhase::GameOver && state.elapsed < MAX_DEMO_SECONDS {
        tick(&mut state, &input, DT);

        for event in state.take_events() {
            if let Some(cue) = cue_for_event(&event) {
                log::debug!("cue: {cue:?}");
            }
        }
        for change in hud.update(&state) {
            log::debug!("hud: {change:?}");
        }
    }

    let snapshot = hud.snapshot();
    log::info!(
        "run finished after {:.1}s: score {}, health {}, shield {}",
        state.elapsed,
        snapshot.score,
        snapshot.health,
        snapshot.shield
    );

    let path = PathBuf::from("highscores.json");
    let mut scores = HighScores::load(&path);
    match scores.add_score("AUTOPILOT", state.score) {
        Some(rank) => {
            log::info!("leaderboard rank #{rank}");
            scores.save(&path);
        }
        None => log::info!("score did not make the leaderboard"),
    }
}
