//! Gapwing entry point
//!
//! Runs a headless autopilot demo of the simulation: the demo pilot
//! threads gaps for a couple of simulated minutes while score, best-score,
//! and phase changes stream to the log.

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use std::time::{SystemTime, UNIX_EPOCH};

    use gapwing::consts::*;
    use gapwing::hud::{Hud, Label, TextSink};
    use gapwing::sim::{GameState, TickInput, tick};
    use gapwing::store::{self, MemoryStore};

    /// Label sink that logs text updates instead of drawing them
    struct LogSink;

    impl TextSink for LogSink {
        fn set_text(&mut self, label: Label, text: &str) {
            log::info!("{label:?} label: {text}");
        }
    }

    pub fn run() {
        env_logger::init();

        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        log::info!("demo seed {seed}");

        let mut store = MemoryStore::default();
        let mut state = GameState::new(seed);
        state.best_score = store::load_best_score(&mut store);

        let mut hud = Hud::new(LogSink);
        hud.sync(state.score, state.best_score);

        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };

        // Two simulated minutes of demo play
        let total_ticks = (120.0 / SIM_DT) as u64;
        for _ in 0..total_ticks {
            tick(&mut state, &input, SIM_DT);
            for event in state.take_events() {
                store::persist_event(&mut store, &event);
                hud.apply(event);
            }
        }

        log::info!(
            "demo finished: score {}, best {}",
            state.score,
            state.best_score
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    demo::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The wasm build is driven through the library; there is no binary
    // entry point.
}
