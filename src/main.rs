//! Cloudburst headless runner
//!
//! Plays an attract-mode session against the on-disk high score and logs
//! progress. Usage: `cloudburst [seconds] [seed]`.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use cloudburst::audio::LogAudio;
    use cloudburst::consts::TICK_RATE;
    use cloudburst::persistence::FileHighScoreStore;
    use cloudburst::renderer::DrawCommand;
    use cloudburst::sim::TickInput;
    use cloudburst::{Game, Settings};

    env_logger::init();
    log::info!("Cloudburst (headless) starting...");

    let mut args = std::env::args().skip(1);
    let seconds: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(120);
    let seed: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(clock_seed);

    let settings = Settings::load();
    let store = FileHighScoreStore::in_dir(&settings.data_dir());
    let mut game = Game::new(seed, store, LogAudio, &settings);

    let idle = TickInput {
        idle_mode: true,
        ..Default::default()
    };
    let frames = seconds * TICK_RATE as u64;
    let mut commands: Vec<DrawCommand> = Vec::new();
    let mut last_phase = game.state().phase;
    for frame in 0..frames {
        game.step(&idle);

        commands.clear();
        game.render(&mut commands);

        let state = game.state();
        if state.phase != last_phase {
            log::info!("{:?} at frame {} (score {})", state.phase, frame, state.score);
            last_phase = state.phase;
        }
        if frame % (10 * TICK_RATE as u64) == 0 {
            log::debug!(
                "frame {}: score {}, life {}, {} hostiles, {} draw commands",
                frame,
                state.score,
                state.player.life,
                state.hostile_count(),
                commands.len()
            );
        }
    }

    let state = game.state();
    log::info!(
        "Finished {} s: score {}, high score {}, phase {:?}",
        seconds,
        state.score,
        state.high_score,
        state.phase
    );
}

#[cfg(not(target_arch = "wasm32"))]
fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // A browser front end drives `Game` directly
}
