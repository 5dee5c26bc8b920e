//! Brickfall entry point
//!
//! Headless runner: drives the engine at a fixed 60 Hz step with a simple
//! autopilot and prints the final frame as JSON.
//!
//! Usage: `brickfall [config.json] [max_frames]`

#[cfg(not(target_arch = "wasm32"))]
use brickfall::consts::*;
#[cfg(not(target_arch = "wasm32"))]
use brickfall::sim::{GameEngine, GamePhase, TickInput};
#[cfg(not(target_arch = "wasm32"))]
use brickfall::{GameConfig, ScoreBoard};

#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_MAX_FRAMES: u64 = 60 * 60 * 5;

/// Steers the paddle under the ball, aiming a little off-center so the
/// ball does not settle into a vertical loop
#[cfg(not(target_arch = "wasm32"))]
fn autopilot(engine: &GameEngine, frame: u64) -> TickInput {
    let ball = engine.ball();
    let paddle = engine.paddle();
    let aim = ((frame / 240) % 5) as f32 - 2.0;
    let target = ball.position.x + aim * paddle.width / 8.0;
    let error = target - paddle.position.x;

    TickInput {
        direction: if error.abs() < 0.25 { 0.0 } else { error.signum() },
        launch: !ball.active,
        launch_angle: 0.3 * aim.signum(),
        pause: false,
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Brickfall (headless) starting...");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => GameConfig::load_or_default(path),
        None => GameConfig::default(),
    };
    let max_frames = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_MAX_FRAMES);

    let score_path = config.score_path.clone();
    let mut engine = GameEngine::new(config);
    if !engine.start_new_game() {
        log::error!("Could not start a game");
        return;
    }

    if let Some(path) = &score_path {
        match ScoreBoard::load_from(path) {
            Ok(board) => engine.set_score_board(board),
            Err(e) => log::warn!("Ignoring high score file: {}", e),
        }
    }

    log::info!("Game initialized with seed: {}", engine.config().seed);

    // Frames arrive at a steady 60 Hz here; the accumulator still bounds
    // catch-up work the same way a real-time loop would.
    let frame_dt = SIM_DT;
    let mut accumulator = 0.0;
    let mut frame = 0u64;
    while frame < max_frames {
        accumulator += frame_dt.min(MAX_DT);

        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = autopilot(&engine, frame);
            engine.step(&input, SIM_DT);
            engine.process_state_transitions();
            accumulator -= SIM_DT;
            substeps += 1;
        }
        frame += 1;

        if matches!(
            engine.state().phase(),
            GamePhase::GameOver | GamePhase::Victory
        ) {
            break;
        }
    }

    log::info!(
        "Stopped after {} frames: {:?} on level {}, score {} (high {})",
        frame,
        engine.state().phase(),
        engine.levels().current_level(),
        engine.score().score(),
        engine.score().high_score()
    );

    match serde_json::to_string_pretty(&engine.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize snapshot: {}", e),
    }

    if let Some(path) = &score_path {
        if let Err(e) = engine.score().save_to(path) {
            log::warn!("Failed to save high score: {}", e);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser front end; the library is the wasm surface
}
