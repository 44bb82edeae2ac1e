//! Brickfall entry point
//!
//! Native: runs a headless game with the autopilot at the controls and logs
//! how it went. The browser build is driven from JS through `brickfall::web`.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use brickfall::{Game, GameConfig};

    env_logger::init();
    log::info!("Brickfall (native) starting...");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => GameConfig::load_or_default(&json),
            Err(err) => {
                log::warn!("Could not read {}: {}", path, err);
                GameConfig::default()
            }
        },
        None => GameConfig::default(),
    };
    let max_ticks = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(60 * brickfall::consts::TICK_RATE_HZ * 5);

    let mut game = Game::new(config);
    game.set_autopilot(true);
    let ticks = game.run(max_ticks);

    let state = game.state();
    let outcome = state.phase.banner().unwrap_or("STILL PLAYING");
    log::info!(
        "{} after {} ticks: score {}/{}, {} balls left",
        outcome,
        ticks,
        state.score,
        state.total_bricks(),
        state.balls.len()
    );
    println!("{} - score {}", outcome, state.score);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is brickfall::web::start, this is just to satisfy the compiler
}
