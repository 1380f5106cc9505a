//! Pong Stages entry point
//!
//! No arguments. The stage and tuning come from the environment
//! (`PONG_VARIANT`, `PONG_CONFIG`, `PONG_SEED`); logging from `RUST_LOG`.
//! The process exits with status 0 even if startup fails.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use pong_stages::GameConfig;

    env_logger::init();

    let config = GameConfig::from_env();
    let seed = config.seed.unwrap_or_else(rand::random);
    log::info!(
        "Pong Stages starting: variant {}, {} paddle(s), {} auxiliary ball(s), seed {}",
        config.variant.as_str(),
        config.paddle_count(),
        config.aux_ball_count(),
        seed
    );

    pong_stages::platform::native::run(config, seed);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser frontend; the library still builds for wasm32
}
