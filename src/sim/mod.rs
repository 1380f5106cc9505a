//! Simulation module
//!
//! All gameplay logic lives here. No rendering, input devices or wall-clock
//! time: the frame driver passes in direction intents and a delta.
//! Auxiliary-ball velocities come from a seeded RNG, so a seed fully
//! determines a run.

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{apply_speed_floor, clamp_paddle_y, hits_paddle};
pub use state::{Ball, GameState, Paddle, Side};
pub use tick::{TickInput, advance, clamp_delta};
