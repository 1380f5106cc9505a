//! Pong Stages - a walls-and-paddles arcade game in three tutorial stages
//!
//! Core modules:
//! - `sim`: Simulation step (paddle movement, ball integration, collisions)
//! - `driver`: Frame driver (input -> simulate -> render, once per frame)
//! - `clock`: Clock service and frame pacing
//! - `config`: Field geometry and variant presets
//! - `renderer`: wgpu rendering pipeline for filled rectangles
//! - `platform`: Input/render seam plus the native winit backend

pub mod clock;
pub mod config;
pub mod driver;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use clock::{Clock, FramePacer, ManualClock, SystemClock};
pub use config::{FieldConfig, GameConfig, Variant};
pub use driver::FrameDriver;

/// Default gameplay constants
pub mod consts {
    /// Logical playfield size
    pub const FIELD_WIDTH: f32 = 1024.0;
    pub const FIELD_HEIGHT: f32 = 768.0;

    /// Wall thickness; also the ball size and paddle width
    pub const THICKNESS: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Paddle speed (units/s)
    pub const PADDLE_SPEED: f32 = 300.0;
    /// Distance of a paddle's outer edge from the side of the field
    pub const PADDLE_MARGIN: f32 = 10.0;

    /// Hit band offsets from the left paddle's x (band is [x + near, x + far])
    pub const HIT_ZONE_NEAR: f32 = 10.0;
    pub const HIT_ZONE_FAR: f32 = 15.0;

    /// Primary ball launch velocity
    pub const BALL_START_VEL: (f32, f32) = (-215.0, 235.0);

    /// Auxiliary balls in the swarm stage
    pub const AUX_BALL_COUNT: usize = 100;
    /// Auxiliary velocity components are uniform in [-range, range]
    pub const AUX_SPEED_RANGE: f32 = 250.0;
    /// Minimum horizontal speed for auxiliary balls
    pub const AUX_MIN_SPEED_X: f32 = 50.0;

    /// Largest simulation step (seconds); longer frames are clamped
    pub const MAX_DELTA: f32 = 0.05;
    /// Target frame spacing (milliseconds)
    pub const FRAME_TARGET_MS: u64 = 16;
}
