//! Frame driver
//!
//! One call to `frame` runs Input -> Simulate -> Render. The driver owns the
//! keep-running flag, the pacer and the clock; the platform supplies key
//! state and a render target.

use crate::clock::{Clock, FramePacer, SystemClock};
use crate::config::GameConfig;
use crate::platform::{Color, InputState, Rect, RenderTarget};
use crate::sim::{GameState, TickInput, advance};

pub const BACKGROUND: Color = Color::BLUE;
pub const FOREGROUND: Color = Color::WHITE;

pub struct FrameDriver<C: Clock = SystemClock> {
    state: GameState,
    pacer: FramePacer,
    clock: C,
    input: TickInput,
    running: bool,
}

impl FrameDriver<SystemClock> {
    pub fn with_system_clock(config: &GameConfig, seed: u64) -> Self {
        Self::new(config, seed, SystemClock::new())
    }
}

impl<C: Clock> FrameDriver<C> {
    pub fn new(config: &GameConfig, seed: u64, clock: C) -> Self {
        Self {
            state: GameState::new(config, seed),
            pacer: FramePacer::from_config(config),
            clock,
            input: TickInput::default(),
            running: true,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Turn held keys into paddle intents; quit or Escape ends the loop
    pub fn process_input(&mut self, keys: &InputState) {
        if keys.wants_exit() {
            self.running = false;
        }
        self.input = TickInput {
            left: keys.left_dir(),
            right: keys.right_dir(),
        };
    }

    /// Wait for the frame slot, then step the simulation. Returns the delta used.
    pub fn update_game(&mut self) -> f32 {
        let dt = self.pacer.next_delta(&mut self.clock);
        advance(&mut self.state, &self.input, dt);
        dt
    }

    /// Draw walls, balls and paddles, then present
    pub fn generate_output(&self, target: &mut dyn RenderTarget) {
        let field = &self.state.field;
        let width = field.width as i32;
        let height = field.height as i32;
        let thickness = field.thickness as i32;
        let paddle_height = field.paddle_height as i32;

        target.clear(BACKGROUND);

        target.fill_rect(Rect::new(0, 0, width, thickness), FOREGROUND);
        target.fill_rect(
            Rect::new(0, height - thickness, width, thickness),
            FOREGROUND,
        );
        if self.state.right_wall {
            target.fill_rect(
                Rect::new(width - thickness, 0, thickness, height),
                FOREGROUND,
            );
        }

        for ball in &self.state.balls {
            let half = (thickness / 2) as f32;
            target.fill_rect(
                Rect::new(
                    (ball.pos.x - half) as i32,
                    (ball.pos.y - half) as i32,
                    thickness,
                    thickness,
                ),
                FOREGROUND,
            );
        }

        for paddle in &self.state.paddles {
            let half = (paddle_height / 2) as f32;
            target.fill_rect(
                Rect::new(
                    paddle.pos.x as i32,
                    (paddle.pos.y - half) as i32,
                    thickness,
                    paddle_height,
                ),
                FOREGROUND,
            );
        }

        target.present();
    }

    /// Run one full frame. Returns whether the loop should keep going.
    pub fn frame(&mut self, keys: &InputState, target: &mut dyn RenderTarget) -> bool {
        self.process_input(keys);
        let dt = self.update_game();
        log::debug!("frame dt={:.4}", dt);
        self.generate_output(target);
        self.running
    }
}
