//! Platform abstraction layer
//!
//! The frame driver only sees:
//! - `InputState`: keys held down this frame
//! - `RenderTarget`: clear, fill rectangle, present
//!
//! `native` implements both on top of winit and wgpu.

#[cfg(not(target_arch = "wasm32"))]
pub mod native;

/// RGBA color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Normalized [r, g, b, a]
    pub fn to_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

/// Integer rectangle in field units; (x, y) is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}

/// Drawing surface for one frame
pub trait RenderTarget {
    /// Fill the whole frame
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    /// Show the finished frame
    fn present(&mut self);
}

/// Keys held down this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    /// Window close / quit signal
    pub quit: bool,
    pub escape: bool,
    /// W / S move the left paddle
    pub left_up: bool,
    pub left_down: bool,
    /// I / K move the right paddle
    pub right_up: bool,
    pub right_down: bool,
}

impl InputState {
    pub fn left_dir(&self) -> i8 {
        axis(self.left_up, self.left_down)
    }

    pub fn right_dir(&self) -> i8 {
        axis(self.right_up, self.right_down)
    }

    pub fn wants_exit(&self) -> bool {
        self.quit || self.escape
    }
}

fn axis(up: bool, down: bool) -> i8 {
    i8::from(down) - i8::from(up)
}
