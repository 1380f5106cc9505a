//! Collision rules for walls and paddles
//!
//! All checks are one-shot velocity tests: a hit flips one velocity axis and
//! the ball position is never corrected, so a ball may overlap a wall for a
//! frame or two.

use super::state::{Ball, Paddle, Side};
use crate::config::FieldConfig;

/// Ball touching the top wall while moving up
pub fn hits_top_wall(ball: &Ball, field: &FieldConfig) -> bool {
    ball.pos.y <= field.thickness && ball.vel.y < 0.0
}

/// Ball touching the bottom wall while moving down
pub fn hits_bottom_wall(ball: &Ball, field: &FieldConfig) -> bool {
    ball.pos.y >= field.height - field.thickness && ball.vel.y > 0.0
}

/// Ball touching the right wall while moving right
pub fn hits_right_wall(ball: &Ball, field: &FieldConfig) -> bool {
    ball.pos.x >= field.width - field.thickness && ball.vel.x > 0.0
}

/// Ball inside the paddle's hit band, within its vertical reach, and heading toward it
pub fn hits_paddle(ball: &Ball, paddle: &Paddle, field: &FieldConfig) -> bool {
    let in_reach = (ball.pos.y - paddle.pos.y).abs() <= field.paddle_height / 2.0;
    let (band_min, band_max) = paddle.hit_band(field);
    let in_band = ball.pos.x >= band_min && ball.pos.x <= band_max;
    let approaching = match paddle.side {
        Side::Left => ball.vel.x < 0.0,
        Side::Right => ball.vel.x > 0.0,
    };
    in_reach && in_band && approaching
}

/// Push a horizontal speed in (0, floor) up to the floor, keeping its sign.
/// Zero stays zero.
pub fn apply_speed_floor(vx: f32, floor: f32) -> f32 {
    if vx > 0.0 && vx < floor {
        floor
    } else if vx < 0.0 && vx > -floor {
        -floor
    } else {
        vx
    }
}

/// Keep a paddle center between the walls
pub fn clamp_paddle_y(y: f32, field: &FieldConfig) -> f32 {
    let min_y = field.paddle_min_y();
    let max_y = field.paddle_max_y();
    if y < min_y {
        min_y
    } else if y > max_y {
        max_y
    } else {
        y
    }
}
