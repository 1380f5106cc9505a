//! Simulation step
//!
//! Advances paddles and balls by one frame's delta.

use super::collision::{
    apply_speed_floor, clamp_paddle_y, hits_bottom_wall, hits_paddle, hits_right_wall,
    hits_top_wall,
};
use super::state::{GameState, Side};

/// Directional intent for one frame (-1 up, 0 still, 1 down)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: i8,
    pub right: i8,
}

impl TickInput {
    pub fn direction(&self, side: Side) -> i8 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Clamp a frame delta into [0, max_delta]; NaN becomes 0
#[inline]
pub fn clamp_delta(dt: f32, max_delta: f32) -> f32 {
    if dt.is_nan() || dt <= 0.0 {
        0.0
    } else {
        dt.min(max_delta)
    }
}

/// Advance the simulation by `dt` seconds
pub fn advance(state: &mut GameState, input: &TickInput, dt: f32) {
    if !state.simulate {
        return;
    }

    let dt = clamp_delta(dt, state.max_delta);
    let field = &state.field;

    for paddle in &mut state.paddles {
        paddle.set_direction(input.direction(paddle.side));
        if paddle.dir != 0 {
            paddle.pos.y += f32::from(paddle.dir) * field.paddle_speed * dt;
            paddle.pos.y = clamp_paddle_y(paddle.pos.y, field);
        }
    }

    for ball in &mut state.balls {
        ball.pos += ball.vel * dt;

        if hits_top_wall(ball, field) || hits_bottom_wall(ball, field) {
            ball.vel.y *= -1.0;
        }
        if state.right_wall && hits_right_wall(ball, field) {
            ball.vel.x *= -1.0;
        }
        for paddle in &state.paddles {
            if hits_paddle(ball, paddle, field) {
                ball.vel.x *= -1.0;
            }
        }

        if ball.auxiliary {
            ball.vel.x = apply_speed_floor(ball.vel.x, field.aux_min_speed_x);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GameConfig, Variant};
    use crate::sim::state::{Ball, Side};
    use glam::Vec2;
    use proptest::prelude::*;

    fn state(variant: Variant) -> GameState {
        GameState::new(&GameConfig::from_variant(variant), 12345)
    }

    fn with_ball(variant: Variant, ball: Ball) -> GameState {
        let mut s = state(variant);
        s.balls = vec![ball];
        s
    }

    #[test]
    fn test_paddle_stops_at_top_limit() {
        let mut s = state(Variant::Single);
        let up = TickInput { left: -1, right: 0 };
        for _ in 0..200 {
            advance(&mut s, &up, 0.05);
            assert!(s.paddles[0].pos.y >= 65.0);
        }
        assert_eq!(s.paddles[0].pos.y, 65.0);
    }

    #[test]
    fn test_paddle_stops_at_bottom_limit() {
        let mut s = state(Variant::Swarm);
        let down = TickInput { left: 1, right: 1 };
        for _ in 0..200 {
            advance(&mut s, &down, 0.05);
        }
        assert_eq!(s.paddles[0].pos.y, 703.0);
        assert_eq!(s.paddles[1].pos.y, 703.0);
    }

    #[test]
    fn test_paddle_direction_is_not_accumulated() {
        let mut s = state(Variant::Single);
        advance(&mut s, &TickInput { left: 1, right: 0 }, 0.01);
        let y = s.paddles[0].pos.y;
        assert!((y - 387.0).abs() < 1e-3);

        // Neutral input leaves the paddle where it is
        advance(&mut s, &TickInput::default(), 0.01);
        assert_eq!(s.paddles[0].pos.y, y);
        assert_eq!(s.paddles[0].dir, 0);
    }

    #[test]
    fn test_top_wall_flips_vertical_velocity() {
        let mut s = with_ball(
            Variant::Single,
            Ball::new(Vec2::new(500.0, 14.0), Vec2::new(0.0, -100.0)),
        );
        advance(&mut s, &TickInput::default(), 0.016);
        assert_eq!(s.balls[0].vel.y, 100.0);
    }

    #[test]
    fn test_bottom_wall_flips_vertical_velocity() {
        let mut s = with_ball(
            Variant::Swarm,
            Ball::new(Vec2::new(500.0, 760.0), Vec2::new(0.0, 100.0)),
        );
        advance(&mut s, &TickInput::default(), 0.016);
        assert_eq!(s.balls[0].vel.y, -100.0);
    }

    #[test]
    fn test_left_paddle_returns_ball() {
        let mut s = with_ball(
            Variant::Single,
            Ball::new(Vec2::new(22.0, 384.0), Vec2::new(-50.0, 0.0)),
        );
        advance(&mut s, &TickInput::default(), 0.001);
        assert_eq!(s.balls[0].vel.x, 50.0);
    }

    #[test]
    fn test_ball_outside_hit_zone_passes() {
        let mut s = with_ball(
            Variant::Single,
            Ball::new(Vec2::new(100.0, 384.0), Vec2::new(-50.0, 0.0)),
        );
        advance(&mut s, &TickInput::default(), 0.001);
        assert_eq!(s.balls[0].vel.x, -50.0);
    }

    #[test]
    fn test_right_wall_only_without_right_paddle() {
        let ball = Ball::new(Vec2::new(1010.0, 200.0), Vec2::new(100.0, 0.0));

        let mut single = with_ball(Variant::Single, ball.clone());
        advance(&mut single, &TickInput::default(), 0.001);
        assert_eq!(single.balls[0].vel.x, -100.0);

        let mut swarm = with_ball(Variant::Swarm, ball);
        advance(&mut swarm, &TickInput::default(), 0.001);
        assert_eq!(swarm.balls[0].vel.x, 100.0);
    }

    #[test]
    fn test_custom_field_limits() {
        let mut config = GameConfig::from_variant(Variant::Swarm);
        config.field.width = 800.0;
        config.field.height = 600.0;
        let mut s = GameState::new(&config, 5);

        // Right paddle sits against the narrower field
        let right = s.paddle(Side::Right).unwrap().clone();
        assert_eq!(right.pos, Vec2::new(775.0, 300.0));
        assert_eq!(right.hit_band(&s.field), (775.0, 780.0));

        // Paddles clamp to the shorter field
        for _ in 0..100 {
            advance(&mut s, &TickInput { left: 1, right: 1 }, 0.05);
        }
        assert_eq!(s.paddles[0].pos.y, 535.0);
        assert_eq!(s.paddles[1].pos.y, 535.0);
        for _ in 0..100 {
            advance(&mut s, &TickInput { left: -1, right: -1 }, 0.05);
        }
        assert_eq!(s.paddles[0].pos.y, 65.0);

        // Bottom wall follows the field height
        s.balls = vec![Ball::new(Vec2::new(400.0, 590.0), Vec2::new(0.0, 100.0))];
        advance(&mut s, &TickInput::default(), 0.016);
        assert_eq!(s.balls[0].vel.y, -100.0);

        // Right wall follows the field width in the single-paddle stage
        let mut config = GameConfig::from_variant(Variant::Single);
        config.field.width = 800.0;
        config.field.height = 600.0;
        let mut single = GameState::new(&config, 5);
        single.balls = vec![Ball::new(Vec2::new(785.0, 300.0), Vec2::new(100.0, 0.0))];
        advance(&mut single, &TickInput::default(), 0.001);
        assert_eq!(single.balls[0].vel.x, -100.0);

        // A ball short of the right wall keeps going
        single.balls = vec![Ball::new(Vec2::new(700.0, 300.0), Vec2::new(100.0, 0.0))];
        advance(&mut single, &TickInput::default(), 0.001);
        assert_eq!(single.balls[0].vel.x, 100.0);
    }

    #[test]
    fn test_right_paddle_returns_ball() {
        let mut s = with_ball(
            Variant::Swarm,
            Ball::new(Vec2::new(1001.0, 384.0), Vec2::new(80.0, 0.0)),
        );
        advance(&mut s, &TickInput::default(), 0.001);
        assert_eq!(s.balls[0].vel.x, -80.0);
    }

    #[test]
    fn test_aux_speed_floor_same_step() {
        let mut s = with_ball(
            Variant::Swarm,
            Ball::auxiliary(Vec2::new(512.0, 384.0), Vec2::new(30.0, 10.0)),
        );
        advance(&mut s, &TickInput::default(), 0.016);
        assert_eq!(s.balls[0].vel.x, 50.0);

        s.balls[0].vel.x = -12.0;
        advance(&mut s, &TickInput::default(), 0.016);
        assert_eq!(s.balls[0].vel.x, -50.0);
    }

    #[test]
    fn test_primary_ball_has_no_speed_floor() {
        let mut s = with_ball(
            Variant::Swarm,
            Ball::new(Vec2::new(512.0, 384.0), Vec2::new(30.0, 10.0)),
        );
        advance(&mut s, &TickInput::default(), 0.016);
        assert_eq!(s.balls[0].vel.x, 30.0);
    }

    #[test]
    fn test_walls_variant_is_frozen() {
        let mut s = state(Variant::Walls);
        let before = s.clone();
        for _ in 0..10 {
            advance(&mut s, &TickInput { left: 1, right: 1 }, 0.016);
        }
        assert_eq!(s, before);
    }

    #[test]
    fn test_clamp_delta() {
        assert_eq!(clamp_delta(0.2, 0.05), 0.05);
        assert_eq!(clamp_delta(0.01, 0.05), 0.01);
        assert_eq!(clamp_delta(-1.0, 0.05), 0.0);
        assert_eq!(clamp_delta(f32::NAN, 0.05), 0.0);
    }

    proptest! {
        #[test]
        fn prop_long_frames_match_max_delta(
            dt in 0.05f32..10.0,
            left in -1i8..=1,
            right in -1i8..=1,
        ) {
            let input = TickInput { left, right };
            let mut clamped = state(Variant::Swarm);
            let mut long = clamped.clone();
            advance(&mut clamped, &input, 0.05);
            advance(&mut long, &input, dt);
            prop_assert_eq!(clamped, long);
        }

        #[test]
        fn prop_top_wall_flip_ignores_x(x in 0.0f32..1024.0) {
            let mut s = with_ball(
                Variant::Single,
                Ball::new(Vec2::new(x, 14.0), Vec2::new(0.0, -100.0)),
            );
            advance(&mut s, &TickInput::default(), 0.016);
            prop_assert_eq!(s.balls[0].vel.y, 100.0);
        }

        #[test]
        fn prop_paddles_stay_on_field(
            steps in proptest::collection::vec((-1i8..=1, 0.0f32..0.2), 1..100),
        ) {
            let mut s = state(Variant::Swarm);
            for (dir, dt) in steps {
                advance(&mut s, &TickInput { left: dir, right: -dir }, dt);
                for paddle in &s.paddles {
                    prop_assert!(paddle.pos.y >= 65.0 && paddle.pos.y <= 703.0);
                }
            }
        }
    }
}
