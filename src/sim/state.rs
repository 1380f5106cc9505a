//! Simulation state and entity types
//!
//! Everything is created once in `GameState::new` and mutated in place by
//! `advance`; nothing is spawned or removed afterwards.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::{FieldConfig, GameConfig};

/// Which side of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// A player paddle
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub side: Side,
    /// x is the paddle's left edge, y its vertical center
    pub pos: Vec2,
    /// Direction intent for this frame: -1 up, 0 still, 1 down
    pub dir: i8,
}

impl Paddle {
    /// Paddle at its starting spot, vertically centered
    pub fn new(side: Side, field: &FieldConfig) -> Self {
        let x = match side {
            Side::Left => field.paddle_margin,
            Side::Right => field.width - field.paddle_margin - field.thickness,
        };
        Self {
            side,
            pos: Vec2::new(x, field.height / 2.0),
            dir: 0,
        }
    }

    pub fn set_direction(&mut self, dir: i8) {
        self.dir = dir.signum();
    }

    /// Horizontal band a ball must be inside to bounce off this paddle.
    /// The right band mirrors the left one across the paddle.
    pub fn hit_band(&self, field: &FieldConfig) -> (f32, f32) {
        match self.side {
            Side::Left => (
                self.pos.x + field.hit_zone_near,
                self.pos.x + field.hit_zone_far,
            ),
            Side::Right => (
                self.pos.x + field.thickness - field.hit_zone_far,
                self.pos.x + field.thickness - field.hit_zone_near,
            ),
        }
    }
}

/// A ball entity
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    /// Center position
    pub pos: Vec2,
    /// Velocity (units/s)
    pub vel: Vec2,
    /// Auxiliary balls are subject to the horizontal speed floor
    pub auxiliary: bool,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            auxiliary: false,
        }
    }

    pub fn auxiliary(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            auxiliary: true,
        }
    }
}

/// Complete simulation state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Field geometry (immutable for the life of the state)
    pub field: FieldConfig,
    /// Right edge reflects balls (single-paddle stages)
    pub right_wall: bool,
    /// False for the frozen walls-only stage
    pub simulate: bool,
    /// Largest step `advance` will take
    pub max_delta: f32,
    /// Left paddle first, then the right one if present
    pub paddles: Vec<Paddle>,
    /// Primary ball first, auxiliary balls after it
    pub balls: Vec<Ball>,
}

impl GameState {
    /// Create the initial state for a configuration
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        let field = config.field.clone();
        let center = field.center();

        let mut paddles = vec![Paddle::new(Side::Left, &field)];
        if config.paddle_count() > 1 {
            paddles.push(Paddle::new(Side::Right, &field));
        }

        let aux_count = config.aux_ball_count();
        let mut balls = Vec::with_capacity(1 + aux_count);
        balls.push(Ball::new(center, config.ball_start_vel));

        let mut rng = Pcg32::seed_from_u64(seed);
        let range = config.aux_speed_range.abs();
        for _ in 0..aux_count {
            let vel = Vec2::new(
                rng.random_range(-range..=range),
                rng.random_range(-range..=range),
            );
            balls.push(Ball::auxiliary(center, vel));
        }

        Self {
            right_wall: config.has_right_wall(),
            simulate: config.simulates(),
            max_delta: config.max_delta,
            field,
            paddles,
            balls,
        }
    }

    pub fn paddle(&self, side: Side) -> Option<&Paddle> {
        self.paddles.iter().find(|p| p.side == side)
    }

    pub fn primary_ball(&self) -> Option<&Ball> {
        self.balls.iter().find(|b| !b.auxiliary)
    }

    pub fn aux_balls(&self) -> impl Iterator<Item = &Ball> {
        self.balls.iter().filter(|b| b.auxiliary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Variant;

    #[test]
    fn test_swarm_initial_state() {
        let config = GameConfig::from_variant(Variant::Swarm);
        let state = GameState::new(&config, 7);

        assert_eq!(state.paddles.len(), 2);
        assert_eq!(state.balls.len(), 101);
        assert_eq!(state.aux_balls().count(), 100);

        let center = Vec2::new(512.0, 384.0);
        let primary = state.primary_ball().unwrap();
        assert_eq!(primary.pos, center);
        assert_eq!(primary.vel, Vec2::new(-215.0, 235.0));

        for ball in state.aux_balls() {
            assert_eq!(ball.pos, center);
            assert!((-250.0..=250.0).contains(&ball.vel.x));
            assert!((-250.0..=250.0).contains(&ball.vel.y));
        }
        assert!(!state.right_wall);
    }

    #[test]
    fn test_aux_velocities_are_spread() {
        let state = GameState::new(&GameConfig::from_variant(Variant::Swarm), 1234);
        let first = state.aux_balls().next().unwrap().vel;
        assert!(state.aux_balls().any(|b| b.vel != first));
        assert!(state.aux_balls().any(|b| b.vel.x < 0.0));
        assert!(state.aux_balls().any(|b| b.vel.x > 0.0));
    }

    #[test]
    fn test_same_seed_same_swarm() {
        let config = GameConfig::from_variant(Variant::Swarm);
        assert_eq!(GameState::new(&config, 99), GameState::new(&config, 99));
        assert_ne!(GameState::new(&config, 99), GameState::new(&config, 100));
    }

    #[test]
    fn test_single_initial_state() {
        let state = GameState::new(&GameConfig::from_variant(Variant::Single), 0);
        assert_eq!(state.balls.len(), 1);
        assert_eq!(state.paddles.len(), 1);
        assert!(state.paddle(Side::Right).is_none());
        assert_eq!(state.paddle(Side::Left).unwrap().pos, Vec2::new(10.0, 384.0));
        assert!(state.right_wall);
    }

    #[test]
    fn test_paddle_positions_and_bands() {
        let field = FieldConfig::default();
        let left = Paddle::new(Side::Left, &field);
        let right = Paddle::new(Side::Right, &field);
        assert_eq!(left.hit_band(&field), (20.0, 25.0));
        assert_eq!(right.pos.x, 999.0);
        assert_eq!(right.hit_band(&field), (999.0, 1004.0));
    }

    #[test]
    fn test_set_direction_normalizes() {
        let mut paddle = Paddle::new(Side::Left, &FieldConfig::default());
        paddle.set_direction(-3);
        assert_eq!(paddle.dir, -1);
        paddle.set_direction(0);
        assert_eq!(paddle.dir, 0);
    }
}
