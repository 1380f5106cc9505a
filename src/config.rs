//! Game configuration
//!
//! Field geometry is immutable once built and is handed to the simulation at
//! construction. A `Variant` preset picks the stage: paddle count, swarm size,
//! and whether the simulation runs at all.
//!
//! Native builds read the environment:
//! - `PONG_VARIANT`: `single` | `swarm` | `walls`
//! - `PONG_CONFIG`: path to a JSON `GameConfig` (missing fields use defaults)
//! - `PONG_SEED`: u64 seed for the auxiliary-ball RNG

use std::path::Path;

use anyhow::Context;
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tutorial stage presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// One paddle, one ball, walls on three sides
    Single,
    /// Two paddles, a primary ball and a swarm of auxiliary balls
    #[default]
    Swarm,
    /// Walls, paddle and ball drawn but never updated
    Walls,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Single => "single",
            Variant::Swarm => "swarm",
            Variant::Walls => "walls",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "single" | "1" => Some(Variant::Single),
            "swarm" | "2" => Some(Variant::Swarm),
            "walls" | "3" => Some(Variant::Walls),
            _ => None,
        }
    }

    /// Paddles in play for this stage
    pub fn paddle_count(&self) -> u8 {
        match self {
            Variant::Swarm => 2,
            Variant::Single | Variant::Walls => 1,
        }
    }

    /// Auxiliary balls spawned next to the primary ball
    pub fn aux_ball_count(&self) -> usize {
        match self {
            Variant::Swarm => AUX_BALL_COUNT,
            Variant::Single | Variant::Walls => 0,
        }
    }

    /// Whether the simulation step moves anything
    pub fn simulates(&self) -> bool {
        !matches!(self, Variant::Walls)
    }
}

/// Playfield geometry and movement tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub width: f32,
    pub height: f32,
    /// Wall thickness, ball size and paddle width
    pub thickness: f32,
    pub paddle_height: f32,
    /// Paddle speed (units/s)
    pub paddle_speed: f32,
    /// Gap between a paddle and its side of the field
    pub paddle_margin: f32,
    /// Hit band is [paddle.x + near, paddle.x + far] on the left side (mirrored on the right)
    pub hit_zone_near: f32,
    pub hit_zone_far: f32,
    /// Horizontal speed floor for auxiliary balls
    pub aux_min_speed_x: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            thickness: THICKNESS,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_margin: PADDLE_MARGIN,
            hit_zone_near: HIT_ZONE_NEAR,
            hit_zone_far: HIT_ZONE_FAR,
            aux_min_speed_x: AUX_MIN_SPEED_X,
        }
    }
}

impl FieldConfig {
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Lowest y a paddle center may reach
    #[inline]
    pub fn paddle_min_y(&self) -> f32 {
        self.paddle_height / 2.0 + self.thickness
    }

    /// Highest y a paddle center may reach
    #[inline]
    pub fn paddle_max_y(&self) -> f32 {
        self.height - self.paddle_height / 2.0 - self.thickness
    }
}

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub variant: Variant,
    pub field: FieldConfig,
    /// Overrides the variant's paddle count (clamped to 1..=2)
    pub paddles: Option<u8>,
    /// Overrides the variant's auxiliary ball count
    pub aux_balls: Option<usize>,
    /// Auxiliary velocity components are uniform in [-range, range]
    pub aux_speed_range: f32,
    pub ball_start_vel: Vec2,
    /// Largest simulation step (seconds)
    pub max_delta: f32,
    /// Frame pacing target (milliseconds)
    pub frame_target_ms: u64,
    /// RNG seed; a random one is picked at startup when absent
    pub seed: Option<u64>,
    pub window_title: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::from_variant(Variant::default())
    }
}

impl GameConfig {
    /// Preset configuration for a stage
    pub fn from_variant(variant: Variant) -> Self {
        Self {
            variant,
            field: FieldConfig::default(),
            paddles: None,
            aux_balls: None,
            aux_speed_range: AUX_SPEED_RANGE,
            ball_start_vel: Vec2::new(BALL_START_VEL.0, BALL_START_VEL.1),
            max_delta: MAX_DELTA,
            frame_target_ms: FRAME_TARGET_MS,
            seed: None,
            window_title: "Game Programming Chapter 1".to_string(),
        }
    }

    pub fn paddle_count(&self) -> u8 {
        self.paddles
            .unwrap_or_else(|| self.variant.paddle_count())
            .clamp(1, 2)
    }

    pub fn aux_ball_count(&self) -> usize {
        self.aux_balls
            .unwrap_or_else(|| self.variant.aux_ball_count())
    }

    /// The right edge is a wall only while no right paddle guards it
    pub fn has_right_wall(&self) -> bool {
        self.paddle_count() < 2
    }

    pub fn simulates(&self) -> bool {
        self.variant.simulates()
    }

    /// Parse a JSON config. A file without a `variant` key keeps `fallback`.
    pub fn from_json(json: &str, fallback: Variant) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let has_variant = value.get("variant").is_some();
        let mut config: GameConfig = serde_json::from_value(value)?;
        if !has_variant {
            config.variant = fallback;
        }
        Ok(config)
    }

    /// Load a JSON config file
    pub fn load_file(path: &Path, fallback: Variant) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config '{}'", path.display()))?;
        Self::from_json(&json, fallback)
            .with_context(|| format!("Failed to parse config '{}'", path.display()))
    }

    /// Build the configuration from process environment variables
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build the configuration from a variable lookup. Bad values are logged and ignored.
    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Self {
        let variant = match get("PONG_VARIANT") {
            Some(name) => Variant::from_str(&name).unwrap_or_else(|| {
                log::warn!(
                    "Unknown PONG_VARIANT '{}', using {}",
                    name,
                    Variant::default().as_str()
                );
                Variant::default()
            }),
            None => Variant::default(),
        };

        let mut config = match get("PONG_CONFIG") {
            Some(path) => match Self::load_file(Path::new(&path), variant) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path);
                    config
                }
                Err(e) => {
                    log::warn!("{:#}; using {} preset", e, variant.as_str());
                    Self::from_variant(variant)
                }
            },
            None => Self::from_variant(variant),
        };

        if let Some(seed) = get("PONG_SEED") {
            match seed.trim().parse::<u64>() {
                Ok(seed) => config.seed = Some(seed),
                Err(_) => log::warn!("Ignoring invalid PONG_SEED '{}'", seed),
            }
        }

        config
    }
}
