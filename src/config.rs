//! Match configuration
//!
//! Every tunable the match core recognizes, loadable from a partial JSON
//! file. Validated once at match construction; the simulation assumes a
//! valid config from then on.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts;

/// Rejected configuration, reported at match construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Grid needs at least one row and one column
    EmptyGrid,
    /// Ball speed must be positive
    ZeroBallSpeed,
    /// Paddle speed must be positive
    ZeroPaddleSpeed,
    /// Target frame rate must be positive
    ZeroFrameRate,
    /// Lives must start above zero
    NoLives,
    /// Named dimension must be positive
    BadDimension(&'static str),
    /// Named clearance/margin may not be negative
    NegativeMargin(&'static str),
    /// Computed brick width came out non-positive
    GridTooWide,
    /// Paddle does not fit between its edge margins
    PaddleTooWide,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyGrid => write!(f, "brick grid needs at least one row and one column"),
            ConfigError::ZeroBallSpeed => write!(f, "ball speed must be positive"),
            ConfigError::ZeroPaddleSpeed => write!(f, "paddle speed must be positive"),
            ConfigError::ZeroFrameRate => write!(f, "target frame rate must be positive"),
            ConfigError::NoLives => write!(f, "starting lives must be at least 1"),
            ConfigError::BadDimension(what) => write!(f, "{what} must be positive"),
            ConfigError::NegativeMargin(what) => write!(f, "{what} may not be negative"),
            ConfigError::GridTooWide => write!(f, "brick grid does not fit the arena width"),
            ConfigError::PaddleTooWide => {
                write!(f, "paddle does not fit between its edge margins")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Match tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    // === Arena ===
    /// Arena width in pixels
    pub arena_width: f32,
    /// Arena height in pixels
    pub arena_height: f32,
    /// Wall thickness along the left/right/top edges
    pub border_width: f32,
    /// Frame rate the fixed-timestep driver targets
    pub target_fps: u32,

    // === Ball ===
    /// Side length of the ball's square bounding box
    pub ball_size: f32,
    /// Launch speed per axis (pixels/second)
    pub ball_speed: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Horizontal movement speed (pixels/second)
    pub paddle_speed: f32,
    /// Paddle center height above the bottom edge
    pub paddle_dist_from_bottom: f32,
    /// Closest the paddle may get to either side wall
    pub min_dist_from_edge: f32,

    // === Brick grid ===
    pub brick_rows: u32,
    pub brick_columns: u32,
    pub brick_height: f32,
    /// Gap between the outermost bricks and the walls
    pub brick_border_clearance: f32,
    /// Gap between neighboring bricks
    pub brick_brick_clearance: f32,

    // === Lives ===
    pub starting_lives: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            arena_width: consts::ARENA_WIDTH,
            arena_height: consts::ARENA_HEIGHT,
            border_width: consts::BORDER_WIDTH,
            target_fps: consts::TARGET_FPS,

            ball_size: consts::BALL_SIZE,
            ball_speed: consts::BALL_SPEED,

            paddle_width: consts::PADDLE_WIDTH,
            paddle_height: consts::PADDLE_HEIGHT,
            paddle_speed: consts::PADDLE_SPEED,
            paddle_dist_from_bottom: consts::PADDLE_DIST_FROM_BOTTOM,
            min_dist_from_edge: consts::MIN_DIST_FROM_EDGE,

            brick_rows: consts::BRICK_ROWS,
            brick_columns: consts::BRICK_COLUMNS,
            brick_height: consts::BRICK_HEIGHT,
            brick_border_clearance: consts::BRICK_BORDER_CLEARANCE,
            brick_brick_clearance: consts::BRICK_BRICK_CLEARANCE,

            starting_lives: consts::STARTING_LIVES,
        }
    }
}

impl MatchConfig {
    /// Uniform brick width that partitions the usable arena width exactly:
    /// total brick widths plus inter-brick gaps fill the span between the
    /// two border clearances with no gap and no overlap.
    pub fn brick_width(&self) -> f32 {
        let usable = self.arena_width
            - 2.0 * (self.border_width + self.brick_border_clearance)
            - self.brick_columns.saturating_sub(1) as f32 * self.brick_brick_clearance;
        usable / self.brick_columns as f32
    }

    /// Arena midpoint, where the ball launches from
    pub fn arena_center(&self) -> Vec2 {
        Vec2::new(self.arena_width, self.arena_height) * 0.5
    }

    /// Seconds per simulation step at the configured frame rate
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.target_fps as f32
    }

    /// Reject configs the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_fps == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }
        if self.brick_rows == 0 || self.brick_columns == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if self.ball_speed <= 0.0 {
            return Err(ConfigError::ZeroBallSpeed);
        }
        if self.paddle_speed <= 0.0 {
            return Err(ConfigError::ZeroPaddleSpeed);
        }
        if self.starting_lives == 0 {
            return Err(ConfigError::NoLives);
        }

        let dimensions = [
            (self.arena_width, "arena width"),
            (self.arena_height, "arena height"),
            (self.ball_size, "ball size"),
            (self.paddle_width, "paddle width"),
            (self.paddle_height, "paddle height"),
            (self.brick_height, "brick height"),
        ];
        for (value, what) in dimensions {
            if value <= 0.0 {
                return Err(ConfigError::BadDimension(what));
            }
        }

        let margins = [
            (self.border_width, "border width"),
            (self.brick_border_clearance, "brick-border clearance"),
            (self.brick_brick_clearance, "brick-brick clearance"),
            (self.min_dist_from_edge, "edge margin"),
            (self.paddle_dist_from_bottom, "paddle bottom offset"),
        ];
        for (value, what) in margins {
            if value < 0.0 {
                return Err(ConfigError::NegativeMargin(what));
            }
        }

        if self.brick_width() <= 0.0 {
            return Err(ConfigError::GridTooWide);
        }
        // The paddle clamp band must be non-empty
        if self.arena_width < 2.0 * self.min_dist_from_edge + self.paddle_width {
            return Err(ConfigError::PaddleTooWide);
        }
        Ok(())
    }
}
