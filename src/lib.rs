//! Bricker - A breakout-style arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, bricks, match state)
//! - `config`: Match configuration with construction-time validation
//! - `counter`: Shared tally counters (bricks remaining, lives remaining)
//! - `dialog`: Blocking dialog services supplied by the frontend
//! - `ui`: Terminal frontend (rendering, input, modal dialogs)

pub mod config;
pub mod counter;
pub mod dialog;
pub mod sim;
pub mod ui;

pub use config::{ConfigError, MatchConfig};
pub use counter::Counter;

/// Game configuration constants
pub mod consts {
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 700.0;
    pub const ARENA_HEIGHT: f32 = 500.0;
    /// Wall thickness along the left/right/top edges (bottom stays open)
    pub const BORDER_WIDTH: f32 = 5.0;
    /// Target frame rate for the fixed-timestep driver
    pub const TARGET_FPS: u32 = 150;

    /// Ball defaults - square bounding box, center-anchored
    pub const BALL_SIZE: f32 = 20.0;
    pub const BALL_SPEED: f32 = 200.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 15.0;
    pub const PADDLE_SPEED: f32 = 500.0;
    /// Paddle center height above the bottom edge
    pub const PADDLE_DIST_FROM_BOTTOM: f32 = 30.0;
    /// Closest the paddle may get to either side wall
    pub const MIN_DIST_FROM_EDGE: f32 = 10.0;

    /// Brick grid defaults
    pub const BRICK_ROWS: u32 = 5;
    pub const BRICK_COLUMNS: u32 = 8;
    pub const BRICK_HEIGHT: f32 = 15.0;
    /// Gap between the outermost bricks and the walls
    pub const BRICK_BORDER_CLEARANCE: f32 = 5.0;
    /// Gap between neighboring bricks
    pub const BRICK_BRICK_CLEARANCE: f32 = 1.0;

    /// Lives
    pub const STARTING_LIVES: u32 = 3;

    /// HUD layout
    pub const HUD_MARGIN_X: f32 = 10.0;
    pub const HUD_ICON_SIZE: f32 = 15.0;
    /// Heart row height above the bottom edge
    pub const GRAPHIC_LIVES_FROM_BOTTOM: f32 = 60.0;
    /// Numeric readout height above the bottom edge
    pub const NUMERIC_LIVES_FROM_BOTTOM: f32 = 90.0;
}
