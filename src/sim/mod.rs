//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (scene objects keep placement order)
//! - No rendering or terminal dependencies

pub mod grid;
pub mod hud;
pub mod physics;
pub mod rect;
pub mod scene;
pub mod state;
pub mod tick;

pub use grid::BrickField;
pub use hud::{GraphicLives, NumericLives};
pub use physics::{BallStep, step_ball, step_paddle};
pub use rect::Rect;
pub use scene::{Layer, ObjectId, Scene, SceneObject, Sprite};
pub use state::{Ball, MatchEvent, MatchPhase, MatchState, Paddle};
pub use tick::{FrameInput, tick};
