//! Match state and core entity types
//!
//! Everything the simulation mutates lives here: ball and paddle, the
//! layered scene, the two shared counters with their HUD observers, and the
//! seeded RNG that keeps a match reproducible.

use std::rc::Rc;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::{ConfigError, MatchConfig};
use crate::consts;
use crate::counter::Counter;

use super::grid::BrickField;
use super::hud::{GraphicLives, NumericLives};
use super::rect::Rect;
use super::scene::{Layer, ObjectId, Scene, Sprite};

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// Active gameplay
    Playing,
    /// Player declined a rematch; the frontend should exit
    Terminated,
}

/// Things that happened during a tick, for frontends and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchEvent {
    /// Ball bounced off a wall, the paddle, or a brick
    BallBounced,
    /// A brick was destroyed
    BrickDestroyed(ObjectId),
    /// Ball fell past the bottom edge
    LifeLost,
    /// All bricks destroyed
    MatchWon,
    /// All lives spent
    MatchLost,
}

/// The ball - square bounding box, center-anchored
#[derive(Debug, Clone)]
pub struct Ball {
    /// Center position
    pub pos: Vec2,
    pub vel: Vec2,
    /// Side length of the bounding box
    pub size: f32,
}

impl Ball {
    pub fn new(size: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size,
        }
    }

    /// Bounding box for collision and rendering
    pub fn rect(&self) -> Rect {
        Rect::from_center(self.pos, Vec2::splat(self.size))
    }

    /// Center the ball on `center` and launch it on a random diagonal: each
    /// velocity component is ±speed by an independent coin flip, so the four
    /// diagonals are equally likely and the launch is never axis-aligned or
    /// stationary.
    pub fn launch(&mut self, center: Vec2, speed: f32, rng: &mut Pcg32) {
        self.pos = center;
        let vx = if rng.random() { speed } else { -speed };
        let vy = if rng.random() { speed } else { -speed };
        self.vel = Vec2::new(vx, vy);
    }
}

/// The player's paddle
#[derive(Debug, Clone)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Derived each frame from held keys, not persisted between frames
    pub vel: Vec2,
}

impl Paddle {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            vel: Vec2::ZERO,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Map held keys to a horizontal velocity. A direction whose edge margin
    /// is already reached contributes nothing; when both keys are held and
    /// both directions are legal, the inputs cancel.
    pub fn steer(
        &mut self,
        left_held: bool,
        right_held: bool,
        arena_width: f32,
        min_dist_from_edge: f32,
        speed: f32,
    ) {
        let too_far_left = self.pos.x <= min_dist_from_edge;
        let too_far_right = self.pos.x >= arena_width - min_dist_from_edge - self.size.x;

        let mut direction = 0.0;
        if left_held && !too_far_left {
            direction -= 1.0;
        }
        if right_held && !too_far_right {
            direction += 1.0;
        }
        self.vel = Vec2::new(direction * speed, 0.0);
    }
}

/// Complete match state
pub struct MatchState {
    pub config: MatchConfig,
    pub phase: MatchPhase,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Background + static layers, shared with the frontend
    pub scene: Scene,
    /// Brick registry (holds its own handle to `bricks_remaining`)
    pub bricks: BrickField,
    /// Bricks still standing
    pub bricks_remaining: Rc<Counter>,
    /// Lives left
    pub lives: Rc<Counter>,
    pub graphic_lives: GraphicLives,
    pub numeric_lives: NumericLives,
    /// What happened during the most recent tick
    pub events: Vec<MatchEvent>,
    pub rng: Pcg32,
}

impl MatchState {
    /// Validate the config and build a fresh match from a seed
    pub fn new(config: MatchConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, Pcg32::seed_from_u64(seed)))
    }

    /// Rebuild for a rematch: same config, RNG stream carried forward so the
    /// next launch direction differs, the triggering frame's events kept for
    /// the frontend.
    pub fn reset(&mut self) {
        let rng = self.rng.clone();
        let events = std::mem::take(&mut self.events);
        *self = Self::build(self.config.clone(), rng);
        self.events = events;
    }

    /// Arena construction: backdrop, ball launch, paddle, brick grid, HUD
    fn build(config: MatchConfig, mut rng: Pcg32) -> Self {
        let mut scene = Scene::new();
        let arena = Vec2::new(config.arena_width, config.arena_height);
        scene.place(
            Layer::Background,
            Rect::new(Vec2::ZERO, arena),
            Sprite::Backdrop,
        );

        let mut ball = Ball::new(config.ball_size);
        ball.launch(config.arena_center(), config.ball_speed, &mut rng);

        let paddle_size = Vec2::new(config.paddle_width, config.paddle_height);
        let paddle_center = Vec2::new(
            config.arena_width / 2.0,
            config.arena_height - config.paddle_dist_from_bottom,
        );
        let paddle = Paddle::new(paddle_center - paddle_size / 2.0, paddle_size);

        let bricks_remaining = Counter::shared(0);
        let bricks = BrickField::build(&config, &mut scene, Rc::clone(&bricks_remaining));

        let lives = Counter::shared(config.starting_lives);
        let icon_size = Vec2::splat(consts::HUD_ICON_SIZE);
        let graphic_lives = GraphicLives::new(
            Vec2::new(
                consts::HUD_MARGIN_X,
                config.arena_height - consts::GRAPHIC_LIVES_FROM_BOTTOM,
            ),
            icon_size,
            Rc::clone(&lives),
            &mut scene,
            config.starting_lives,
        );
        let numeric_lives = NumericLives::new(
            Vec2::new(
                consts::HUD_MARGIN_X,
                config.arena_height - consts::NUMERIC_LIVES_FROM_BOTTOM,
            ),
            icon_size,
            Rc::clone(&lives),
            &mut scene,
        );

        Self {
            config,
            phase: MatchPhase::Playing,
            ball,
            paddle,
            scene,
            bricks,
            bricks_remaining,
            lives,
            graphic_lives,
            numeric_lives,
            events: Vec::new(),
            rng,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_covers_all_diagonals() {
        let mut ball = Ball::new(20.0);
        let center = Vec2::new(350.0, 250.0);
        let mut seen = std::collections::HashSet::new();

        for seed in 0..64 {
            let mut rng = Pcg32::seed_from_u64(seed);
            ball.launch(center, 200.0, &mut rng);
            assert_eq!(ball.pos, center);
            assert_eq!(ball.vel.x.abs(), 200.0);
            assert_eq!(ball.vel.y.abs(), 200.0);
            seen.insert((ball.vel.x > 0.0, ball.vel.y > 0.0));
        }
        // All four diagonals show up across seeds
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_steer_truth_table() {
        let arena_width = 700.0;
        let margin = 10.0;
        let speed = 500.0;
        let mid = Vec2::new(300.0, 470.0);
        let size = Vec2::new(100.0, 15.0);

        // Single key, room to move
        let mut paddle = Paddle::new(mid, size);
        paddle.steer(true, false, arena_width, margin, speed);
        assert_eq!(paddle.vel.x, -speed);
        paddle.steer(false, true, arena_width, margin, speed);
        assert_eq!(paddle.vel.x, speed);

        // Opposing inputs cancel
        paddle.steer(true, true, arena_width, margin, speed);
        assert_eq!(paddle.vel.x, 0.0);

        // No input
        paddle.steer(false, false, arena_width, margin, speed);
        assert_eq!(paddle.vel.x, 0.0);
    }

    #[test]
    fn test_steer_blocks_at_edges() {
        let arena_width = 700.0;
        let margin = 10.0;
        let speed = 500.0;
        let size = Vec2::new(100.0, 15.0);

        // Parked on the left margin: leftward input is ignored
        let mut paddle = Paddle::new(Vec2::new(10.0, 470.0), size);
        paddle.steer(true, false, arena_width, margin, speed);
        assert_eq!(paddle.vel.x, 0.0);
        // Both keys held there: only the legal direction counts
        paddle.steer(true, true, arena_width, margin, speed);
        assert_eq!(paddle.vel.x, speed);

        // Parked on the right margin (700 - 10 - 100)
        let mut paddle = Paddle::new(Vec2::new(590.0, 470.0), size);
        paddle.steer(false, true, arena_width, margin, speed);
        assert_eq!(paddle.vel.x, 0.0);
        paddle.steer(true, true, arena_width, margin, speed);
        assert_eq!(paddle.vel.x, -speed);
    }

    #[test]
    fn test_match_construction() {
        let state = MatchState::new(MatchConfig::default(), 7).unwrap();

        assert_eq!(state.phase, MatchPhase::Playing);
        assert_eq!(state.bricks_remaining.value(), 40);
        assert_eq!(state.lives.value(), 3);
        assert_eq!(state.scene.objects(Layer::Static).len(), 40);

        // Backdrop + 3 hearts + numeric readout
        assert_eq!(state.scene.objects(Layer::Background).len(), 5);

        // Ball launches from the arena center
        assert_eq!(state.ball.pos, Vec2::new(350.0, 250.0));
        assert_eq!(state.ball.vel.x.abs(), 200.0);
        assert_eq!(state.ball.vel.y.abs(), 200.0);

        // Paddle centered, its midpoint the configured height off the floor
        assert_eq!(state.paddle.rect().center(), Vec2::new(350.0, 470.0));
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let mut config = MatchConfig::default();
        config.ball_speed = 0.0;
        assert!(MatchState::new(config, 7).is_err());
    }

    #[test]
    fn test_reset_rebuilds_the_arena() {
        let mut state = MatchState::new(MatchConfig::default(), 7).unwrap();

        // Knock out a brick and a life, then ask for a rematch
        let id = state.scene.objects(Layer::Static)[0].id;
        state.bricks.on_brick_hit(id, &mut state.scene);
        state.lives.decrement();
        state.events.push(MatchEvent::LifeLost);
        state.reset();

        assert_eq!(state.bricks_remaining.value(), 40);
        assert_eq!(state.lives.value(), 3);
        assert_eq!(state.phase, MatchPhase::Playing);
        // The frame's events survive the rebuild
        assert_eq!(state.events, vec![MatchEvent::LifeLost]);
    }
}
