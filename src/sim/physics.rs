//! Generic rigid-body step for the axis-aligned arena
//!
//! The motion and bounce response a host engine would normally supply:
//! velocity integration, the paddle's clamp band, elastic wall/paddle
//! response, and ball-brick contact reporting. Game rules never live here -
//! brick contacts are only reported, destruction is the registry's call.

use glam::Vec2;

use crate::config::MatchConfig;

use super::rect::Rect;
use super::scene::{Layer, ObjectId, Scene};
use super::state::{Ball, Paddle};

/// What the ball did during one step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BallStep {
    /// Bricks the ball overlapped, in placement order. Response resolves
    /// against the first; later bricks are tested at the resolved position.
    pub brick_contacts: Vec<ObjectId>,
    /// Whether the ball bounced off anything (wall, paddle, or brick)
    pub bounced: bool,
}

/// Integrate the paddle and hold it inside its legal band
pub fn step_paddle(paddle: &mut Paddle, config: &MatchConfig, dt: f32) {
    paddle.pos.x += paddle.vel.x * dt;

    let min_x = config.min_dist_from_edge;
    let max_x = config.arena_width - config.min_dist_from_edge - paddle.size.x;
    paddle.pos.x = paddle.pos.x.clamp(min_x, max_x);
}

/// Integrate the ball and resolve elastic response against the walls, the
/// paddle, and overlapping bricks. The bottom edge is open: the ball falls
/// through, and the match tick decides what that means.
pub fn step_ball(
    ball: &mut Ball,
    paddle: &Paddle,
    scene: &Scene,
    config: &MatchConfig,
    dt: f32,
) -> BallStep {
    ball.pos += ball.vel * dt;
    let mut step = BallStep::default();

    // Side and top walls (bottom stays open)
    let half = ball.size / 2.0;
    let left = config.border_width + half;
    let right = config.arena_width - config.border_width - half;
    let top = config.border_width + half;

    if ball.pos.x < left {
        ball.pos.x = left;
        ball.vel.x = ball.vel.x.abs();
        step.bounced = true;
    } else if ball.pos.x > right {
        ball.pos.x = right;
        ball.vel.x = -ball.vel.x.abs();
        step.bounced = true;
    }
    if ball.pos.y < top {
        ball.pos.y = top;
        ball.vel.y = ball.vel.y.abs();
        step.bounced = true;
    }

    // Paddle, like any solid body
    if let Some(push) = paddle.rect().push_out(&ball.rect()) {
        ball.pos += push;
        reflect(ball, push);
        step.bounced = true;
    }

    // Bricks
    for obj in scene.objects(Layer::Static) {
        if let Some(push) = obj.rect.push_out(&ball.rect()) {
            if step.brick_contacts.is_empty() {
                ball.pos += push;
                reflect(ball, push);
                step.bounced = true;
            }
            step.brick_contacts.push(obj.id);
        }
    }

    step
}

/// Flip the velocity component along the push-out axis so the ball moves
/// away from the surface it was pushed out of
fn reflect(ball: &mut Ball, push: Vec2) {
    if push.x < 0.0 {
        ball.vel.x = -ball.vel.x.abs();
    } else if push.x > 0.0 {
        ball.vel.x = ball.vel.x.abs();
    }
    if push.y < 0.0 {
        ball.vel.y = -ball.vel.y.abs();
    } else if push.y > 0.0 {
        ball.vel.y = ball.vel.y.abs();
    }
}
