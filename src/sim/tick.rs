//! Per-frame match orchestration
//!
//! `tick` advances one frame in a fixed order: paddle steering, physics,
//! brick destruction, HUD polls, then the end-of-frame rules - life loss
//! first, then win/lose with loss taking precedence. Dialog calls block
//! inside the tick, so a frame that triggers one does not complete until the
//! player answers.

use crate::dialog::Dialogs;

use super::physics;
use super::state::{MatchEvent, MatchPhase, MatchState};

/// Held-key snapshot for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub left_held: bool,
    pub right_held: bool,
}

/// Advance the match by one frame of `dt` seconds
pub fn tick(state: &mut MatchState, input: &FrameInput, dt: f32, dialogs: &mut dyn Dialogs) {
    state.events.clear();
    if state.phase == MatchPhase::Terminated {
        return;
    }

    // Entity updates
    state.paddle.steer(
        input.left_held,
        input.right_held,
        state.config.arena_width,
        state.config.min_dist_from_edge,
        state.config.paddle_speed,
    );
    physics::step_paddle(&mut state.paddle, &state.config, dt);

    let ball_step =
        physics::step_ball(&mut state.ball, &state.paddle, &state.scene, &state.config, dt);
    if ball_step.bounced {
        state.events.push(MatchEvent::BallBounced);
    }
    for id in ball_step.brick_contacts {
        if state.bricks.on_brick_hit(id, &mut state.scene) {
            state.events.push(MatchEvent::BrickDestroyed(id));
        }
    }

    state.graphic_lives.update(&mut state.scene);
    state.numeric_lives.update(&mut state.scene);

    // End-of-frame rules, in order
    check_life_lost(state, dialogs);
    check_match_end(state, dialogs);
}

/// Bottom-edge crossing: spend a life; while lives remain, notify the player
/// and relaunch from the center. At zero lives the lose check takes over,
/// with no notice for the final crossing.
fn check_life_lost(state: &mut MatchState, dialogs: &mut dyn Dialogs) {
    if state.ball.pos.y <= state.config.arena_height {
        return;
    }

    state.lives.decrement();
    state.events.push(MatchEvent::LifeLost);
    log::info!("life lost, {} remaining", state.lives.value());

    if state.lives.value() == 0 {
        return;
    }

    dialogs.notify("You lost a life!");
    let center = state.config.arena_center();
    let speed = state.config.ball_speed;
    state.ball.launch(center, speed, &mut state.rng);
}

/// Win/lose resolution in two steps: the win outcome is set when no bricks
/// remain, then overridden by the lose outcome when no lives remain. Any
/// outcome asks for a rematch: yes rebuilds the match, no terminates.
fn check_match_end(state: &mut MatchState, dialogs: &mut dyn Dialogs) {
    let mut outcome = None;
    if state.bricks_remaining.value() == 0 {
        outcome = Some((MatchEvent::MatchWon, "You win!"));
    }
    if state.lives.value() == 0 {
        // Loss takes precedence when both land on the same frame
        outcome = Some((MatchEvent::MatchLost, "You lose!"));
    }
    let Some((event, message)) = outcome else {
        return;
    };

    state.events.push(event);
    log::info!("match over: {message}");

    let prompt = format!("{message} Play again?");
    if dialogs.confirm(&prompt) {
        state.reset();
    } else {
        state.phase = MatchPhase::Terminated;
    }
}
