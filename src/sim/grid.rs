//! Brick grid layout and destruction handling
//!
//! The registry owns the grid-build algorithm and the per-brick destruction
//! handler. It reports remaining bricks through a shared counter; win/lose
//! decisions stay with the match tick.

use std::rc::Rc;

use glam::Vec2;

use crate::config::MatchConfig;
use crate::counter::Counter;

use super::rect::Rect;
use super::scene::{Layer, ObjectId, Scene, Sprite};

/// Brick registry: builds the grid, handles destruction, tracks the tally
#[derive(Debug)]
pub struct BrickField {
    counter: Rc<Counter>,
}

impl BrickField {
    /// Lay out `brick_rows × brick_columns` bricks across the top of the
    /// arena, left to right, top to bottom. The shared counter is incremented
    /// once per placed brick, so it reads `rows × columns` afterwards.
    pub fn build(config: &MatchConfig, scene: &mut Scene, counter: Rc<Counter>) -> Self {
        let brick_width = config.brick_width();
        let size = Vec2::new(brick_width, config.brick_height);
        let origin = config.border_width + config.brick_border_clearance;

        let mut y = origin;
        for _ in 0..config.brick_rows {
            let mut x = origin;
            for _ in 0..config.brick_columns {
                scene.place(Layer::Static, Rect::new(Vec2::new(x, y), size), Sprite::Brick);
                counter.increment();
                x += brick_width + config.brick_brick_clearance;
            }
            y += config.brick_height + config.brick_brick_clearance;
        }

        log::info!(
            "built {}x{} brick grid, brick width {:.3}",
            config.brick_rows,
            config.brick_columns,
            brick_width
        );
        Self { counter }
    }

    /// Handle a ball contact with brick `id`: remove it from the static
    /// layer and decrement the tally, exactly once per brick. A repeat
    /// report for an already-removed brick is a no-op.
    pub fn on_brick_hit(&self, id: ObjectId, scene: &mut Scene) -> bool {
        if scene.remove(Layer::Static, id) {
            self.counter.decrement();
            true
        } else {
            log::debug!("contact report for already-removed brick {id}");
            false
        }
    }

    /// Bricks still standing
    pub fn remaining(&self) -> u32 {
        self.counter.value()
    }
}
