//! Layered scene of placed objects
//!
//! The entity set a host engine would normally own: a background layer that
//! never collides (backdrop, HUD widgets) and a static layer the ball
//! collides with (bricks). Ball and paddle are first-class simulation state,
//! not scene objects, so they live on `MatchState` directly.

use super::rect::Rect;

/// Identifies a placed object for later removal or update
pub type ObjectId = u32;

/// Render/collision layers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// Drawn behind everything, never collides (backdrop, HUD)
    Background,
    /// Collides with the ball (bricks)
    Static,
}

/// What the frontend draws for an object
#[derive(Debug, Clone, PartialEq)]
pub enum Sprite {
    Backdrop,
    Brick,
    Heart,
    Text(String),
}

/// One placed object
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub id: ObjectId,
    pub rect: Rect,
    pub sprite: Sprite,
}

/// Object sets per layer, placement order preserved
#[derive(Debug, Default)]
pub struct Scene {
    background: Vec<SceneObject>,
    statics: Vec<SceneObject>,
    next_id: ObjectId,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place an object, returning the id that identifies it from now on
    pub fn place(&mut self, layer: Layer, rect: Rect, sprite: Sprite) -> ObjectId {
        let id = self.next_id;
        self.next_id += 1;
        self.layer_mut(layer).push(SceneObject { id, rect, sprite });
        id
    }

    /// Remove by id. Returns whether the object was still present, so
    /// callers can treat a repeat removal as a no-op.
    pub fn remove(&mut self, layer: Layer, id: ObjectId) -> bool {
        let objects = self.layer_mut(layer);
        match objects.iter().position(|obj| obj.id == id) {
            Some(index) => {
                objects.remove(index);
                true
            }
            None => false,
        }
    }

    /// Objects on a layer, in placement order
    pub fn objects(&self, layer: Layer) -> &[SceneObject] {
        match layer {
            Layer::Background => &self.background,
            Layer::Static => &self.statics,
        }
    }

    /// Mutable access for in-place sprite updates (HUD text)
    pub fn object_mut(&mut self, layer: Layer, id: ObjectId) -> Option<&mut SceneObject> {
        self.layer_mut(layer).iter_mut().find(|obj| obj.id == id)
    }

    fn layer_mut(&mut self, layer: Layer) -> &mut Vec<SceneObject> {
        match layer {
            Layer::Background => &mut self.background,
            Layer::Static => &mut self.statics,
        }
    }
}
