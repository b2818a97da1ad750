//! Life displays
//!
//! Two read-only observers of the lives counter, polled once per frame. They
//! own widgets on the background layer and carry no game rules: the graphic
//! row drops one heart per observed decrease, the numeric readout re-renders
//! its text on any change.

use std::rc::Rc;

use glam::Vec2;

use crate::counter::Counter;

use super::rect::Rect;
use super::scene::{Layer, ObjectId, Scene, Sprite};

/// Gap between neighboring heart icons
const ICON_CLEARANCE: f32 = 5.0;

/// Row of heart icons, one per life
#[derive(Debug)]
pub struct GraphicLives {
    lives: Rc<Counter>,
    widgets: Vec<ObjectId>,
    last_seen: u32,
}

impl GraphicLives {
    /// Pre-render `num_of_lives` icons in a row starting at `origin`. The
    /// counter may hold more or fewer lives than there are icons; the row
    /// just shows what it has.
    pub fn new(
        origin: Vec2,
        icon_size: Vec2,
        lives: Rc<Counter>,
        scene: &mut Scene,
        num_of_lives: u32,
    ) -> Self {
        let widgets = (0..num_of_lives)
            .map(|i| {
                let offset = Vec2::new(i as f32 * (icon_size.x + ICON_CLEARANCE), 0.0);
                scene.place(
                    Layer::Background,
                    Rect::new(origin + offset, icon_size),
                    Sprite::Heart,
                )
            })
            .collect();
        let last_seen = lives.value();
        Self {
            lives,
            widgets,
            last_seen,
        }
    }

    /// Drop the highest-index icon when the counter decreased since the last
    /// poll. Increases never add icons back.
    pub fn update(&mut self, scene: &mut Scene) {
        let current = self.lives.value();
        if current < self.last_seen {
            if let Some(&id) = self.widgets.get(self.last_seen as usize - 1) {
                scene.remove(Layer::Background, id);
            }
            self.last_seen = current;
        }
    }
}

/// Decimal readout of the lives counter
#[derive(Debug)]
pub struct NumericLives {
    lives: Rc<Counter>,
    widget: ObjectId,
    last_seen: u32,
}

impl NumericLives {
    pub fn new(origin: Vec2, size: Vec2, lives: Rc<Counter>, scene: &mut Scene) -> Self {
        let value = lives.value();
        let widget = scene.place(
            Layer::Background,
            Rect::new(origin, size),
            Sprite::Text(value.to_string()),
        );
        Self {
            lives,
            widget,
            last_seen: value,
        }
    }

    /// Re-render the text when the counter changed since the last poll
    pub fn update(&mut self, scene: &mut Scene) {
        let current = self.lives.value();
        if current != self.last_seen {
            if let Some(widget) = scene.object_mut(Layer::Background, self.widget) {
                widget.sprite = Sprite::Text(current.to_string());
            }
            self.last_seen = current;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heart_count(scene: &Scene) -> usize {
        scene
            .objects(Layer::Background)
            .iter()
            .filter(|obj| obj.sprite == Sprite::Heart)
            .count()
    }

    fn numeric_text(scene: &Scene) -> String {
        scene
            .objects(Layer::Background)
            .iter()
            .find_map(|obj| match &obj.sprite {
                Sprite::Text(text) => Some(text.clone()),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn test_graphic_row_layout() {
        let mut scene = Scene::new();
        let lives = Counter::shared(3);
        GraphicLives::new(
            Vec2::new(10.0, 440.0),
            Vec2::splat(15.0),
            lives,
            &mut scene,
            3,
        );
        let hearts: Vec<_> = scene.objects(Layer::Background).iter().collect();
        assert_eq!(hearts.len(), 3);
        // 15px icons with a 5px gap: 20px pitch
        assert_eq!(hearts[0].rect.pos, Vec2::new(10.0, 440.0));
        assert_eq!(hearts[1].rect.pos, Vec2::new(30.0, 440.0));
        assert_eq!(hearts[2].rect.pos, Vec2::new(50.0, 440.0));
    }

    #[test]
    fn test_graphic_drops_one_icon_per_decrease() {
        let mut scene = Scene::new();
        let lives = Counter::shared(3);
        let mut hud = GraphicLives::new(
            Vec2::ZERO,
            Vec2::splat(15.0),
            Rc::clone(&lives),
            &mut scene,
            3,
        );

        lives.decrement();
        hud.update(&mut scene);
        assert_eq!(heart_count(&scene), 2);

        // No change, no removal
        hud.update(&mut scene);
        assert_eq!(heart_count(&scene), 2);

        lives.decrement();
        hud.update(&mut scene);
        assert_eq!(heart_count(&scene), 1);
    }

    #[test]
    fn test_graphic_never_adds_icons_back() {
        let mut scene = Scene::new();
        let lives = Counter::shared(3);
        let mut hud = GraphicLives::new(
            Vec2::ZERO,
            Vec2::splat(15.0),
            Rc::clone(&lives),
            &mut scene,
            3,
        );

        lives.decrement();
        hud.update(&mut scene);
        lives.increment();
        hud.update(&mut scene);
        assert_eq!(heart_count(&scene), 2);
        // A later decrease back to the displayed count removes nothing
        lives.decrement();
        hud.update(&mut scene);
        assert_eq!(heart_count(&scene), 2);
    }

    #[test]
    fn test_graphic_tolerates_more_lives_than_icons() {
        let mut scene = Scene::new();
        let lives = Counter::shared(5);
        let mut hud = GraphicLives::new(
            Vec2::ZERO,
            Vec2::splat(15.0),
            Rc::clone(&lives),
            &mut scene,
            2,
        );

        // Decreases beyond the icon row are absorbed
        lives.decrement();
        hud.update(&mut scene);
        lives.decrement();
        hud.update(&mut scene);
        lives.decrement();
        hud.update(&mut scene);
        assert_eq!(heart_count(&scene), 2);

        lives.decrement();
        hud.update(&mut scene);
        assert_eq!(heart_count(&scene), 1);
    }

    #[test]
    fn test_numeric_tracks_any_change() {
        let mut scene = Scene::new();
        let lives = Counter::shared(3);
        let mut hud = NumericLives::new(
            Vec2::new(10.0, 410.0),
            Vec2::splat(15.0),
            Rc::clone(&lives),
            &mut scene,
        );
        assert_eq!(numeric_text(&scene), "3");

        lives.decrement();
        hud.update(&mut scene);
        assert_eq!(numeric_text(&scene), "2");

        lives.increment();
        hud.update(&mut scene);
        assert_eq!(numeric_text(&scene), "3");
    }
}
