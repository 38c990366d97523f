use glam::Vec2;

use crate::params::Params;
use crate::PulleyConfig;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// How far a box centred at `center` sinks into the top face, if it overlaps
    pub fn top_penetration(&self, center: Vec2, half_extents: Vec2) -> Option<f32> {
        let overlaps_x =
            center.x + half_extents.x > self.min.x && center.x - half_extents.x < self.max.x;
        let depth = center.y + half_extents.y - self.min.y;
        let above_bottom = center.y - half_extents.y < self.max.y;
        (overlaps_x && above_bottom && depth > 0.0).then_some(depth)
    }
}

/// Static scenery the bodies can touch
#[derive(Debug, Clone, Copy)]
pub struct Scene {
    pub ground: Aabb,
}

impl Scene {
    /// Ground slab spanning the canvas (810 wide, 60 tall) with its top at `ground_y`
    pub fn new(config: &PulleyConfig) -> Self {
        let ground = Aabb::new(
            Vec2::new(-5.0, config.ground_y),
            Vec2::new(Params::CANVAS_WIDTH + 5.0, config.ground_y + 60.0),
        );
        Self { ground }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(&PulleyConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ground_matches_canvas() {
        let scene = Scene::default();
        assert_eq!(scene.ground.min.y, 580.0);
        assert_eq!(scene.ground.max.y, 640.0);
        assert_eq!(scene.ground.min.x, -5.0);
        assert_eq!(scene.ground.max.x, 805.0);
    }

    #[test]
    fn test_top_penetration() {
        let ground = Aabb::new(Vec2::new(-5.0, 580.0), Vec2::new(805.0, 640.0));
        let half = Vec2::splat(25.0);

        assert_eq!(ground.top_penetration(Vec2::new(400.0, 500.0), half), None);
        assert_eq!(
            ground.top_penetration(Vec2::new(400.0, 565.0), half),
            Some(10.0)
        );
        assert_eq!(
            ground.top_penetration(Vec2::new(900.0, 565.0), half),
            None,
            "Off the side of the slab"
        );
    }
}
