use glam::Vec2;

/// Which end of the rope a body hangs from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RopeEnd {
    A, // left of the pulley
    B, // right of the pulley
}

/// MassPoint component - a box hanging from one end of the rope
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassPoint {
    pub pos: Vec2,
    pub vel: Vec2,
    pub mass: f32,          // kg
    pub force: Vec2,        // accumulated until the next integration
    pub half_extents: Vec2, // box size / 2, for ground contact and drawing
}

impl MassPoint {
    pub fn new(pos: Vec2, mass: f32, half_extents: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            mass,
            force: Vec2::ZERO,
            half_extents,
        }
    }

    /// A bare point with the given position and velocity
    pub fn at(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            mass: 1.0,
            force: Vec2::ZERO,
            half_extents: Vec2::ZERO,
        }
    }

    pub fn apply_force(&mut self, force: Vec2) {
        self.force += force;
    }

    /// Distance from this body to a point
    pub fn distance_to(&self, point: Vec2) -> f32 {
        self.pos.distance(point)
    }
}

/// Handles to the two rope bodies plus the fixed pulley.
///
/// Bodies are addressed through these handles, never rediscovered by
/// scanning the world for some rendering attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PulleyRig {
    pub anchor: Vec2,
    pub radius: f32,
    pub mass_a: hecs::Entity,
    pub mass_b: hecs::Entity,
}

impl PulleyRig {
    pub fn entity(&self, end: RopeEnd) -> hecs::Entity {
        match end {
            RopeEnd::A => self.mass_a,
            RopeEnd::B => self.mass_b,
        }
    }
}
