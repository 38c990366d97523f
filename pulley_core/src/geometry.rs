//! Rope drawing geometry: where the rope leaves the pulley wheel.
//!
//! Pure queries over positions; safe to call every render frame regardless of
//! how often the simulation ticks.

use glam::Vec2;
use std::f32::consts::TAU;

/// Rope outline for one frame, in canvas coordinates (y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RopePath {
    pub center: Vec2,
    pub radius: f32,
    /// Where the A-side rope segment meets the wheel
    pub point_a: Vec2,
    /// Where the B-side rope segment meets the wheel
    pub point_b: Vec2,
    /// Arc over the wheel from `point_a` to `point_b`, clockwise on screen
    pub arc_start: f32,
    pub arc_end: f32,
}

impl RopePath {
    /// Clockwise sweep of the arc in radians, in [0, TAU)
    pub fn arc_sweep(&self) -> f32 {
        (self.arc_end - self.arc_start).rem_euclid(TAU)
    }

    /// Polyline A → wheel → B, with `arc_segments` straight pieces over the wheel
    pub fn polyline(&self, mass_a: Vec2, mass_b: Vec2, arc_segments: usize) -> Vec<Vec2> {
        let mut points = Vec::with_capacity(arc_segments + 3);
        points.push(mass_a);
        points.push(self.point_a);
        let sweep = self.arc_sweep();
        for i in 1..arc_segments {
            let angle = self.arc_start + sweep * (i as f32 / arc_segments as f32);
            points.push(self.center + self.radius * Vec2::new(angle.cos(), angle.sin()));
        }
        points.push(self.point_b);
        points.push(mass_b);
        points
    }
}

/// Points where the rope meets a pulley wheel of `radius` around `anchor`
pub fn tangent_points(anchor: Vec2, radius: f32, mass_a: Vec2, mass_b: Vec2) -> RopePath {
    let angle_a = (anchor.y - mass_a.y).atan2(anchor.x - mass_a.x);
    let angle_b = (anchor.y - mass_b.y).atan2(mass_b.x - anchor.x);

    let point_a = anchor - radius * Vec2::new(angle_a.cos(), angle_a.sin());
    let point_b = anchor + radius * Vec2::new(angle_b.cos(), -angle_b.sin());

    // atan2(0, 0) is 0, so a zero radius still yields finite angles
    let arc_start = angle_of(point_a - anchor);
    let arc_end = angle_of(point_b - anchor);

    RopePath {
        center: anchor,
        radius,
        point_a,
        point_b,
        arc_start,
        arc_end,
    }
}

fn angle_of(v: Vec2) -> f32 {
    v.y.atan2(v.x)
}
