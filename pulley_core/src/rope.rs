//! Constant-length rope over a fixed pulley.
//!
//! Two free bodies hang from the ends of an inextensible rope that passes over
//! a frictionless pulley at `anchor`. After the engine integrates a tick, [`correct`]
//! moves both bodies radially so that `|anchor→A| + |anchor→B|` equals the rope
//! length again, then damps their velocities. The correction is a direct position
//! edit rather than a force, which gives the rope a rigid, non-elastic feel.

use glam::Vec2;

use crate::{MassPoint, RopeConfig};

/// Outcome of one [`correct`] call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RopeCorrection {
    /// Length error was within tolerance; nothing was touched
    WithinTolerance,
    /// Bodies were moved and damped; `error` is the length error before the move
    Corrected { error: f32 },
}

impl RopeCorrection {
    pub fn was_applied(&self) -> bool {
        matches!(self, Self::Corrected { .. })
    }
}

/// Current rope length minus target: positive when the rope is too long
pub fn rope_length_error(anchor: Vec2, a: Vec2, b: Vec2, target_length: f32) -> f32 {
    (a - anchor).length() + (b - anchor).length() - target_length
}

/// Restore the rope length for one tick.
///
/// `config` must have been validated at setup. A body sitting exactly on the
/// anchor has no direction to move along, so it is left in place for this tick
/// while the other body still takes its own share.
pub fn correct(
    anchor: Vec2,
    mass_a: &mut MassPoint,
    mass_b: &mut MassPoint,
    config: &RopeConfig,
) -> RopeCorrection {
    let error = rope_length_error(anchor, mass_a.pos, mass_b.pos, config.target_length);
    if error.abs() <= config.tolerance {
        return RopeCorrection::WithinTolerance;
    }

    let share_a = error * config.split_factor;
    let share_b = error * (1.0 - config.split_factor);

    // Too long pulls toward the anchor, too short pushes away
    if let Some(dir) = (mass_a.pos - anchor).try_normalize() {
        mass_a.pos -= dir * share_a;
    }
    if let Some(dir) = (mass_b.pos - anchor).try_normalize() {
        mass_b.pos -= dir * share_b;
    }

    mass_a.vel *= config.damping_factor;
    mass_b.vel *= config.damping_factor;

    RopeCorrection::Corrected { error }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANCHOR: Vec2 = Vec2::new(400.0, 150.0);

    fn rope_sum(a: &MassPoint, b: &MassPoint) -> f32 {
        a.distance_to(ANCHOR) + b.distance_to(ANCHOR)
    }

    #[test]
    fn test_long_rope_pulls_both_masses_in() {
        let config = RopeConfig::default();
        let mut a = MassPoint::at(Vec2::new(200.0, 400.0), Vec2::ZERO);
        let mut b = MassPoint::at(Vec2::new(600.0, 400.0), Vec2::ZERO);
        let before_a = a.distance_to(ANCHOR);
        let before_b = b.distance_to(ANCHOR);
        let error = before_a + before_b - config.target_length;
        assert!(error > 0.0, "Scene starts with slack to remove");

        let result = correct(ANCHOR, &mut a, &mut b, &config);

        assert_eq!(result, RopeCorrection::Corrected { error });
        assert!((before_a - a.distance_to(ANCHOR) - error / 2.0).abs() < 1e-3);
        assert!((before_b - b.distance_to(ANCHOR) - error / 2.0).abs() < 1e-3);
        assert!(
            (rope_sum(&a, &b) - config.target_length).abs() <= config.tolerance,
            "Rope length restored, got {}",
            rope_sum(&a, &b)
        );
    }

    #[test]
    fn test_masses_move_along_their_own_direction() {
        let config = RopeConfig::default();
        let start_a = Vec2::new(200.0, 400.0);
        let start_b = Vec2::new(600.0, 400.0);
        let mut a = MassPoint::at(start_a, Vec2::ZERO);
        let mut b = MassPoint::at(start_b, Vec2::ZERO);

        correct(ANCHOR, &mut a, &mut b, &config);

        let moved_a = (a.pos - start_a).normalize();
        let toward_anchor_a = (ANCHOR - start_a).normalize();
        assert!(moved_a.dot(toward_anchor_a) > 0.9999, "A moves straight at the anchor");
        let moved_b = (b.pos - start_b).normalize();
        let toward_anchor_b = (ANCHOR - start_b).normalize();
        assert!(moved_b.dot(toward_anchor_b) > 0.9999, "B moves straight at the anchor");
    }

    #[test]
    fn test_short_rope_pushes_masses_out() {
        let config = RopeConfig::default();
        let mut a = MassPoint::at(Vec2::new(350.0, 250.0), Vec2::ZERO);
        let mut b = MassPoint::at(Vec2::new(450.0, 250.0), Vec2::ZERO);
        let before_a = a.distance_to(ANCHOR);

        let result = correct(ANCHOR, &mut a, &mut b, &config);

        assert!(matches!(result, RopeCorrection::Corrected { error } if error < 0.0));
        assert!(a.distance_to(ANCHOR) > before_a, "A pushed away from the anchor");
        assert!((rope_sum(&a, &b) - config.target_length).abs() <= config.tolerance);
    }

    #[test]
    fn test_within_tolerance_is_a_no_op() {
        let config = RopeConfig::new(500.0).unwrap();
        // 3-4-5 triangles: each side exactly 250
        let mut a = MassPoint::at(Vec2::new(250.0, 350.0), Vec2::new(-3.0, 7.0));
        let mut b = MassPoint::at(Vec2::new(550.0, 350.0), Vec2::new(1.5, 2.25));
        let (a0, b0) = (a, b);

        let result = correct(ANCHOR, &mut a, &mut b, &config);

        assert_eq!(result, RopeCorrection::WithinTolerance);
        assert_eq!(a.pos.x.to_bits(), a0.pos.x.to_bits());
        assert_eq!(a.pos.y.to_bits(), a0.pos.y.to_bits());
        assert_eq!(a.vel.x.to_bits(), a0.vel.x.to_bits());
        assert_eq!(a.vel.y.to_bits(), a0.vel.y.to_bits());
        assert_eq!(b, b0, "B untouched");
    }

    #[test]
    fn test_velocities_damped_only_when_corrected() {
        let config = RopeConfig::default();
        let mut a = MassPoint::at(Vec2::new(200.0, 400.0), Vec2::new(10.0, 20.0));
        let mut b = MassPoint::at(Vec2::new(600.0, 400.0), Vec2::new(-4.0, 8.0));

        correct(ANCHOR, &mut a, &mut b, &config);

        assert_eq!(a.vel, Vec2::new(10.0, 20.0) * 0.98);
        assert_eq!(b.vel, Vec2::new(-4.0, 8.0) * 0.98);
    }

    #[test]
    fn test_split_factor_assigns_whole_correction_to_one_side() {
        let config = RopeConfig::default().with_split(1.0).unwrap();
        let start_b = Vec2::new(600.0, 400.0);
        let mut a = MassPoint::at(Vec2::new(200.0, 400.0), Vec2::ZERO);
        let mut b = MassPoint::at(start_b, Vec2::ZERO);

        correct(ANCHOR, &mut a, &mut b, &config);

        assert_eq!(b.pos, start_b, "B takes no share with split = 1");
        assert!((rope_sum(&a, &b) - config.target_length).abs() <= config.tolerance);
    }

    #[test]
    fn test_mass_on_anchor_is_skipped_without_nan() {
        let config = RopeConfig::default();
        let mut a = MassPoint::at(ANCHOR, Vec2::new(1.0, 1.0));
        let mut b = MassPoint::at(Vec2::new(400.0, 850.0), Vec2::ZERO);

        let result = correct(ANCHOR, &mut a, &mut b, &config);

        assert!(result.was_applied());
        assert_eq!(a.pos, ANCHOR, "Coincident mass stays put this tick");
        assert!(a.pos.is_finite() && a.vel.is_finite());
        assert!(b.pos.is_finite() && b.vel.is_finite());
        // B still takes its half of the 100px excess
        assert!((b.pos.y - 800.0).abs() < 1e-3, "B at {}", b.pos.y);
    }

    #[test]
    fn test_both_masses_on_anchor() {
        let config = RopeConfig::default();
        let mut a = MassPoint::at(ANCHOR, Vec2::ZERO);
        let mut b = MassPoint::at(ANCHOR, Vec2::ZERO);

        correct(ANCHOR, &mut a, &mut b, &config);

        assert_eq!(a.pos, ANCHOR);
        assert_eq!(b.pos, ANCHOR);
    }

    #[test]
    fn test_rope_length_error_sign() {
        let a = Vec2::new(400.0, 450.0);
        let b = Vec2::new(400.0, 350.0);
        assert_eq!(rope_length_error(ANCHOR, a, b, 500.0), 0.0);
        assert_eq!(rope_length_error(ANCHOR, a, b, 400.0), 100.0);
        assert_eq!(rope_length_error(ANCHOR, a, b, 600.0), -100.0);
    }
}
