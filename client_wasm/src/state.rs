//! Tick snapshots with interpolation for rendering

use glam::Vec2;

/// Body positions after one simulation tick
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Snapshot {
    pub mass_a: Vec2,
    pub mass_b: Vec2,
    pub tick: u32,
}

/// Previous and current tick, blended for frames that fall between ticks
pub struct FrameState {
    current: Snapshot,
    previous: Snapshot,
    // Interpolation time (0.0 = previous, 1.0 = current)
    interpolation_alpha: f32,
}

impl FrameState {
    pub fn new(initial: Snapshot) -> Self {
        Self {
            current: initial,
            previous: initial,
            interpolation_alpha: 1.0,
        }
    }

    pub fn push(&mut self, snapshot: Snapshot) {
        self.previous = self.current;
        self.current = snapshot;
    }

    /// Fraction of the next tick already elapsed
    pub fn set_alpha(&mut self, alpha: f32) {
        if alpha.is_finite() {
            self.interpolation_alpha = alpha.clamp(0.0, 1.0);
        }
    }

    /// Jump straight to `snapshot`, e.g. after bodies were teleported
    pub fn reset(&mut self, snapshot: Snapshot) {
        self.previous = snapshot;
        self.current = snapshot;
        self.interpolation_alpha = 1.0;
    }

    fn interpolate(&self, prev: Vec2, curr: Vec2) -> Vec2 {
        prev.lerp(curr, self.interpolation_alpha)
    }

    pub fn mass_a(&self) -> Vec2 {
        self.interpolate(self.previous.mass_a, self.current.mass_a)
    }

    pub fn mass_b(&self) -> Vec2 {
        self.interpolate(self.previous.mass_b, self.current.mass_b)
    }

    pub fn current(&self) -> &Snapshot {
        &self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(tick: u32, a: Vec2, b: Vec2) -> Snapshot {
        Snapshot {
            mass_a: a,
            mass_b: b,
            tick,
        }
    }

    #[test]
    fn test_interpolates_between_ticks() {
        let mut frames = FrameState::new(snapshot(0, Vec2::ZERO, Vec2::new(10.0, 0.0)));
        frames.push(snapshot(1, Vec2::new(2.0, 4.0), Vec2::new(10.0, 8.0)));

        frames.set_alpha(0.5);

        assert_eq!(frames.mass_a(), Vec2::new(1.0, 2.0));
        assert_eq!(frames.mass_b(), Vec2::new(10.0, 4.0));
        assert_eq!(frames.current().tick, 1);
    }

    #[test]
    fn test_alpha_is_clamped() {
        let mut frames = FrameState::new(snapshot(0, Vec2::ZERO, Vec2::ZERO));
        frames.push(snapshot(1, Vec2::ONE, Vec2::ONE));

        frames.set_alpha(3.0);
        assert_eq!(frames.mass_a(), Vec2::ONE);
        frames.set_alpha(-1.0);
        assert_eq!(frames.mass_a(), Vec2::ZERO);
        frames.set_alpha(f32::NAN);
        assert_eq!(frames.mass_a(), Vec2::ZERO, "NaN keeps the last alpha");
    }

    #[test]
    fn test_reset_drops_history() {
        let mut frames = FrameState::new(snapshot(0, Vec2::ZERO, Vec2::ZERO));
        frames.push(snapshot(1, Vec2::ONE, Vec2::ONE));
        frames.set_alpha(0.0);

        frames.reset(snapshot(2, Vec2::splat(5.0), Vec2::splat(6.0)));

        assert_eq!(frames.mass_a(), Vec2::splat(5.0));
        assert_eq!(frames.mass_b(), Vec2::splat(6.0));
    }
}
