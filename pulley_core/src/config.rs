use glam::Vec2;
use serde::Deserialize;

use crate::error::{ConfigError, Result};
use crate::params::Params;

/// Rope constraint settings.
///
/// Construct through [`RopeConfig::new`] or deserialize and call
/// [`RopeConfig::validate`] once at setup; the corrector itself never re-checks.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RopeConfig {
    pub target_length: f32,
    pub tolerance: f32,
    pub damping_factor: f32,
    pub split_factor: f32,
}

impl Default for RopeConfig {
    fn default() -> Self {
        Self {
            target_length: Params::ROPE_LENGTH,
            tolerance: Params::ROPE_TOLERANCE,
            damping_factor: Params::ROPE_DAMPING,
            split_factor: Params::ROPE_SPLIT,
        }
    }
}

impl RopeConfig {
    /// Rope of the given length with default tolerance, damping and split
    pub fn new(target_length: f32) -> Result<Self> {
        let config = Self {
            target_length,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_tolerance(self, tolerance: f32) -> Result<Self> {
        let config = Self { tolerance, ..self };
        config.validate()?;
        Ok(config)
    }

    pub fn with_damping(self, damping_factor: f32) -> Result<Self> {
        let config = Self {
            damping_factor,
            ..self
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_split(self, split_factor: f32) -> Result<Self> {
        let config = Self {
            split_factor,
            ..self
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject out-of-range values instead of clamping them. NaN fails every check.
    pub fn validate(&self) -> Result<()> {
        if self.target_length.is_nan() || self.target_length <= 0.0 {
            return Err(ConfigError::TargetLength(self.target_length));
        }
        if self.tolerance.is_nan() || self.tolerance < 0.0 {
            return Err(ConfigError::Tolerance(self.tolerance));
        }
        if !(0.0..=1.0).contains(&self.damping_factor) {
            return Err(ConfigError::DampingFactor(self.damping_factor));
        }
        if !(0.0..=1.0).contains(&self.split_factor) {
            return Err(ConfigError::SplitFactor(self.split_factor));
        }
        Ok(())
    }
}

/// Scene configuration: pulley placement, bodies, world and rope
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PulleyConfig {
    pub anchor: Vec2,
    pub pulley_radius: f32,
    pub gravity: Vec2,
    pub ground_y: f32,
    pub box_size: f32,
    pub start_a: Vec2,
    pub start_b: Vec2,
    pub mass_a: u32,
    pub mass_b: u32,
    pub nudge_strength: f32,
    #[serde(flatten)]
    pub rope: RopeConfig,
}

impl Default for PulleyConfig {
    fn default() -> Self {
        Self {
            anchor: Vec2::new(Params::ANCHOR_X, Params::ANCHOR_Y),
            pulley_radius: Params::PULLEY_RADIUS,
            gravity: Vec2::new(0.0, Params::GRAVITY_Y),
            ground_y: Params::GROUND_Y,
            box_size: Params::BOX_SIZE,
            start_a: Vec2::new(Params::START_A_X, Params::START_A_Y),
            start_b: Vec2::new(Params::START_B_X, Params::START_B_Y),
            mass_a: Params::MASS_DEFAULT_KG,
            mass_b: Params::MASS_DEFAULT_KG,
            nudge_strength: Params::NUDGE_STRENGTH,
            rope: RopeConfig::default(),
        }
    }
}

impl PulleyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        self.rope.validate()?;
        if self.pulley_radius.is_nan() || self.pulley_radius < 0.0 {
            return Err(ConfigError::PulleyRadius(self.pulley_radius));
        }
        if self.box_size.is_nan() || self.box_size <= 0.0 {
            return Err(ConfigError::BoxSize(self.box_size));
        }
        check_mass(self.mass_a)?;
        check_mass(self.mass_b)?;
        Ok(())
    }

    /// Half-extents of each body's box
    pub fn half_extents(&self) -> Vec2 {
        Vec2::splat(self.box_size / 2.0)
    }
}

/// Accept only slider-range masses
pub fn check_mass(kg: u32) -> Result<()> {
    if (Params::MASS_MIN_KG..=Params::MASS_MAX_KG).contains(&kg) {
        Ok(())
    } else {
        Err(ConfigError::MassOutOfRange {
            kg,
            min: Params::MASS_MIN_KG,
            max: Params::MASS_MAX_KG,
        })
    }
}
