//! Error types for pulley_core.

use thiserror::Error;

/// Rejected configuration, reported at setup or on a mass change. Never raised per tick.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("rope target length must be positive, got {0}")]
    TargetLength(f32),

    #[error("rope tolerance must be non-negative, got {0}")]
    Tolerance(f32),

    #[error("damping factor must lie in [0, 1], got {0}")]
    DampingFactor(f32),

    #[error("split factor must lie in [0, 1], got {0}")]
    SplitFactor(f32),

    #[error("pulley radius must be non-negative, got {0}")]
    PulleyRadius(f32),

    #[error("box size must be positive, got {0}")]
    BoxSize(f32),

    #[error("mass must be between {min} and {max} kg, got {kg}")]
    MassOutOfRange { kg: u32, min: u32, max: u32 },

    #[error("entity {0:?} is not a pulley body")]
    MissingBody(hecs::Entity),

    #[error("invalid options: {0}")]
    Options(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
