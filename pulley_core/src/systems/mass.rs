use crate::config::check_mass;
use crate::error::{ConfigError, Result};
use crate::{MassPoint, PulleyConfig, PulleyRig, RopeEnd};
use glam::Vec2;
use hecs::World;

/// Change one body's mass from the UI slider.
///
/// Out-of-range values are rejected and the old mass kept. On success both
/// bodies get a one-off vertical nudge so the rope re-tensions right away
/// instead of waiting for gravity.
pub fn set_mass(
    world: &mut World,
    rig: &PulleyRig,
    end: RopeEnd,
    kg: u32,
    config: &PulleyConfig,
) -> Result<()> {
    check_mass(kg)?;

    let entity = rig.entity(end);
    world
        .get::<&mut MassPoint>(entity)
        .map_err(|_| ConfigError::MissingBody(entity))?
        .mass = kg as f32;

    nudge(world, rig, config.nudge_strength)
}

/// Push the heavier side down and the lighter side up, proportional to the difference
pub fn nudge(world: &mut World, rig: &PulleyRig, strength: f32) -> Result<()> {
    let diff = mass_of(world, rig.mass_a)? - mass_of(world, rig.mass_b)?;
    let force = Vec2::new(0.0, strength * diff);

    if let Ok(mut body) = world.get::<&mut MassPoint>(rig.mass_a) {
        body.apply_force(force);
    }
    if let Ok(mut body) = world.get::<&mut MassPoint>(rig.mass_b) {
        body.apply_force(-force);
    }
    Ok(())
}

fn mass_of(world: &World, entity: hecs::Entity) -> Result<f32> {
    world
        .get::<&MassPoint>(entity)
        .map(|body| body.mass)
        .map_err(|_| ConfigError::MissingBody(entity))
}
