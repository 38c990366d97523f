pub mod components;
pub mod config;
pub mod error;
pub mod geometry;
pub mod params;
pub mod resources;
pub mod rope;
pub mod scene;
pub mod systems;

pub use components::*;
pub use config::*;
pub use error::ConfigError;
pub use geometry::*;
pub use params::*;
pub use resources::*;
pub use rope::*;
pub use scene::*;

use error::Result;
use glam::Vec2;
use hecs::World;
use rand::Rng;
use systems::*;

/// Advance the pulley simulation by `time.dt`
pub fn step(
    world: &mut World,
    time: &mut Time,
    rig: &PulleyRig,
    scene: &Scene,
    config: &PulleyConfig,
    events: &mut Events,
) {
    // Clamp dt to prevent large jumps
    let clamped_dt = time.dt.min(Params::MAX_DT);

    // Fixed micro-steps for stable physics
    let mut remaining_dt = clamped_dt;
    while remaining_dt > 0.0 {
        let step_dt = remaining_dt.min(Params::FIXED_DT);
        remaining_dt -= step_dt;

        let step_time = Time {
            dt: step_dt,
            now: time.now + (clamped_dt - remaining_dt),
        };

        events.clear();

        // 1. Gravity and pending forces
        integrate_bodies(world, &step_time, config);

        // 2. Ground contact
        resolve_ground(world, scene, events);

        // 3. Rope length, always last so the next tick starts from a taut rope
        apply_rope(world, rig, &config.rope, events);
    }

    time.now += clamped_dt;
}

/// Spawn both rope bodies from a validated config
pub fn create_rig(world: &mut World, config: &PulleyConfig) -> Result<PulleyRig> {
    config.validate()?;
    let half = config.half_extents();
    let mass_a = world.spawn((MassPoint::new(config.start_a, config.mass_a as f32, half),));
    let mass_b = world.spawn((MassPoint::new(config.start_b, config.mass_b as f32, half),));
    Ok(PulleyRig {
        anchor: config.anchor,
        radius: config.pulley_radius,
        mass_a,
        mass_b,
    })
}

/// Drop both bodies at rest at random spots, A left of the anchor and B right of it
pub fn scatter_rig(world: &mut World, rig: &PulleyRig, rng: &mut SimRng) {
    let anchor = rig.anchor;
    let mut place = |entity: hecs::Entity, side: f32| {
        let offset = Vec2::new(
            side * rng.0.gen_range(50.0..250.0),
            rng.0.gen_range(150.0..350.0),
        );
        if let Ok(mut body) = world.get::<&mut MassPoint>(entity) {
            body.pos = anchor + offset;
            body.vel = Vec2::ZERO;
            body.force = Vec2::ZERO;
        }
    };
    place(rig.mass_a, -1.0);
    place(rig.mass_b, 1.0);
}

/// Positions of both bodies, if they still exist
pub fn rig_positions(world: &World, rig: &PulleyRig) -> Option<(Vec2, Vec2)> {
    let a = world.get::<&MassPoint>(rig.mass_a).ok()?.pos;
    let b = world.get::<&MassPoint>(rig.mass_b).ok()?.pos;
    Some((a, b))
}
