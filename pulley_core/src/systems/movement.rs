use crate::params::Params;
use crate::{MassPoint, PulleyConfig, Time};
use hecs::World;

/// Integrate gravity and accumulated forces (semi-implicit Euler)
pub fn integrate_bodies(world: &mut World, time: &Time, config: &PulleyConfig) {
    for (_entity, body) in world.query_mut::<&mut MassPoint>() {
        let accel = config.gravity + body.force * Params::FORCE_SCALE / body.mass;
        body.vel += accel * time.dt;
        body.pos += body.vel * time.dt;
        body.force = glam::Vec2::ZERO;
    }
}
