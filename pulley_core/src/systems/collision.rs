use crate::{Events, MassPoint, Scene};
use hecs::World;

/// Rest bodies on the ground slab instead of letting them sink through it
pub fn resolve_ground(world: &mut World, scene: &Scene, events: &mut Events) {
    for (_entity, body) in world.query_mut::<&mut MassPoint>() {
        if let Some(depth) = scene.ground.top_penetration(body.pos, body.half_extents) {
            body.pos.y -= depth;
            // Inelastic landing: keep sliding, drop the downward part
            if body.vel.y > 0.0 {
                body.vel.y = 0.0;
            }
            events.ground_contacts += 1;
        }
    }
}
