use crate::rope::{correct, RopeCorrection};
use crate::{Events, MassPoint, PulleyRig, RopeConfig};
use hecs::World;

/// Run the rope corrector on the rig's two bodies.
///
/// Returns `None` when either handle no longer points at a body, which only
/// happens if the host despawned it; the tick carries on without the rope.
pub fn apply_rope(
    world: &mut World,
    rig: &PulleyRig,
    config: &RopeConfig,
    events: &mut Events,
) -> Option<RopeCorrection> {
    // Copy both bodies out so the corrector gets two plain &mut
    let mut mass_a = *world.get::<&MassPoint>(rig.mass_a).ok()?;
    let mut mass_b = *world.get::<&MassPoint>(rig.mass_b).ok()?;

    let result = correct(rig.anchor, &mut mass_a, &mut mass_b, config);

    if let RopeCorrection::Corrected { error } = result {
        events.rope_corrected = true;
        events.rope_error = events.rope_error.max(error.abs());
        *world.get::<&mut MassPoint>(rig.mass_a).ok()? = mass_a;
        *world.get::<&mut MassPoint>(rig.mass_b).ok()? = mass_b;
    }

    Some(result)
}
