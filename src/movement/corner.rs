//! Movement domain: positional nudge past ceiling ledges the head barely clips.

use bevy::prelude::*;

use crate::movement::ports::cast;
use crate::movement::{CharacterBody, CollisionProbe, GameLayer, MovementTuning};

/// Casts sideways from each inner probe at ledge height, left side first. On
/// the first hit the body is shifted away from the ledge by the gap between
/// the hit and the matching edge probe. Velocity is left alone.
///
/// Returns the horizontal shift applied, if any.
pub(crate) fn correct_corner(
    probe: &impl CollisionProbe,
    body: &mut impl CharacterBody,
    tuning: &MovementTuning,
) -> Option<f32> {
    let position = body.position();
    let lift = Vec2::Y * tuning.top_raycast_length;

    for (side, direction) in [(-1.0, Dir2::NEG_X), (1.0, Dir2::X)] {
        let origin = position + tuning.inner_raycast_offset * side + lift;
        let Some(hit) = cast(
            probe,
            origin,
            direction,
            tuning.top_raycast_length,
            GameLayer::Ground,
        ) else {
            continue;
        };

        let reference = position + tuning.edge_raycast_offset * side + lift;
        let shift = -side * (hit.point.x - reference.x).abs();
        body.set_position(position + Vec2::new(shift, 0.0));
        trace!("Corner correction: shifted {shift} from ledge at {}", hit.point);
        return Some(shift);
    }

    None
}
