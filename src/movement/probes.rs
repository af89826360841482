//! Movement domain: ground, ceiling-corner and wall sensing from raycasts.

use bevy::prelude::*;

use crate::movement::ports::cast;
use crate::movement::{
    CollisionProbe, GameLayer, GroundContact, MovementTuning, WallContact, WallSide,
};

/// Two downward rays either side of centre, plus the four upward ceiling rays
/// used to spot a ledge that only the outer edge of the head would clip.
pub(crate) fn sense_ground(
    probe: &impl CollisionProbe,
    position: Vec2,
    tuning: &MovementTuning,
) -> GroundContact {
    let down = |origin: Vec2| {
        cast(
            probe,
            origin,
            Dir2::NEG_Y,
            tuning.ground_raycast_length,
            GameLayer::Ground,
        )
        .is_some()
    };
    let up = |origin: Vec2| {
        cast(
            probe,
            origin,
            Dir2::Y,
            tuning.top_raycast_length,
            GameLayer::Ground,
        )
        .is_some()
    };

    let on_ground = down(position + tuning.ground_raycast_offset)
        || down(position - tuning.ground_raycast_offset);

    let right_corner = up(position + tuning.edge_raycast_offset)
        && !up(position + tuning.inner_raycast_offset);
    let left_corner = up(position - tuning.edge_raycast_offset)
        && !up(position - tuning.inner_raycast_offset);

    GroundContact {
        on_ground,
        corner_correctable: right_corner || left_corner,
    }
}

/// Two opposite horizontal rays; a right-wall hit wins when both sides touch.
pub(crate) fn sense_walls(
    probe: &impl CollisionProbe,
    position: Vec2,
    tuning: &MovementTuning,
) -> WallContact {
    let hits = |origin: Vec2, direction: Dir2| {
        cast(
            probe,
            origin,
            direction,
            tuning.wall_raycast_length,
            GameLayer::Wall,
        )
        .is_some()
    };

    if hits(position - tuning.wall_raycast_offset, Dir2::X) {
        WallContact::touching(WallSide::Right)
    } else if hits(position + tuning.wall_raycast_offset, Dir2::NEG_X) {
        WallContact::touching(WallSide::Left)
    } else {
        WallContact::default()
    }
}
