//! Movement domain: run force, speed clamp and linear drag.

use bevy::prelude::*;

use crate::movement::{
    CharacterBody, InputFrame, MovementTuning, SlopeState, TickConditions,
    WallInteractionController,
};

/// Horizontal input below this magnitude counts as letting go of the stick.
const DRAG_INPUT_THRESHOLD: f32 = 0.4;

/// One fixed step of horizontal control. The caller skips it while the body
/// is grabbing a wall.
pub(crate) fn integrate(
    body: &mut impl CharacterBody,
    input: &InputFrame,
    conditions: &TickConditions,
    slope: &SlopeState,
    walls: &mut WallInteractionController,
    dt: f32,
    tuning: &MovementTuning,
) {
    if walls.is_wall_jumping() {
        walls.advance_suppression(dt, tuning.wall_jump_window);
    } else {
        let x = input.horizontal_axis;
        let force = if conditions.walkable_slope {
            // Push along the surface, not into it.
            slope.slope_normal_perp * -x * tuning.movement_acceleration
        } else {
            Vec2::new(x * tuning.movement_acceleration, 0.0)
        };
        body.apply_force(force, dt);
        clamp_horizontal_speed(body, tuning.max_move_speed);
    }

    apply_linear_drag(body, input, conditions, tuning);
}

/// Rescales only the horizontal component, keeping its sign.
pub(crate) fn clamp_horizontal_speed(body: &mut impl CharacterBody, max_speed: f32) {
    let velocity = body.velocity();
    if velocity.x.abs() > max_speed {
        body.set_velocity(Vec2::new(velocity.x.signum() * max_speed, velocity.y));
    }
}

fn apply_linear_drag(
    body: &mut impl CharacterBody,
    input: &InputFrame,
    conditions: &TickConditions,
    tuning: &MovementTuning,
) {
    let drag = if !conditions.grounded {
        tuning.air_linear_drag
    } else if input.horizontal_axis.abs() < DRAG_INPUT_THRESHOLD || conditions.changing_direction
    {
        tuning.ground_linear_drag
    } else {
        0.0
    };
    body.set_drag(drag);
}
