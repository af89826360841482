//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::InputSource;

/// Every tunable the controller reads. Loaded once at startup and treated as
/// read-only afterwards.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    // Running
    pub movement_acceleration: f32,
    pub max_move_speed: f32,
    pub ground_linear_drag: f32,
    pub air_linear_drag: f32,

    // Jumping
    pub jump_force: f32,
    pub fall_multiplier: f32,
    pub low_jump_fall_multiplier: f32,
    /// Jumps allowed in the air after the ground jump (1 = double jump).
    pub extra_jumps: u32,
    /// Coyote window in seconds.
    pub hang_time: f32,
    pub jump_buffer_length: f32,

    // Ground and corner probes, offsets are from the body centre
    pub ground_raycast_length: f32,
    pub ground_raycast_offset: Vec2,
    pub top_raycast_length: f32,
    pub edge_raycast_offset: Vec2,
    pub inner_raycast_offset: Vec2,

    // Wall probes
    pub wall_raycast_length: f32,
    pub wall_raycast_offset: Vec2,

    // Slopes
    /// Distance from the body centre down to the slope-check origin (the feet).
    pub feet_offset: f32,
    pub slope_check_distance: f32,
    /// Degrees.
    pub max_slope_angle: f32,

    // Walls
    pub wall_jump_force: f32,
    /// Seconds of suppressed run force after a wall-jump.
    pub wall_jump_window: f32,
    pub wall_slide_modifier: f32,
    pub wall_stick_speed: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            movement_acceleration: 70.0,
            max_move_speed: 12.0,
            ground_linear_drag: 7.0,
            air_linear_drag: 2.5,
            jump_force: 12.0,
            fall_multiplier: 8.0,
            low_jump_fall_multiplier: 5.0,
            extra_jumps: 1,
            hang_time: 0.1,
            jump_buffer_length: 0.1,
            ground_raycast_length: 1.05,
            ground_raycast_offset: Vec2::new(0.4, 0.0),
            top_raycast_length: 1.05,
            edge_raycast_offset: Vec2::new(0.45, 0.0),
            inner_raycast_offset: Vec2::new(0.25, 0.0),
            wall_raycast_length: 0.6,
            wall_raycast_offset: Vec2::ZERO,
            feet_offset: 1.0,
            slope_check_distance: 0.5,
            max_slope_angle: 45.0,
            wall_jump_force: 16.0,
            wall_jump_window: 0.5,
            wall_slide_modifier: 0.5,
            wall_stick_speed: 1.0,
        }
    }
}

impl MovementTuning {
    /// Apex height of a single jump from rest for a unit-mass body under the
    /// given gravity magnitude, ignoring drag. Uses h = v² / (2g).
    pub fn single_jump_height(&self, gravity: f32) -> f32 {
        if gravity <= 0.0 {
            return f32::INFINITY;
        }
        self.jump_force * self.jump_force / (2.0 * gravity)
    }

    /// Constant descent speed while sliding down a wall.
    pub fn wall_slide_speed(&self) -> f32 {
        self.max_move_speed * self.wall_slide_modifier
    }
}

/// Latest keyboard sample, written once per frame.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: Vec2,
    pub jump_just_pressed: bool,
    pub jump_held: bool,
    pub wall_grab_held: bool,
}

impl InputSource for MovementInput {
    fn axis(&self) -> Vec2 {
        self.axis
    }

    fn jump_pressed_edge(&self) -> bool {
        self.jump_just_pressed
    }

    fn jump_held(&self) -> bool {
        self.jump_held
    }

    fn wall_grab_held(&self) -> bool {
        self.wall_grab_held
    }
}
