//! Movement domain: per-tick records for input, contacts and timers.

use bevy::prelude::*;

use crate::movement::InputSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn direction(self) -> Dir2 {
        match self {
            Facing::Right => Dir2::X,
            Facing::Left => Dir2::NEG_X,
        }
    }

    /// Facing implied by a horizontal axis value, `None` when the axis is idle.
    pub fn from_axis(x: f32) -> Option<Self> {
        if x > 0.0 {
            Some(Facing::Right)
        } else if x < 0.0 {
            Some(Facing::Left)
        } else {
            None
        }
    }
}

/// One sample of player input, taken on the variable tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputFrame {
    pub horizontal_axis: f32,
    pub vertical_axis: f32,
    pub jump_pressed_this_frame: bool,
    pub jump_held: bool,
    pub wall_grab_held: bool,
}

impl InputFrame {
    pub fn sample(source: &impl InputSource) -> Self {
        let axis = source.axis();
        Self {
            horizontal_axis: sanitize_axis(axis.x),
            vertical_axis: sanitize_axis(axis.y),
            jump_pressed_this_frame: source.jump_pressed_edge(),
            jump_held: source.jump_held(),
            wall_grab_held: source.wall_grab_held(),
        }
    }
}

fn sanitize_axis(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

/// A frame is its own input source, which keeps scripted input trivial.
impl InputSource for InputFrame {
    fn axis(&self) -> Vec2 {
        Vec2::new(self.horizontal_axis, self.vertical_axis)
    }

    fn jump_pressed_edge(&self) -> bool {
        self.jump_pressed_this_frame
    }

    fn jump_held(&self) -> bool {
        self.jump_held
    }

    fn wall_grab_held(&self) -> bool {
        self.wall_grab_held
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GroundContact {
    pub on_ground: bool,
    /// A ceiling ledge is caught by an edge probe but missed by the inner one.
    pub corner_correctable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WallSide {
    #[default]
    Left,
    Right,
}

impl WallSide {
    /// +1 towards a right wall, -1 towards a left wall.
    pub fn toward_sign(self) -> f32 {
        match self {
            WallSide::Left => -1.0,
            WallSide::Right => 1.0,
        }
    }

    pub fn away_sign(self) -> f32 {
        -self.toward_sign()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WallContact {
    pub on_wall: bool,
    pub on_right_wall: bool,
    pub direction: WallSide,
}

impl WallContact {
    pub fn touching(side: WallSide) -> Self {
        Self {
            on_wall: true,
            on_right_wall: side == WallSide::Right,
            direction: side,
        }
    }

    /// True when `horizontal_axis` pushes away from the touched wall.
    pub fn input_points_away(&self, horizontal_axis: f32) -> bool {
        self.on_wall && horizontal_axis * self.direction.toward_sign() < 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlopeState {
    pub is_on_slope: bool,
    /// Unit tangent of the surface below the feet, perpendicular to its normal.
    pub slope_normal_perp: Vec2,
    /// Degrees between the surface below and world up.
    pub slope_down_angle: f32,
    /// Degrees between the surface ahead/behind and world up.
    pub slope_side_angle: f32,
    pub can_walk_on_slope: bool,
}

impl Default for SlopeState {
    fn default() -> Self {
        Self {
            is_on_slope: false,
            slope_normal_perp: Vec2::NEG_X,
            slope_down_angle: 0.0,
            slope_side_angle: 0.0,
            can_walk_on_slope: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct JumpBudget {
    pub extra_jumps_remaining: u32,
    /// Coyote time left. At or below zero means expired.
    pub hang_time_counter: f32,
    /// Buffered press time left. At or below zero means no buffered jump.
    pub jump_buffer_counter: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JumpPhase {
    #[default]
    Grounded,
    Airborne,
    /// From the tick a jump fires until vertical velocity stops being positive.
    Jumping,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WallJumpSuppression {
    pub is_wall_jumping: bool,
    pub wall_jump_elapsed: f32,
}

/// Conditions derived once per fixed tick, right after contacts are refreshed.
/// Every later step reads these instead of re-deriving them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickConditions {
    pub grounded: bool,
    /// Velocity and horizontal input point in opposite directions.
    pub changing_direction: bool,
    pub walkable_slope: bool,
    pub wall_grabbing: bool,
    pub wall_sliding: bool,
    pub wall_sticking: bool,
}
