//! Movement domain: jump buffering, coyote time, extra jumps and the fall
//! gravity multipliers.

use bevy::prelude::*;

use crate::movement::{CharacterBody, InputFrame, JumpBudget, JumpPhase, MovementTuning};

#[derive(Debug, Clone, Default)]
pub struct JumpController {
    budget: JumpBudget,
    phase: JumpPhase,
}

impl JumpController {
    pub fn new(tuning: &MovementTuning) -> Self {
        Self {
            budget: JumpBudget {
                extra_jumps_remaining: tuning.extra_jumps,
                ..default()
            },
            phase: JumpPhase::Grounded,
        }
    }

    pub fn budget(&self) -> &JumpBudget {
        &self.budget
    }

    pub fn phase(&self) -> JumpPhase {
        self.phase
    }

    pub fn is_jumping(&self) -> bool {
        self.phase == JumpPhase::Jumping
    }

    /// Variable tick: a fresh press refills the buffer, otherwise it drains.
    pub fn register_input(&mut self, input: &InputFrame, dt: f32, tuning: &MovementTuning) {
        if input.jump_pressed_this_frame {
            self.budget.jump_buffer_counter = tuning.jump_buffer_length;
        } else {
            self.budget.jump_buffer_counter -= dt;
        }
    }

    /// Fixed tick, with fresh contacts: settles the phase before anything
    /// reads it.
    pub fn refresh_phase(&mut self, on_ground: bool, vertical_velocity: f32) {
        self.phase = match self.phase {
            _ if on_ground => JumpPhase::Grounded,
            JumpPhase::Jumping if vertical_velocity > 0.0 => JumpPhase::Jumping,
            _ => JumpPhase::Airborne,
        };
    }

    pub fn reset_budget(&mut self, tuning: &MovementTuning) {
        self.budget.extra_jumps_remaining = tuning.extra_jumps;
        self.budget.hang_time_counter = tuning.hang_time;
    }

    pub fn tick_hang_time(&mut self, dt: f32) {
        self.budget.hang_time_counter -= dt;
    }

    /// A buffered press plus coyote time, an extra jump or a wall to push off.
    pub fn can_jump(&self, on_wall: bool) -> bool {
        self.budget.jump_buffer_counter > 0.0
            && (self.budget.hang_time_counter > 0.0
                || self.budget.extra_jumps_remaining > 0
                || on_wall)
    }

    /// Fast fall while descending, low-jump gravity when ascending without
    /// holding jump, normal gravity otherwise.
    pub fn apply_gravity_multiplier(
        &self,
        body: &mut impl CharacterBody,
        jump_held: bool,
        tuning: &MovementTuning,
    ) {
        let vertical_velocity = body.velocity().y;
        let scale = if vertical_velocity < 0.0 {
            tuning.fall_multiplier
        } else if vertical_velocity > 0.0 && !jump_held {
            tuning.low_jump_fall_multiplier
        } else {
            1.0
        };
        body.set_gravity_scale(scale);
    }

    /// Shared jump primitive for ground, coyote, extra and wall jumps.
    ///
    /// An extra jump is only spent when the body is off the ground, off any
    /// wall and past its coyote window.
    pub fn launch(
        &mut self,
        body: &mut impl CharacterBody,
        direction: Vec2,
        force: f32,
        on_ground: bool,
        on_wall: bool,
        tuning: &MovementTuning,
    ) {
        let in_coyote_window = self.budget.hang_time_counter > 0.0;
        if !on_ground && !on_wall && !in_coyote_window {
            self.budget.extra_jumps_remaining = self.budget.extra_jumps_remaining.saturating_sub(1);
        }

        body.set_drag(tuning.air_linear_drag);
        let velocity = body.velocity();
        body.set_velocity(Vec2::new(velocity.x, 0.0));
        body.apply_impulse(direction.normalize_or(Vec2::Y) * force);

        self.budget.hang_time_counter = 0.0;
        self.budget.jump_buffer_counter = 0.0;
        self.phase = JumpPhase::Jumping;

        debug!(
            "Jump: on_ground={}, on_wall={}, coyote={}, extra_jumps_remaining={}",
            on_ground, on_wall, in_coyote_window, self.budget.extra_jumps_remaining
        );
    }
}
