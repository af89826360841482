//! Movement domain: wall grab, slide, stick and wall-jump.

use bevy::prelude::*;

use crate::movement::{
    CharacterBody, JumpController, MovementTuning, TickConditions, WallContact,
    WallJumpSuppression,
};

/// Which wall behaviour ran on a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallBehavior {
    Grab,
    Slide,
    Stick,
}

#[derive(Debug, Clone, Default)]
pub struct WallInteractionController {
    suppression: WallJumpSuppression,
}

impl WallInteractionController {
    pub fn suppression(&self) -> &WallJumpSuppression {
        &self.suppression
    }

    pub fn is_wall_jumping(&self) -> bool {
        self.suppression.is_wall_jumping
    }

    /// Pushes off the touched wall: up and away, with run force suppressed
    /// until the window runs out.
    pub fn wall_jump(
        &mut self,
        body: &mut impl CharacterBody,
        jump: &mut JumpController,
        wall: &WallContact,
        tuning: &MovementTuning,
    ) {
        let direction = Vec2::new(wall.direction.away_sign(), 1.0).normalize();

        self.suppression = WallJumpSuppression {
            is_wall_jumping: true,
            wall_jump_elapsed: 0.0,
        };

        body.set_velocity(Vec2::ZERO);
        jump.launch(body, direction, tuning.wall_jump_force, false, true, tuning);
        debug!("Wall jump off {:?} wall", wall.direction);
    }

    /// Advances the suppression timer, clearing it once `window` has elapsed.
    pub fn advance_suppression(&mut self, dt: f32, window: f32) {
        if !self.suppression.is_wall_jumping {
            return;
        }
        self.suppression.wall_jump_elapsed += dt;
        if self.suppression.wall_jump_elapsed >= window {
            self.suppression = WallJumpSuppression::default();
            debug!("Wall jump suppression ended");
        }
    }

    /// Runs at most one of grab, slide or stick, in that priority.
    pub fn apply(
        &self,
        body: &mut impl CharacterBody,
        conditions: &TickConditions,
        wall: &WallContact,
        tuning: &MovementTuning,
    ) -> Option<WallBehavior> {
        let velocity = body.velocity();

        if conditions.wall_grabbing {
            body.set_gravity_scale(0.0);
            body.set_velocity(Vec2::new(velocity.x, 0.0));
            Some(WallBehavior::Grab)
        } else if conditions.wall_sliding {
            body.set_velocity(Vec2::new(velocity.x, -tuning.wall_slide_speed()));
            Some(WallBehavior::Slide)
        } else if conditions.wall_sticking {
            let stick = wall.direction.toward_sign() * tuning.wall_stick_speed;
            body.set_velocity(Vec2::new(stick, velocity.y));
            Some(WallBehavior::Stick)
        } else {
            None
        }
    }
}
