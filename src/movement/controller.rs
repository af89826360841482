//! Movement domain: the per-character controller that sequences every
//! movement step on the variable and fixed ticks.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::corner::correct_corner;
use crate::movement::integrator::integrate;
use crate::movement::probes::{sense_ground, sense_walls};
use crate::movement::{
    CharacterBody, CollisionProbe, Facing, GroundContact, InputFrame, InputSource, JumpBudget,
    JumpController, JumpPhase, MovementTuning, SlopeAnalyzer, SlopeState, TickConditions,
    VisualEffects, WallBehavior, WallContact, WallInteractionController, WallJumpSuppression,
};

/// Movement state for one controlled body.
///
/// Driven by two entry points: [`Self::on_variable_tick`] once per rendered
/// frame and [`Self::on_fixed_tick`] once per physics step. Within a fixed
/// tick the order is load-bearing:
///
/// 1. refresh ground, wall and slope contacts and derive this tick's conditions
/// 2. integrate run force and drag, unless grabbing a wall
/// 3. reset the jump budget on ground, or drain coyote time and pick the
///    gravity multiplier in the air
/// 4. fire a jump or wall-jump if one is buffered and allowed
/// 5. correct ceiling corners
/// 6. grab, slide or stick to a wall, unless a jump is still rising
#[derive(Component, Debug, Clone)]
#[require(LinearDamping, GravityScale, Friction)]
pub struct MovementController {
    facing: Facing,
    input: InputFrame,
    ground: GroundContact,
    wall: WallContact,
    slope: SlopeAnalyzer,
    jump: JumpController,
    walls: WallInteractionController,
    conditions: TickConditions,
}

impl Default for MovementController {
    fn default() -> Self {
        Self::new(&MovementTuning::default())
    }
}

impl MovementController {
    pub fn new(tuning: &MovementTuning) -> Self {
        Self {
            facing: Facing::default(),
            input: InputFrame::default(),
            ground: GroundContact::default(),
            wall: WallContact::default(),
            slope: SlopeAnalyzer::default(),
            jump: JumpController::new(tuning),
            walls: WallInteractionController::default(),
            conditions: TickConditions::default(),
        }
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn input(&self) -> &InputFrame {
        &self.input
    }

    pub fn ground(&self) -> &GroundContact {
        &self.ground
    }

    pub fn wall(&self) -> &WallContact {
        &self.wall
    }

    pub fn slope(&self) -> &SlopeState {
        self.slope.state()
    }

    pub fn jump_budget(&self) -> &JumpBudget {
        self.jump.budget()
    }

    pub fn jump_phase(&self) -> JumpPhase {
        self.jump.phase()
    }

    pub fn wall_jump(&self) -> &WallJumpSuppression {
        self.walls.suppression()
    }

    pub fn conditions(&self) -> &TickConditions {
        &self.conditions
    }

    /// Samples input, runs the jump buffer and turns the character around.
    pub fn on_variable_tick(
        &mut self,
        dt: f32,
        input: &impl InputSource,
        effects: &mut impl VisualEffects,
        tuning: &MovementTuning,
    ) {
        self.input = InputFrame::sample(input);
        self.jump.register_input(&self.input, dt, tuning);

        if let Some(facing) = Facing::from_axis(self.input.horizontal_axis)
            && facing != self.facing
        {
            self.facing = facing;
            effects.play_dust();
        }
    }

    /// One physics step of `dt` seconds.
    pub fn on_fixed_tick(
        &mut self,
        dt: f32,
        tuning: &MovementTuning,
        probe: &impl CollisionProbe,
        body: &mut impl CharacterBody,
        effects: &mut impl VisualEffects,
    ) {
        self.refresh_contacts(probe, body, tuning);

        if !self.conditions.wall_grabbing {
            integrate(
                body,
                &self.input,
                &self.conditions,
                self.slope.state(),
                &mut self.walls,
                dt,
                tuning,
            );
        }

        if self.ground.on_ground {
            self.jump.reset_budget(tuning);
        } else {
            self.jump.tick_hang_time(dt);
            self.jump
                .apply_gravity_multiplier(body, self.input.jump_held, tuning);
        }

        if self.jump.can_jump(self.wall.on_wall) {
            if self.wall.on_wall && !self.ground.on_ground {
                self.walls
                    .wall_jump(body, &mut self.jump, &self.wall, tuning);
            } else {
                self.jump.launch(
                    body,
                    Vec2::Y,
                    tuning.jump_force,
                    self.ground.on_ground,
                    self.wall.on_wall,
                    tuning,
                );
            }
            effects.play_dust();
        }

        if self.ground.corner_correctable {
            correct_corner(probe, body, tuning);
        }

        if !self.jump.is_jumping()
            && self.walls.apply(body, &self.conditions, &self.wall, tuning)
                == Some(WallBehavior::Slide)
        {
            effects.play_dust();
        }
    }

    fn refresh_contacts(
        &mut self,
        probe: &impl CollisionProbe,
        body: &mut impl CharacterBody,
        tuning: &MovementTuning,
    ) {
        let position = body.position();
        let velocity = body.velocity();

        let was_on_ground = self.ground.on_ground;
        self.ground = sense_ground(probe, position, tuning);
        self.wall = sense_walls(probe, position, tuning);
        let slope = self.slope.analyze(probe, position, self.facing, tuning);
        body.set_friction_profile(
            self.slope
                .friction_profile(self.ground.on_ground, self.input.horizontal_axis),
        );

        if self.ground.on_ground && !was_on_ground {
            debug!(
                "Landed: on_ground={}, extra_jumps_remaining={}",
                self.ground.on_ground,
                self.jump.budget().extra_jumps_remaining
            );
        } else if !self.ground.on_ground && was_on_ground {
            debug!(
                "Left ground: on_ground={}, extra_jumps_remaining={}",
                self.ground.on_ground,
                self.jump.budget().extra_jumps_remaining
            );
        }

        self.jump.refresh_phase(self.ground.on_ground, velocity.y);
        self.conditions = derive_conditions(
            &self.ground,
            &self.wall,
            &slope,
            &self.input,
            velocity,
            self.jump.phase(),
        );
    }
}

fn derive_conditions(
    ground: &GroundContact,
    wall: &WallContact,
    slope: &SlopeState,
    input: &InputFrame,
    velocity: Vec2,
    phase: JumpPhase,
) -> TickConditions {
    let x = input.horizontal_axis;
    let grounded = ground.on_ground;
    let on_wall_in_air = wall.on_wall && !grounded && phase != JumpPhase::Jumping;

    let wall_grabbing = on_wall_in_air && input.wall_grab_held;
    let wall_sliding = on_wall_in_air && !wall_grabbing && x != 0.0 && velocity.y < 0.0;
    let wall_sticking =
        on_wall_in_air && !wall_grabbing && !wall_sliding && !wall.input_points_away(x);

    TickConditions {
        grounded,
        changing_direction: (velocity.x > 0.0 && x < 0.0) || (velocity.x < 0.0 && x > 0.0),
        walkable_slope: grounded && slope.is_on_slope && slope.can_walk_on_slope,
        wall_grabbing,
        wall_sliding,
        wall_sticking,
    }
}
