//! Movement domain: variable and fixed tick systems driving each controller.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::systems::collisions::AvianProbe;
use crate::movement::{
    CharacterBody, DustBurst, FrictionProfile, MovementController, MovementInput, MovementTuning,
    VisualEffects,
};

/// Collects dust requests during a tick so they can be sent as messages after.
#[derive(Debug, Default)]
struct DustRequests(u32);

impl VisualEffects for DustRequests {
    fn play_dust(&mut self) {
        self.0 += 1;
    }
}

impl DustRequests {
    fn flush(self, entity: Entity, position: Vec2, writer: &mut MessageWriter<DustBurst>) {
        for _ in 0..self.0 {
            writer.write(DustBurst { entity, position });
        }
    }
}

/// The controlled rigid body as seen through Avian's components.
struct AvianBody<'a> {
    transform: Mut<'a, Transform>,
    velocity: Mut<'a, LinearVelocity>,
    damping: Mut<'a, LinearDamping>,
    gravity_scale: Mut<'a, GravityScale>,
    friction: Mut<'a, Friction>,
    mass: f32,
}

impl CharacterBody for AvianBody<'_> {
    fn position(&self) -> Vec2 {
        self.transform.translation.truncate()
    }

    fn set_position(&mut self, position: Vec2) {
        self.transform.translation.x = position.x;
        self.transform.translation.y = position.y;
    }

    fn velocity(&self) -> Vec2 {
        self.velocity.0
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity.0 = velocity;
    }

    fn mass(&self) -> f32 {
        self.mass
    }

    fn set_drag(&mut self, drag: f32) {
        self.damping.0 = drag;
    }

    fn set_gravity_scale(&mut self, scale: f32) {
        self.gravity_scale.0 = scale;
    }

    fn set_friction_profile(&mut self, profile: FrictionProfile) {
        let friction = match profile {
            FrictionProfile::Zero => Friction::new(0.0).with_combine_rule(CoefficientCombine::Min),
            FrictionProfile::Full => Friction::new(1.0).with_combine_rule(CoefficientCombine::Max),
        };
        // Avoid tripping change detection every step.
        if self.friction.dynamic_coefficient != friction.dynamic_coefficient {
            *self.friction = friction;
        }
    }
}

pub(crate) fn run_variable_tick(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut dust: MessageWriter<DustBurst>,
    mut query: Query<(Entity, &Transform, &mut MovementController)>,
) {
    let dt = time.delta_secs();

    for (entity, transform, mut controller) in &mut query {
        let mut effects = DustRequests::default();
        controller.on_variable_tick(dt, &*input, &mut effects, &tuning);
        effects.flush(entity, transform.translation.truncate(), &mut dust);
    }
}

pub(crate) fn run_fixed_tick(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    spatial_query: SpatialQuery,
    mut dust: MessageWriter<DustBurst>,
    mut query: Query<(
        Entity,
        &mut MovementController,
        &mut Transform,
        &mut LinearVelocity,
        &mut LinearDamping,
        &mut GravityScale,
        &mut Friction,
        &ComputedMass,
    )>,
) {
    // Inside FixedUpdate this is the fixed timestep.
    let dt = time.delta_secs();

    for (entity, mut controller, transform, velocity, damping, gravity_scale, friction, mass) in
        &mut query
    {
        let probe = AvianProbe::new(&spatial_query, entity);
        let mut body = AvianBody {
            transform,
            velocity,
            damping,
            gravity_scale,
            friction,
            mass: mass.value(),
        };
        let mut effects = DustRequests::default();

        controller.on_fixed_tick(dt, &tuning, &probe, &mut body, &mut effects);

        effects.flush(entity, body.position(), &mut dust);
    }
}
