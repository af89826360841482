//! Movement domain: the seams between the controller and the world it runs in.
//!
//! The controller never touches engine state directly. Input arrives through
//! [`InputSource`], geometry through [`CollisionProbe`], the controlled body is
//! reached through [`CharacterBody`] and cosmetic signals leave through
//! [`VisualEffects`].

use bevy::prelude::*;

use crate::movement::GameLayer;

/// Raw player input for one variable tick.
pub trait InputSource {
    /// Horizontal and vertical axis, each in [-1, 1].
    fn axis(&self) -> Vec2;
    /// True only on the frame the jump button went down.
    fn jump_pressed_edge(&self) -> bool;
    fn jump_held(&self) -> bool;
    fn wall_grab_held(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub point: Vec2,
    pub normal: Vec2,
}

/// Raycasts against named collision layers. Must answer for arbitrary
/// positions, including ones the controller moved the body to mid-tick.
pub trait CollisionProbe {
    fn raycast(
        &self,
        origin: Vec2,
        direction: Dir2,
        max_distance: f32,
        layer: GameLayer,
    ) -> Option<RayHit>;
}

/// Contact material applied to the controlled body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrictionProfile {
    #[default]
    Zero,
    Full,
}

/// Capability over the one rigid body the controller owns.
pub trait CharacterBody {
    fn position(&self) -> Vec2;
    fn set_position(&mut self, position: Vec2);
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);
    fn mass(&self) -> f32;
    fn set_drag(&mut self, drag: f32);
    fn set_gravity_scale(&mut self, scale: f32);
    fn set_friction_profile(&mut self, profile: FrictionProfile);

    /// Continuous force over one step: Δv = F / m · dt.
    fn apply_force(&mut self, force: Vec2, dt: f32) {
        let delta = force * inverse_mass(self.mass()) * dt;
        self.set_velocity(self.velocity() + delta);
    }

    /// Instant change in momentum: Δv = J / m.
    fn apply_impulse(&mut self, impulse: Vec2) {
        let delta = impulse * inverse_mass(self.mass());
        self.set_velocity(self.velocity() + delta);
    }
}

/// Non-positive or non-finite mass behaves as immovable.
fn inverse_mass(mass: f32) -> f32 {
    if mass > 0.0 && mass.is_finite() {
        1.0 / mass
    } else {
        0.0
    }
}

/// Fire-and-forget cosmetic signals.
pub trait VisualEffects {
    fn play_dust(&mut self);
}

/// Casts through `probe`, treating a non-positive or non-finite length as a miss.
pub(crate) fn cast(
    probe: &impl CollisionProbe,
    origin: Vec2,
    direction: Dir2,
    max_distance: f32,
    layer: GameLayer,
) -> Option<RayHit> {
    if !(max_distance > 0.0 && max_distance.is_finite()) {
        return None;
    }
    probe.raycast(origin, direction, max_distance, layer)
}
