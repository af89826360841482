//! Movement domain: startup checks for controlled bodies.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::MovementController;

/// A controller was spawned without something it cannot run without.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerSetupError {
    /// No `RigidBody` to push around.
    MissingBody(Entity),
    /// No `Collider`, so nothing for the physics world to resolve against.
    MissingCollider(Entity),
}

impl std::fmt::Display for ControllerSetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingBody(entity) => {
                write!(f, "MovementController on {} has no RigidBody", entity)
            }
            Self::MissingCollider(entity) => {
                write!(f, "MovementController on {} has no Collider", entity)
            }
        }
    }
}

impl std::error::Error for ControllerSetupError {}

/// Fails the schedule for any newly added controller missing its body or collider.
pub(crate) fn verify_controlled_bodies(
    query: Query<(Entity, Has<RigidBody>, Has<Collider>), Added<MovementController>>,
) -> Result {
    for (entity, has_body, has_collider) in &query {
        if !has_body {
            return Err(ControllerSetupError::MissingBody(entity).into());
        }
        if !has_collider {
            return Err(ControllerSetupError::MissingCollider(entity).into());
        }
        debug!("MovementController attached to {}", entity);
    }
    Ok(())
}
