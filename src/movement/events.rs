//! Movement domain: messages emitted by the controller.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Fired whenever the controller asks for a dust puff: on every jump, every
/// wall-slide tick and every change of facing.
#[derive(Debug, Clone, Copy)]
pub struct DustBurst {
    pub entity: Entity,
    pub position: Vec2,
}

impl Message for DustBurst {}
