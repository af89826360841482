//! Movement domain: player bootstrap from the loaded tuning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, MovementController, MovementTuning, Player};

/// Player collider size in world units.
const PLAYER_SIZE: Vec2 = Vec2::new(1.0, 2.0);

/// Spawns the controlled player. Runs after tuning has been loaded so the
/// starting jump budget matches the data file.
pub fn spawn_player(mut commands: Commands, tuning: Res<MovementTuning>) {
    info!(
        "Spawning player: max_speed={}, jump_force={}, extra_jumps={}, hang_time={}",
        tuning.max_move_speed, tuning.jump_force, tuning.extra_jumps, tuning.hang_time
    );

    commands.spawn((
        // Identity & Movement
        (Player, MovementController::new(&tuning)),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(0.0, 2.0, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            // Unit mass, so jump_force reads as a launch speed
            ColliderDensity(1.0 / (PLAYER_SIZE.x * PLAYER_SIZE.y)),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
        ),
    ));
}
