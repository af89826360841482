//! Movement domain: debug-only test room exercising every movement feature.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground, Wall};

#[derive(Clone, Copy)]
enum Surface {
    Ground,
    Wall,
}

fn spawn_block(
    commands: &mut Commands,
    surface: Surface,
    color: Color,
    size: Vec2,
    center: Vec2,
    angle_degrees: f32,
) {
    let transform = Transform::from_xyz(center.x, center.y, 0.0)
        .with_rotation(Quat::from_rotation_z(angle_degrees.to_radians()));
    let sprite = Sprite {
        color,
        custom_size: Some(size),
        ..default()
    };
    let physics = (RigidBody::Static, Collider::rectangle(size.x, size.y));

    match surface {
        Surface::Ground => {
            commands.spawn((
                Ground,
                sprite,
                transform,
                physics,
                CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
            ));
        }
        Surface::Wall => {
            commands.spawn((
                Wall,
                sprite,
                transform,
                physics,
                CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]),
            ));
        }
    }
}

pub fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);
    let slope_color = Color::srgb(0.45, 0.45, 0.3);

    // Floor, top surface at y = 0
    spawn_block(
        &mut commands,
        Surface::Ground,
        ground_color,
        Vec2::new(60.0, 1.0),
        Vec2::new(0.0, -0.5),
        0.0,
    );

    // Outer walls
    for x in [-30.5, 30.5] {
        spawn_block(
            &mut commands,
            Surface::Wall,
            wall_color,
            Vec2::new(1.0, 24.0),
            Vec2::new(x, 12.0),
            0.0,
        );
    }

    // Walkable 30 degree ramp on the right
    spawn_block(
        &mut commands,
        Surface::Ground,
        slope_color,
        Vec2::new(10.0, 1.0),
        Vec2::new(12.0, 1.5),
        30.0,
    );

    // Too-steep 60 degree ramp on the left
    spawn_block(
        &mut commands,
        Surface::Ground,
        slope_color,
        Vec2::new(8.0, 1.0),
        Vec2::new(-14.0, 2.5),
        -60.0,
    );

    // Low ceiling ledge for corner correction practice
    spawn_block(
        &mut commands,
        Surface::Ground,
        platform_color,
        Vec2::new(4.0, 0.5),
        Vec2::new(-3.0, 4.75),
        0.0,
    );

    // Floating platform
    spawn_block(
        &mut commands,
        Surface::Ground,
        platform_color,
        Vec2::new(5.0, 0.5),
        Vec2::new(4.0, 7.0),
        0.0,
    );

    // Pillar for wall jumping practice
    spawn_block(
        &mut commands,
        Surface::Wall,
        wall_color,
        Vec2::new(1.0, 10.0),
        Vec2::new(-22.0, 5.0),
        0.0,
    );
}
