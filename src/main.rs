use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use platformer_movement::movement::{self, DustBurst};

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Platformer Movement".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins(movement::MovementPlugin)
    .add_systems(Startup, setup_camera)
    .add_systems(PostStartup, movement::spawn_player)
    .add_systems(Update, log_dust_bursts);

    #[cfg(feature = "dev-tools")]
    app.add_systems(Startup, movement::spawn_test_room);

    app.run();
}

fn setup_camera(mut commands: Commands) {
    // World units are metres, roughly 30 pixels each.
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: 1.0 / 30.0,
            ..OrthographicProjection::default_2d()
        }),
        Transform::from_xyz(0.0, 8.0, 0.0),
    ));
}

fn log_dust_bursts(mut bursts: MessageReader<DustBurst>) {
    for burst in bursts.read() {
        debug!("Dust burst for {} at {}", burst.entity, burst.position);
    }
}
