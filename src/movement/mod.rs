//! Movement domain: the platformer controller, its seams and the plugin
//! wiring that runs it on Bevy's variable and fixed schedules.

mod bootstrap;
mod components;
mod config;
mod controller;
mod corner;
#[cfg(feature = "dev-tools")]
mod dev;
mod events;
mod integrator;
mod jump;
mod ports;
mod probes;
mod resources;
mod slope;
mod systems;
mod types;
mod wall;


pub use bootstrap::spawn_player;
pub use components::{GameLayer, Ground, Player, Wall};
pub use config::{TUNING_PATH, TuningError, TuningLoadError, load_tuning, parse_tuning};
pub use controller::MovementController;
#[cfg(feature = "dev-tools")]
pub use dev::spawn_test_room;
pub use events::DustBurst;
pub use jump::JumpController;
pub use ports::{
    CharacterBody, CollisionProbe, FrictionProfile, InputSource, RayHit, VisualEffects,
};
pub use resources::{MovementInput, MovementTuning};
pub use slope::{SlopeAnalyzer, angle_from_up};
pub use systems::ControllerSetupError;
pub use types::{
    Facing, GroundContact, InputFrame, JumpBudget, JumpPhase, SlopeState, TickConditions,
    WallContact, WallJumpSuppression, WallSide,
};
pub use wall::{WallBehavior, WallInteractionController};

use bevy::prelude::*;

use crate::movement::config::load_movement_tuning;
use crate::movement::systems::{
    read_input, run_fixed_tick, run_variable_tick, verify_controlled_bodies,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_message::<DustBurst>()
            .add_systems(Startup, load_movement_tuning)
            .add_systems(Update, (read_input, run_variable_tick).chain())
            .add_systems(
                FixedUpdate,
                (verify_controlled_bodies, run_fixed_tick).chain(),
            );
    }
}
