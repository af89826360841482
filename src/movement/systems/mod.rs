//! Movement domain: systems binding the controller to Bevy and Avian.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod setup;
pub(crate) mod ticks;

pub(crate) use input::read_input;
pub(crate) use setup::verify_controlled_bodies;
pub(crate) use ticks::{run_fixed_tick, run_variable_tick};

pub use setup::ControllerSetupError;
