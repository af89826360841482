//! Platformer character movement: a fixed-step controller that turns player
//! input and raycast probes into forces and velocity adjustments on a single
//! rigid body, plus the Bevy/Avian glue that drives it.

pub mod movement;
