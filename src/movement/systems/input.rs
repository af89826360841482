//! Movement domain: keyboard bindings feeding the controller's input source.

use bevy::prelude::*;

use crate::movement::MovementInput;

const LEFT: [KeyCode; 2] = [KeyCode::KeyA, KeyCode::ArrowLeft];
const RIGHT: [KeyCode; 2] = [KeyCode::KeyD, KeyCode::ArrowRight];
const DOWN: [KeyCode; 2] = [KeyCode::KeyS, KeyCode::ArrowDown];
const UP: [KeyCode; 2] = [KeyCode::KeyW, KeyCode::ArrowUp];
const JUMP: [KeyCode; 2] = [KeyCode::Space, KeyCode::KeyK];
const WALL_GRAB: [KeyCode; 2] = [KeyCode::ShiftLeft, KeyCode::KeyL];

/// -1, 0 or 1 depending on which of the opposing bindings are held.
fn axis(keyboard: &ButtonInput<KeyCode>, negative: [KeyCode; 2], positive: [KeyCode; 2]) -> f32 {
    let mut value = 0.0;
    if keyboard.any_pressed(negative) {
        value -= 1.0;
    }
    if keyboard.any_pressed(positive) {
        value += 1.0;
    }
    value
}

/// Samples the keyboard once per frame, ahead of the variable tick.
pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    *input = MovementInput {
        axis: Vec2::new(axis(&keyboard, LEFT, RIGHT), axis(&keyboard, DOWN, UP)),
        jump_just_pressed: keyboard.any_just_pressed(JUMP),
        jump_held: keyboard.any_pressed(JUMP),
        wall_grab_held: keyboard.any_pressed(WALL_GRAB),
    };
}
