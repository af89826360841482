//! Loading and validation of movement tuning from RON data files.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use crate::movement::MovementTuning;

/// Where the demo and the plugin look for tuning overrides.
pub const TUNING_PATH: &str = "assets/data/movement.ron";

/// Error type for tuning file failures.
#[derive(Debug)]
pub struct TuningLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for TuningLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for TuningLoadError {}

/// A tunable whose value the controller cannot work with.
#[derive(Debug, PartialEq)]
pub struct TuningError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for TuningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tuning field '{}' {}", self.field, self.message)
    }
}

impl std::error::Error for TuningError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse tuning from RON text. Fields left out keep their defaults.
pub fn parse_tuning(contents: &str, file: &str) -> Result<MovementTuning, TuningLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| TuningLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load tuning from a RON file.
pub fn load_tuning(path: &Path) -> Result<MovementTuning, TuningLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| TuningLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_tuning(&contents, &file_name)
}

/// Helper macro for checking a tunable is finite and not negative
macro_rules! check_non_negative {
    ($errors:expr, $tuning:expr, $($field:ident),+ $(,)?) => {
        $(
            if !($tuning.$field >= 0.0 && $tuning.$field.is_finite()) {
                $errors.push(TuningError {
                    field: stringify!($field),
                    message: format!("must be finite and >= 0, got {}", $tuning.$field),
                });
            }
        )+
    };
}

/// Helper macro for checking every component of an offset is finite
macro_rules! check_finite_offset {
    ($errors:expr, $tuning:expr, $($field:ident),+ $(,)?) => {
        $(
            if !$tuning.$field.is_finite() {
                $errors.push(TuningError {
                    field: stringify!($field),
                    message: format!("must be finite, got {}", $tuning.$field),
                });
            }
        )+
    };
}

impl MovementTuning {
    /// Returns every problem found, empty if the tuning is usable.
    pub fn validate(&self) -> Vec<TuningError> {
        let mut errors = Vec::new();

        check_non_negative!(
            errors,
            self,
            movement_acceleration,
            ground_linear_drag,
            air_linear_drag,
            jump_force,
            fall_multiplier,
            low_jump_fall_multiplier,
            hang_time,
            jump_buffer_length,
            ground_raycast_length,
            top_raycast_length,
            wall_raycast_length,
            feet_offset,
            slope_check_distance,
            wall_jump_force,
            wall_jump_window,
            wall_slide_modifier,
            wall_stick_speed,
        );

        check_finite_offset!(
            errors,
            self,
            ground_raycast_offset,
            edge_raycast_offset,
            inner_raycast_offset,
            wall_raycast_offset,
        );

        if !(self.max_move_speed > 0.0 && self.max_move_speed.is_finite()) {
            errors.push(TuningError {
                field: "max_move_speed",
                message: format!("must be finite and > 0, got {}", self.max_move_speed),
            });
        }

        if !(0.0..=90.0).contains(&self.max_slope_angle) {
            errors.push(TuningError {
                field: "max_slope_angle",
                message: format!("must be within [0, 90] degrees, got {}", self.max_slope_angle),
            });
        }

        errors
    }
}

/// Startup system: replace the default tuning with the data file when it
/// loads and validates, otherwise keep the defaults.
pub(crate) fn load_movement_tuning(mut tuning: ResMut<MovementTuning>) {
    let loaded = match load_tuning(Path::new(TUNING_PATH)) {
        Ok(loaded) => loaded,
        Err(e) => {
            warn!("{}; using default movement tuning", e);
            return;
        }
    };

    let errors = loaded.validate();
    if !errors.is_empty() {
        for error in &errors {
            warn!("{}", error);
        }
        warn!(
            "{} invalid tuning field(s) in {}; using default movement tuning",
            errors.len(),
            TUNING_PATH
        );
        return;
    }

    info!(
        "Loaded movement tuning from {}: max_speed={}, jump_force={}, extra_jumps={}",
        TUNING_PATH, loaded.max_move_speed, loaded.jump_force, loaded.extra_jumps
    );
    *tuning = loaded;
}
