//! Movement domain: slope detection beneath and beside the feet.

use bevy::prelude::*;

use crate::movement::ports::cast;
use crate::movement::{
    CollisionProbe, Facing, FrictionProfile, GameLayer, MovementTuning, SlopeState,
};

#[derive(Debug, Clone, Default)]
pub struct SlopeAnalyzer {
    state: SlopeState,
    last_down_angle: f32,
}

impl SlopeAnalyzer {
    pub fn state(&self) -> &SlopeState {
        &self.state
    }

    /// Refreshes the slope state for a body centred at `position`.
    pub fn analyze(
        &mut self,
        probe: &impl CollisionProbe,
        position: Vec2,
        facing: Facing,
        tuning: &MovementTuning,
    ) -> SlopeState {
        let feet = position - Vec2::Y * tuning.feet_offset;
        self.check_horizontal(probe, feet, facing, tuning);
        self.check_vertical(probe, feet, tuning);

        self.state.can_walk_on_slope = self.state.slope_down_angle <= tuning.max_slope_angle
            && self.state.slope_side_angle <= tuning.max_slope_angle;
        self.state
    }

    fn check_horizontal(
        &mut self,
        probe: &impl CollisionProbe,
        feet: Vec2,
        facing: Facing,
        tuning: &MovementTuning,
    ) {
        let forward = facing.direction();
        let hit = cast(
            probe,
            feet,
            forward,
            tuning.slope_check_distance,
            GameLayer::Ground,
        )
        .or_else(|| {
            cast(
                probe,
                feet,
                -forward,
                tuning.slope_check_distance,
                GameLayer::Ground,
            )
        });

        match hit {
            Some(hit) => {
                self.state.is_on_slope = true;
                self.state.slope_side_angle = angle_from_up(hit.normal);
            }
            None => {
                self.state.is_on_slope = false;
                self.state.slope_side_angle = 0.0;
            }
        }
    }

    fn check_vertical(&mut self, probe: &impl CollisionProbe, feet: Vec2, tuning: &MovementTuning) {
        // A miss keeps the last surface; the ground rays decide whether we stand on it.
        let Some(hit) = cast(
            probe,
            feet,
            Dir2::NEG_Y,
            tuning.slope_check_distance,
            GameLayer::Ground,
        ) else {
            return;
        };

        let normal = hit.normal.normalize_or(Vec2::Y);
        self.state.slope_normal_perp = normal.perp();
        self.state.slope_down_angle = angle_from_up(normal);

        if self.state.slope_down_angle != self.last_down_angle {
            self.state.is_on_slope = true;
        }
        self.last_down_angle = self.state.slope_down_angle;
    }

    /// Full friction only while standing idle on a walkable slope, so the body
    /// does not creep downhill. Everywhere else the body glides.
    pub fn friction_profile(&self, grounded: bool, horizontal_axis: f32) -> FrictionProfile {
        if grounded
            && self.state.is_on_slope
            && self.state.can_walk_on_slope
            && horizontal_axis == 0.0
        {
            FrictionProfile::Full
        } else {
            FrictionProfile::Zero
        }
    }
}

/// Unsigned angle in degrees between `normal` and world up.
pub fn angle_from_up(normal: Vec2) -> f32 {
    normal
        .normalize_or_zero()
        .dot(Vec2::Y)
        .clamp(-1.0, 1.0)
        .acos()
        .to_degrees()
}
