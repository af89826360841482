//! Movement domain: Avian spatial queries behind the controller's probe.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{CollisionProbe, GameLayer, RayHit};

/// Raycasts against one layer at a time, never hitting the controlled body.
pub(crate) struct AvianProbe<'a, 'w, 's> {
    spatial_query: &'a SpatialQuery<'w, 's>,
    body: Entity,
}

impl<'a, 'w, 's> AvianProbe<'a, 'w, 's> {
    pub(crate) fn new(spatial_query: &'a SpatialQuery<'w, 's>, body: Entity) -> Self {
        Self {
            spatial_query,
            body,
        }
    }
}

impl CollisionProbe for AvianProbe<'_, '_, '_> {
    fn raycast(
        &self,
        origin: Vec2,
        direction: Dir2,
        max_distance: f32,
        layer: GameLayer,
    ) -> Option<RayHit> {
        // Filter to only hit the requested layer (ground or wall)
        let filter = SpatialQueryFilter::from_mask(layer).with_excluded_entities([self.body]);

        self.spatial_query
            .cast_ray(origin, direction, max_distance, true, &filter)
            .map(|hit| RayHit {
                point: origin + direction * hit.distance,
                normal: hit.normal,
            })
    }
}
