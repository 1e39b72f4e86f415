//! Click-to-select for celestial bodies.

use bevy::picking::prelude::{MeshRayCast, MeshRayCastSettings, RayCastVisibility};
use bevy::prelude::*;

use crate::bodies::{BodyId, BodyRegistry, CelestialBody};
use crate::selection::pointer::PointerState;
use crate::selection::raycast::pointer_ray;
use crate::viewport::MainCamera;

/// Body whose details are shown in the info panel.
///
/// A miss leaves the previous selection in place.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct SelectedBody(pub Option<BodyId>);

/// Map a hit body back to the registry. `None` if the id is unknown.
pub fn resolve_selection(registry: &BodyRegistry, id: BodyId) -> Option<BodyId> {
    registry.get(id).map(|_| id)
}

/// Pick the body under the pointer on left click.
///
/// Casts against the body sphere meshes only; rings and orbit paths are
/// filtered out.
pub fn pick_on_click(
    buttons: Res<ButtonInput<MouseButton>>,
    pointer: Res<PointerState>,
    registry: Res<BodyRegistry>,
    camera_query: Query<(&GlobalTransform, &Projection), With<MainCamera>>,
    bodies: Query<&CelestialBody>,
    mut ray_cast: MeshRayCast,
    mut selected: ResMut<SelectedBody>,
) {
    if !buttons.just_released(MouseButton::Left) {
        return;
    }
    let Ok((camera_transform, projection)) = camera_query.single() else {
        return;
    };
    let Some(ray) = pointer_ray(camera_transform, projection, pointer.ndc) else {
        warn!("pick_on_click: camera projection not invertible");
        return;
    };

    let filter = |entity: Entity| bodies.contains(entity);
    // Bodies are never hidden.
    let settings = MeshRayCastSettings::default()
        .with_filter(&filter)
        .with_visibility(RayCastVisibility::Any);
    let Some((entity, hit)) = ray_cast.cast_ray(ray, &settings).first() else {
        return;
    };
    let Ok(body) = bodies.get(*entity) else {
        return;
    };

    let Some(id) = resolve_selection(&registry, body.id) else {
        warn!("Picked body {:?} is not in the registry", body.id);
        return;
    };
    if let Some(def) = registry.get(id) {
        info!("Selected {} at distance {:.1}", def.name, hit.distance);
    }
    selected.0 = Some(id);
}
