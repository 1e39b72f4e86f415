//! Startup construction of body meshes, rings, orbit paths and labels.

use std::f32::consts::TAU;

use bevy::asset::RenderAssetUsages;
use bevy::mesh::PrimitiveTopology;
use bevy::prelude::*;

use crate::bodies::{
    BodyDef, BodyRegistry, CelestialBody, LabelAnchor, OrbitPath, OrbitState, PlanetRing,
    RingDef, RingHandle, hex_color,
};
use crate::config::ViewerConfig;
use crate::scene::labels::spawn_label;
use crate::viewport::OverlayRoot;

/// Orbit guides are closed line strips of `ORBIT_PATH_SEGMENTS + 1` points.
pub const ORBIT_PATH_SEGMENTS: usize = 100;
const SPHERE_SECTORS: u32 = 32;
const SPHERE_STACKS: u32 = 16;
const RING_RESOLUTION: u32 = 64;

/// Points of a circle of `radius` in the y = 0 plane, first and last coincide.
pub fn orbit_path_points(radius: f32) -> Vec<Vec3> {
    (0..=ORBIT_PATH_SEGMENTS)
        .map(|i| {
            let angle = (i as f32 / ORBIT_PATH_SEGMENTS as f32) * TAU;
            Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius)
        })
        .collect()
}

pub fn orbit_path_mesh(radius: f32) -> Mesh {
    let positions: Vec<[f32; 3]> = orbit_path_points(radius)
        .into_iter()
        .map(|p| p.to_array())
        .collect();
    Mesh::new(PrimitiveTopology::LineStrip, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
}

/// Spawn every body in the registry.
pub fn spawn_solar_system(
    mut commands: Commands,
    registry: Res<BodyRegistry>,
    config: Res<ViewerConfig>,
    overlay: Query<Entity, With<OverlayRoot>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let overlay = overlay.single().ok();
    if overlay.is_none() {
        warn!("No label overlay root; labels will be spawned at the UI root");
    }

    let orbit_material = materials.add(StandardMaterial {
        base_color: hex_color(config.orbit_path_color),
        unlit: true,
        ..default()
    });

    for (id, body) in registry.iter() {
        let entity = commands
            .spawn((
                Mesh3d(meshes.add(
                    Sphere::new(body.radius)
                        .mesh()
                        .uv(SPHERE_SECTORS, SPHERE_STACKS),
                )),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: body.base_color(),
                    unlit: true,
                    ..default()
                })),
                Transform::from_translation(body.initial_position),
                CelestialBody { id },
                Name::new(body.name.clone()),
            ))
            .id();

        if let Some(orbit) = OrbitState::from_body(body) {
            commands.entity(entity).insert(orbit);
            commands.spawn((
                Mesh3d(meshes.add(orbit_path_mesh(orbit.orbit_radius))),
                MeshMaterial3d(orbit_material.clone()),
                Transform::IDENTITY,
                OrbitPath { body: id },
                Name::new(format!("{} orbit", body.name)),
            ));
        }

        if let Some(ring) = &body.ring {
            let ring_entity = spawn_ring(&mut commands, &mut meshes, &mut materials, body, ring);
            commands.entity(entity).insert(RingHandle(ring_entity));
        }

        let anchor = commands
            .spawn((
                Transform::from_xyz(0.0, body.radius + config.label_offset, 0.0),
                Visibility::default(),
                LabelAnchor,
                ChildOf(entity),
            ))
            .id();
        spawn_label(&mut commands, anchor, &body.name, config.label_font_size, overlay);

        debug!("Spawned {} ({:?})", body.name, id);
    }

    info!("Spawned {} celestial bodies", registry.len());
}

fn spawn_ring(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    body: &BodyDef,
    ring: &RingDef,
) -> Entity {
    let state = PlanetRing {
        tilt: ring.tilt,
        spin: 0.0,
        spin_speed: body.rotation_speed,
    };
    commands
        .spawn((
            Mesh3d(meshes.add(
                Annulus::new(ring.inner_radius, ring.outer_radius)
                    .mesh()
                    .resolution(RING_RESOLUTION),
            )),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: hex_color(ring.color),
                unlit: true,
                double_sided: true,
                cull_mode: None,
                ..default()
            })),
            Transform::from_translation(body.initial_position).with_rotation(state.rotation()),
            state,
            Name::new(format!("{} ring", body.name)),
        ))
        .id()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::{BodyId, BodyLabel};

    fn build_app(registry: BodyRegistry) -> App {
        let mut app = App::new();
        app.init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<StandardMaterial>>()
            .insert_resource(registry)
            .insert_resource(ViewerConfig::default())
            .add_systems(Startup, spawn_solar_system);
        app.update();
        app
    }

    #[test]
    fn test_orbit_path_is_closed_circle() {
        let points = orbit_path_points(150.0);
        assert_eq!(points.len(), 101);
        assert!((points[0] - points[100]).length() < 1e-3);
        for p in &points {
            assert!((p.length() - 150.0).abs() < 1e-3);
            assert_eq!(p.y, 0.0);
        }
    }

    #[test]
    fn test_one_mesh_and_label_per_body() {
        let mut app = build_app(BodyRegistry::default());
        let world = app.world_mut();

        let bodies = world.query::<&CelestialBody>().iter(world).count();
        let labels = world.query::<&BodyLabel>().iter(world).count();
        let anchors = world.query::<&LabelAnchor>().iter(world).count();
        assert_eq!(bodies, 9);
        assert_eq!(labels, 9);
        assert_eq!(anchors, 9);
    }

    #[test]
    fn test_orbit_paths_skip_central_star() {
        let mut app = build_app(BodyRegistry::default());
        let registry = app.world().resource::<BodyRegistry>().clone();
        let world = app.world_mut();

        let paths: Vec<BodyId> = world.query::<&OrbitPath>().iter(world).map(|p| p.body).collect();
        assert_eq!(paths.len(), 8);
        let (sun, _) = registry.find("Sun").unwrap();
        assert!(!paths.contains(&sun));
    }

    #[test]
    fn test_rings_are_linked_to_bodies() {
        let mut app = build_app(BodyRegistry::default());
        let world = app.world_mut();

        let handles: Vec<(Entity, Entity)> = world
            .query::<(Entity, &RingHandle)>()
            .iter(world)
            .map(|(e, h)| (e, h.0))
            .collect();
        assert_eq!(handles.len(), 2);
        for (body, ring) in handles {
            assert!(world.get::<PlanetRing>(ring).is_some());
            let body_pos = world.get::<Transform>(body).unwrap().translation;
            let ring_pos = world.get::<Transform>(ring).unwrap().translation;
            assert_eq!(body_pos, ring_pos);
        }
    }

    #[test]
    fn test_label_anchor_sits_above_body() {
        let mut app = build_app(BodyRegistry::default());
        let offset = ViewerConfig::default().label_offset;
        let registry = app.world().resource::<BodyRegistry>().clone();
        let world = app.world_mut();

        let anchors: Vec<(f32, Entity)> = world
            .query_filtered::<(&Transform, &ChildOf), With<LabelAnchor>>()
            .iter(world)
            .map(|(t, parent)| (t.translation.y, parent.parent()))
            .collect();
        for (y, parent) in anchors {
            let id = world.get::<CelestialBody>(parent).unwrap().id;
            let radius = registry.get(id).unwrap().radius;
            assert!((y - (radius + offset)).abs() < 1e-6);
        }
    }
}
