//! Main camera with damped pan/orbit/zoom control.

use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;

use crate::bodies::hex_color;
use crate::config::ViewerConfig;

/// Marker for the camera the scene is viewed and picked through.
#[derive(Component)]
pub struct MainCamera;

/// Pan-orbit state reproducing `config.camera_position` around the origin.
///
/// The smoothness factors give the controller its inertia: each input moves
/// the target pose and the camera eases toward it over several frames.
pub fn pan_orbit_camera(config: &ViewerConfig) -> PanOrbitCamera {
    let position = config.camera_position();
    let radius = position.length();
    let (yaw, pitch) = if radius > 0.0 {
        let direction = position / radius;
        (direction.x.atan2(direction.z), direction.y.asin())
    } else {
        (0.0, 0.0)
    };

    PanOrbitCamera {
        focus: Vec3::ZERO,
        radius: Some(radius),
        yaw: Some(yaw),
        pitch: Some(pitch),
        orbit_smoothness: config.orbit_smoothness,
        pan_smoothness: config.pan_smoothness,
        zoom_smoothness: config.zoom_smoothness,
        force_update: true,
        ..default()
    }
}

pub fn perspective(config: &ViewerConfig) -> PerspectiveProjection {
    PerspectiveProjection {
        fov: config.fov_degrees.to_radians(),
        near: config.near,
        far: config.far,
        ..default()
    }
}

pub fn spawn_main_camera(mut commands: Commands, config: Res<ViewerConfig>) {
    let position = config.camera_position();
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(perspective(&config)),
        Camera {
            order: 0,
            clear_color: ClearColorConfig::Custom(hex_color(config.background_color)),
            ..default()
        },
        pan_orbit_camera(&config),
        MainCamera,
        Transform::from_translation(position).looking_at(Vec3::ZERO, Vec3::Y),
        Name::new("Main Camera"),
    ));
    debug!(
        "Camera at {:?}, fov {} deg, clip {}..{}",
        position, config.fov_degrees, config.near, config.far
    );
}
