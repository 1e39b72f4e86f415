//! Window resize handling for the 3D view and the label overlay.

use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

use crate::viewport::camera::MainCamera;

/// Full-window UI root that body labels are parented to.
#[derive(Component)]
pub struct OverlayRoot;

/// Last known logical size of the primary window.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl ViewportSize {
    pub fn aspect_ratio(&self) -> Option<f32> {
        (self.width > 0.0 && self.height > 0.0).then(|| self.width / self.height)
    }
}

pub fn spawn_overlay_root(mut commands: Commands) {
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(0.0),
            top: Val::Px(0.0),
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        },
        OverlayRoot,
        Name::new("Label Overlay"),
    ));
}

pub fn resize_projection(size: ViewportSize, projection: &mut Projection) {
    if let (Some(aspect), Projection::Perspective(perspective)) = (size.aspect_ratio(), projection)
    {
        perspective.aspect_ratio = aspect;
    }
}

pub fn resize_overlay(size: ViewportSize, overlay: &mut Node) {
    overlay.width = Val::Px(size.width);
    overlay.height = Val::Px(size.height);
}

pub fn handle_window_resize(
    mut resized: MessageReader<WindowResized>,
    primary: Query<Entity, With<PrimaryWindow>>,
    mut viewport: ResMut<ViewportSize>,
    mut cameras: Query<&mut Projection, With<MainCamera>>,
    mut overlays: Query<&mut Node, With<OverlayRoot>>,
) {
    let Some(event) = resized
        .read()
        .filter(|event| primary.contains(event.window))
        .last()
    else {
        return;
    };

    let size = ViewportSize {
        width: event.width,
        height: event.height,
    };
    if size.aspect_ratio().is_none() {
        // Minimized.
        return;
    }

    *viewport = size;
    for mut projection in cameras.iter_mut() {
        resize_projection(size, &mut projection);
    }
    for mut overlay in overlays.iter_mut() {
        resize_overlay(size, &mut overlay);
    }
    debug!("Viewport resized to {}x{}", size.width, size.height);
}
