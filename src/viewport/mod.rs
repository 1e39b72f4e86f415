//! Viewport module
//!
//! Owns the main camera, the label overlay root, and keeps both in sync with
//! the window size.

use bevy::prelude::*;

pub mod camera;
pub mod resize;

pub use camera::{MainCamera, spawn_main_camera};
pub use resize::{OverlayRoot, ViewportSize, handle_window_resize, spawn_overlay_root};

/// Plugin for camera and window-size management
pub struct ViewportPlugin;

impl Plugin for ViewportPlugin {
    fn build(&self, app: &mut App) {
        // PreStartup so the overlay root exists when the scene spawns labels.
        app.init_resource::<ViewportSize>()
            .add_systems(PreStartup, (spawn_main_camera, spawn_overlay_root))
            .add_systems(Update, handle_window_resize);
    }
}
