//! Scene construction module
//!
//! Builds the renderable scene from the body registry once at startup and
//! keeps the label overlay in sync with the 3D scene every frame.

use bevy::prelude::*;
use bevy::transform::TransformSystems;

pub mod builder;
pub mod labels;

pub use builder::spawn_solar_system;
pub use labels::update_label_positions;

/// Plugin for scene construction and label tracking
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_solar_system).add_systems(
            PostUpdate,
            update_label_positions.after(TransformSystems::Propagate),
        );
    }
}
