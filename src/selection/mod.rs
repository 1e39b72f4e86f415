//! Body selection module
//!
//! Tracks the pointer and resolves clicks to celestial bodies by casting a
//! ray from the main camera against the body meshes. Rings and orbit paths
//! are never candidates.

use bevy::prelude::*;

pub mod pointer;
pub mod raycast;
pub mod systems;

pub use pointer::{PointerState, track_pointer};
pub use systems::{SelectedBody, pick_on_click};

use crate::animation::AnimationSystems;

/// Plugin for pointer tracking and click picking
pub struct SelectionPlugin;

impl Plugin for SelectionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerState>()
            .init_resource::<SelectedBody>()
            .add_systems(
                Update,
                (track_pointer, pick_on_click)
                    .chain()
                    .before(AnimationSystems),
            );
    }
}
