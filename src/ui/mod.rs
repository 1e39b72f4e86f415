//! User interface module
//!
//! The info panel shown for the selected body, styled with the feathers
//! dark theme.

use bevy::prelude::*;
use bevy_feathers::FeathersPlugins;

pub mod info_panel;
pub mod theme;

pub use info_panel::{spawn_info_panel, update_info_panel};
pub use theme::solar_theme;

/// Plugin for the overlay user interface
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(solar_theme())
            .add_plugins(FeathersPlugins)
            .add_systems(Startup, spawn_info_panel)
            .add_systems(Update, update_info_panel);
    }
}
