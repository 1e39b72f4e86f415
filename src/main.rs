use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowPlugin};
use bevy_panorbit_camera::PanOrbitCameraPlugin;

#[cfg(feature = "dev")]
use bevy::dev_tools::fps_overlay::FpsOverlayPlugin;

mod animation;
mod bodies;
mod config;
mod scene;
mod selection;
mod ui;
mod viewport;

use animation::AnimationPlugin;
use bodies::{BodiesPlugin, hex_color};
use config::{load_viewer_config, log_config_source};
use scene::ScenePlugin;
use selection::SelectionPlugin;
use ui::UiPlugin;
use viewport::ViewportPlugin;

/// Quiets the render backend below `warn`.
const LOG_FILTER: &str = "wgpu=warn,naga=warn";

fn main() {
    let (config, config_source) = load_viewer_config();

    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: config.window_title.clone(),
                    // Frame loop follows the display refresh rate.
                    present_mode: PresentMode::AutoVsync,
                    ..default()
                }),
                ..default()
            })
            .set(LogPlugin {
                filter: LOG_FILTER.to_string(),
                ..default()
            }),
    );

    #[cfg(feature = "dev")]
    app.add_plugins(FpsOverlayPlugin::default());

    app.insert_resource(ClearColor(hex_color(config.background_color)))
        .insert_resource(config)
        .insert_resource(config_source)
        .add_systems(Startup, log_config_source);

    app.add_plugins(PanOrbitCameraPlugin);

    // Add our custom plugins
    app.add_plugins(BodiesPlugin);
    app.add_plugins(ViewportPlugin);
    app.add_plugins(ScenePlugin);
    app.add_plugins(AnimationPlugin);
    app.add_plugins(SelectionPlugin);
    app.add_plugins(UiPlugin);

    app.run();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_quiets_render_backend_to_warn() {
        let directives: Vec<&str> = LOG_FILTER.split(',').collect();
        assert!(directives.contains(&"wgpu=warn"));
        assert!(directives.contains(&"naga=warn"));
    }
}
