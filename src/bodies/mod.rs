//! Celestial body module
//!
//! Static body catalogue plus the components that tie spawned entities back
//! to it.

use bevy::prelude::*;

pub mod components;
pub mod registry;

pub use components::{
    BodyLabel, CelestialBody, LabelAnchor, OrbitPath, OrbitState, PlanetRing, RingHandle,
};
pub use registry::{BodyDef, BodyId, BodyRegistry, RingDef, hex_color};

/// Plugin providing the body registry
pub struct BodiesPlugin;

impl Plugin for BodiesPlugin {
    fn build(&self, app: &mut App) {
        // Keeps a registry inserted before the plugin.
        app.init_resource::<BodyRegistry>();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plugin_installs_default_registry() {
        let mut app = App::new();
        app.add_plugins(BodiesPlugin);
        assert_eq!(app.world().resource::<BodyRegistry>().len(), 9);
    }

    #[test]
    fn test_plugin_keeps_existing_registry() {
        let mut app = App::new();
        app.insert_resource(BodyRegistry::empty())
            .add_plugins(BodiesPlugin);
        assert_eq!(app.world().resource::<BodyRegistry>().len(), 0);
    }
}
