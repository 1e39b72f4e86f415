//! Per-frame orbital motion and ring spin.

use bevy::prelude::*;

use crate::bodies::{CelestialBody, OrbitState, PlanetRing, RingHandle};

/// Systems that move bodies and rings.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnimationSystems;

/// Plugin for body animation
pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (advance_orbits, sync_rings)
                .chain()
                .in_set(AnimationSystems),
        );
    }
}

/// Step every orbiting body one frame along its circle. Height is untouched.
pub fn advance_orbits(mut bodies: Query<(&mut OrbitState, &mut Transform), With<CelestialBody>>) {
    for (mut orbit, mut transform) in bodies.iter_mut() {
        let planar = orbit.advance();
        transform.translation.x = planar.x;
        transform.translation.z = planar.y;
    }
}

/// Keep rings on their bodies and spin them about the vertical axis.
pub fn sync_rings(
    bodies: Query<(&Transform, &RingHandle), Without<PlanetRing>>,
    mut rings: Query<(&mut Transform, &mut PlanetRing)>,
) {
    for (body_transform, handle) in bodies.iter() {
        let Ok((mut ring_transform, mut ring)) = rings.get_mut(handle.0) else {
            continue;
        };
        ring_transform.translation = body_transform.translation;
        ring.spin += ring.spin_speed;
        ring_transform.rotation = ring.rotation();
    }
}
