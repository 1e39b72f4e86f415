//! Body components for the Bevy ECS system

use bevy::prelude::*;

use crate::bodies::registry::{BodyDef, BodyId};

/// Sphere entity of a celestial body, pointing back into the registry.
#[derive(Component, Copy, Clone, Debug)]
pub struct CelestialBody {
    pub id: BodyId,
}

/// Circular orbit state. Only orbiting bodies carry it.
#[derive(Component, Copy, Clone, Debug, PartialEq)]
pub struct OrbitState {
    /// Fixed at spawn time.
    pub orbit_radius: f32,
    /// Radians, grows without bound.
    pub orbit_angle: f32,
    pub orbit_speed: f32,
}

impl OrbitState {
    /// `None` for the central star.
    pub fn from_body(body: &BodyDef) -> Option<Self> {
        body.orbit_speed.map(|orbit_speed| Self {
            orbit_radius: body.orbit_radius(),
            orbit_angle: 0.0,
            orbit_speed,
        })
    }

    /// Advance one frame and return the new (x, z) position.
    pub fn advance(&mut self) -> Vec2 {
        self.orbit_angle += self.orbit_speed;
        self.planar_position()
    }

    pub fn planar_position(&self) -> Vec2 {
        let (sin, cos) = self.orbit_angle.sin_cos();
        Vec2::new(self.orbit_radius * cos, self.orbit_radius * sin)
    }
}

/// Runtime handle from a body to its ring entity.
#[derive(Component, Copy, Clone, Debug)]
pub struct RingHandle(pub Entity);

/// Ring entity state.
#[derive(Component, Copy, Clone, Debug)]
pub struct PlanetRing {
    /// Fixed rotation around the x axis.
    pub tilt: f32,
    /// Accumulated rotation around the vertical axis.
    pub spin: f32,
    pub spin_speed: f32,
}

impl PlanetRing {
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.tilt, self.spin, 0.0)
    }
}

/// Static orbit guide line.
#[derive(Component, Copy, Clone, Debug)]
pub struct OrbitPath {
    pub body: BodyId,
}

/// Child of a body marking where its label sits.
#[derive(Component)]
pub struct LabelAnchor;

/// Screen-space label tracking a [`LabelAnchor`].
#[derive(Component, Copy, Clone, Debug)]
pub struct BodyLabel {
    pub anchor: Entity,
}
