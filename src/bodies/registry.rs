//! Static catalogue of celestial bodies and their visual/orbital parameters.

use std::collections::HashSet;
use std::f32::consts::PI;

use anyhow::{Result, bail};
use bevy::prelude::*;

/// Placeholder shown when a body has no orbit period label.
pub const NO_PERIOD_LABEL: &str = "N/A";

/// Index of a body inside the [`BodyRegistry`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BodyId(pub usize);

/// Ring configuration. The spawned ring entity is tracked separately by
/// [`crate::bodies::RingHandle`].
#[derive(Clone, Debug, PartialEq)]
pub struct RingDef {
    pub inner_radius: f32,
    pub outer_radius: f32,
    /// 0xRRGGBB
    pub color: u32,
    /// Rotation around the x axis, radians.
    pub tilt: f32,
}

/// One celestial body as configured at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct BodyDef {
    pub name: String,
    pub radius: f32,
    /// Display-only, real-world kilometers.
    pub diameter: String,
    /// 0xRRGGBB
    pub color: u32,
    pub initial_position: Vec3,
    /// Radians per frame applied to the ring spin.
    pub rotation_speed: f32,
    /// Radians per frame. `None` marks the central star.
    pub orbit_speed: Option<f32>,
    pub orbit_period_label: Option<String>,
    pub ring: Option<RingDef>,
}

impl BodyDef {
    pub fn new(name: &str, radius: f32, diameter: &str, color: u32, position: Vec3) -> Self {
        Self {
            name: name.to_string(),
            radius,
            diameter: diameter.to_string(),
            color,
            initial_position: position,
            rotation_speed: 0.0,
            orbit_speed: None,
            orbit_period_label: None,
            ring: None,
        }
    }

    pub fn with_rotation_speed(mut self, rotation_speed: f32) -> Self {
        self.rotation_speed = rotation_speed;
        self
    }

    pub fn with_orbit(mut self, orbit_speed: f32, period_label: &str) -> Self {
        self.orbit_speed = Some(orbit_speed);
        self.orbit_period_label = Some(period_label.to_string());
        self
    }

    pub fn with_ring(mut self, ring: RingDef) -> Self {
        self.ring = Some(ring);
        self
    }

    /// The central star is the only body without an orbit speed.
    pub fn is_central(&self) -> bool {
        self.orbit_speed.is_none()
    }

    /// Distance from the origin in the orbital (x/z) plane.
    pub fn orbit_radius(&self) -> f32 {
        Vec2::new(self.initial_position.x, self.initial_position.z).length()
    }

    pub fn period_label(&self) -> &str {
        self.orbit_period_label.as_deref().unwrap_or(NO_PERIOD_LABEL)
    }

    pub fn base_color(&self) -> Color {
        hex_color(self.color)
    }
}

/// Convert a 0xRRGGBB literal to an sRGB color.
pub fn hex_color(hex: u32) -> Color {
    Color::srgb_u8((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

/// All bodies in the scene, indexed by [`BodyId`].
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct BodyRegistry {
    bodies: Vec<BodyDef>,
}

/// The validated solar system; an invalid catalogue yields an empty registry.
impl Default for BodyRegistry {
    fn default() -> Self {
        Self::new(solar_system()).unwrap_or_else(|e| {
            error!("Invalid body registry, scene will be empty: {e:#}");
            Self::empty()
        })
    }
}

impl BodyRegistry {
    /// Build a registry, rejecting duplicate names, more than one central
    /// star and degenerate geometry.
    pub fn new(bodies: Vec<BodyDef>) -> Result<Self> {
        let central = bodies.iter().filter(|body| body.is_central()).count();
        if central > 1 {
            bail!("expected at most one central star, found {central}");
        }
        let mut seen = HashSet::new();
        for body in &bodies {
            if body.name.is_empty() {
                bail!("body with empty name");
            }
            if !seen.insert(body.name.as_str()) {
                bail!("duplicate body name: {}", body.name);
            }
            if !(body.radius > 0.0) {
                bail!("{}: radius must be positive, got {}", body.name, body.radius);
            }
            if let Some(ring) = &body.ring
                && !(ring.inner_radius >= 0.0 && ring.inner_radius < ring.outer_radius)
            {
                bail!(
                    "{}: invalid ring radii {}..{}",
                    body.name,
                    ring.inner_radius,
                    ring.outer_radius
                );
            }
        }
        Ok(Self { bodies })
    }

    pub fn empty() -> Self {
        Self { bodies: Vec::new() }
    }

    pub fn get(&self, id: BodyId) -> Option<&BodyDef> {
        self.bodies.get(id.0)
    }

    #[cfg(test)]
    pub fn find(&self, name: &str) -> Option<(BodyId, &BodyDef)> {
        self.iter().find(|(_, body)| body.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &BodyDef)> {
        self.bodies
            .iter()
            .enumerate()
            .map(|(idx, body)| (BodyId(idx), body))
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }
}

/// The Sun and the eight planets, not to scale.
pub fn solar_system() -> Vec<BodyDef> {
    vec![
        BodyDef::new("Sun", 100.0, "1,391,400", 0xffd700, Vec3::ZERO).with_rotation_speed(0.001),
        BodyDef::new("Mercury", 4.0, "4,900", 0x504e51, Vec3::new(150.0, 0.0, 0.0))
            .with_rotation_speed(0.02)
            .with_orbit(0.00479, "88 days"),
        BodyDef::new("Venus", 9.0, "12,100", 0xffc649, Vec3::new(208.0, 0.0, 0.0))
            .with_rotation_speed(0.01)
            .with_orbit(0.0035, "225 days"),
        BodyDef::new("Earth", 10.0, "12,800", 0x9fc164, Vec3::new(258.0, 0.0, 0.0))
            .with_rotation_speed(0.01)
            .with_orbit(0.00298, "365 days"),
        BodyDef::new("Mars", 5.0, "6,800", 0xfda600, Vec3::new(335.0, 0.0, 0.0))
            .with_rotation_speed(0.01)
            .with_orbit(0.0024, "688 days"),
        BodyDef::new("Jupiter", 50.0, "143,000", 0xd8ca9d, Vec3::new(858.0, 0.0, 0.0))
            .with_rotation_speed(0.01)
            .with_orbit(0.00131, "11.8 years"),
        BodyDef::new("Saturn", 30.0, "120,500", 0x343e47, Vec3::new(1542.0, 0.0, 0.0))
            .with_rotation_speed(0.01)
            .with_orbit(0.000969, "29.5 years")
            .with_ring(RingDef {
                inner_radius: 40.0,
                outer_radius: 50.0,
                color: 0xcccccc,
                tilt: PI / 1.7,
            }),
        BodyDef::new("Uranus", 20.0, "51,100", 0xd9ddf4, Vec3::new(3000.0, 0.0, 0.0))
            .with_rotation_speed(0.01)
            .with_orbit(0.000681, "84 years")
            .with_ring(RingDef {
                inner_radius: 40.0,
                outer_radius: 45.0,
                color: 0xcccccc,
                tilt: PI / -6.0,
            }),
        BodyDef::new("Neptune", 19.0, "49,500", 0x5b5ddf, Vec3::new(4500.0, 0.0, 0.0))
            .with_rotation_speed(0.01)
            .with_orbit(0.000543, "164.8 years"),
    ]
}
