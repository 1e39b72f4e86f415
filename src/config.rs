//! Viewer configuration
//!
//! Settings live in `viewer.json` under the platform config directory:
//! - macOS: ~/Library/Application Support/bevysolar/
//! - Linux: ~/.config/bevysolar/
//! - Windows: %APPDATA%\bevysolar\config\
//!
//! Every field is optional in the file; missing fields keep their defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bevy::prelude::*;
use directories::ProjectDirs;
use serde::Deserialize;

const CONFIG_FILE_NAME: &str = "viewer.json";

/// Viewer configuration resource
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub window_title: String,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub camera_position: [f32; 3],
    /// Damping factors for the pan-orbit controller, 0 = none, <1 required.
    pub orbit_smoothness: f32,
    pub pan_smoothness: f32,
    pub zoom_smoothness: f32,
    /// Gap between a body's surface and its label anchor.
    pub label_offset: f32,
    pub label_font_size: f32,
    pub orbit_path_color: u32,
    pub background_color: u32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window_title: "Bevy Solar System".to_string(),
            fov_degrees: 75.0,
            near: 0.1,
            far: 20_000.0,
            camera_position: [0.0, 200.0, 1000.0],
            orbit_smoothness: 0.8,
            pan_smoothness: 0.6,
            zoom_smoothness: 0.8,
            label_offset: 20.0,
            label_font_size: 14.0,
            orbit_path_color: 0xffffff,
            background_color: 0x000000,
        }
    }
}

/// Where the active configuration came from.
#[derive(Resource, Debug, Clone, PartialEq)]
pub enum ConfigSource {
    Defaults,
    File(PathBuf),
    Rejected { path: PathBuf, reason: String },
    /// No config directory could be resolved for this platform.
    Unresolved { reason: String },
}

impl ViewerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("invalid viewer config json")?;
        config.validate()?;
        Ok(config)
    }

    pub fn camera_position(&self) -> Vec3 {
        Vec3::from_array(self.camera_position)
    }

    fn validate(&self) -> Result<()> {
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            anyhow::bail!("fov_degrees out of range: {}", self.fov_degrees);
        }
        if !(self.near > 0.0 && self.near < self.far) {
            anyhow::bail!("near/far planes invalid: {}..{}", self.near, self.far);
        }
        for (name, value) in [
            ("orbit_smoothness", self.orbit_smoothness),
            ("pan_smoothness", self.pan_smoothness),
            ("zoom_smoothness", self.zoom_smoothness),
        ] {
            if !(0.0..1.0).contains(&value) {
                anyhow::bail!("{name} must be in [0, 1), got {value}");
            }
        }
        Ok(())
    }
}

/// Resolve `viewer.json` in the platform config directory.
pub fn config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("", "", "bevysolar")
        .ok_or_else(|| anyhow::anyhow!("Failed to resolve config directory"))?;
    Ok(proj_dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Read a config file. `Ok(None)` when the file does not exist.
pub fn read_config_file(path: &Path) -> Result<Option<ViewerConfig>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    ViewerConfig::from_json_str(&contents).map(Some)
}

/// Load the viewer config, falling back to defaults on any failure.
///
/// Runs before the log plugin exists, so the outcome is returned for
/// [`log_config_source`] to report.
pub fn load_viewer_config() -> (ViewerConfig, ConfigSource) {
    resolve_viewer_config(config_path())
}

fn resolve_viewer_config(path: Result<PathBuf>) -> (ViewerConfig, ConfigSource) {
    let path = match path {
        Ok(path) => path,
        Err(e) => {
            return (
                ViewerConfig::default(),
                ConfigSource::Unresolved {
                    reason: format!("{e:#}"),
                },
            );
        }
    };
    match read_config_file(&path) {
        Ok(Some(config)) => (config, ConfigSource::File(path)),
        Ok(None) => (ViewerConfig::default(), ConfigSource::Defaults),
        Err(e) => (
            ViewerConfig::default(),
            ConfigSource::Rejected {
                path,
                reason: format!("{e:#}"),
            },
        ),
    }
}

pub fn log_config_source(source: Res<ConfigSource>) {
    match source.as_ref() {
        ConfigSource::Defaults => info!("Using default viewer config"),
        ConfigSource::File(path) => info!("Loaded viewer config from {}", path.display()),
        ConfigSource::Rejected { path, reason } => {
            warn!("Ignoring viewer config {}: {}", path.display(), reason)
        }
        ConfigSource::Unresolved { reason } => {
            warn!("Using default viewer config, no config directory: {}", reason)
        }
    }
}
