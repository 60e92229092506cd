use crate::camera::Projection;
use crate::controller::ControllerConfig;
use explorer_common::Aabb;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors from loading or validating a [`ViewerConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Window creation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Mini 3D Explorer".into(),
            width: 1280,
            height: 720,
        }
    }
}

/// Top-level viewer configuration. Every section is optional in YAML.
///
/// ```yaml
/// window: { width: 1920, height: 1080 }
/// controller: { base_speed: 4.0 }
/// colliders:
///   - { min: [-1, 0, -1], max: [1, 1, 1] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub window: WindowConfig,
    pub controller: ControllerConfig,
    pub projection: Projection,
    /// Replaces the default scene colliders when present, in this order.
    pub colliders: Option<Vec<Aabb>>,
}

impl ViewerConfig {
    /// Read and validate a YAML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&text)?;
        tracing::info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject tuning values that would break the frame loop.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let c = &self.controller;
        positive("controller.base_speed", c.base_speed)?;
        positive("controller.sprint_multiplier", c.sprint_multiplier)?;
        positive("controller.mouse_sensitivity", c.mouse_sensitivity)?;
        positive("controller.camera_radius", c.camera_radius)?;
        if !c.eye_height.is_finite() {
            return Err(invalid("controller.eye_height", format!("{} is not finite", c.eye_height)));
        }

        let p = &self.projection;
        positive("projection.near", p.near)?;
        positive("projection.far", p.far)?;
        if !(p.fov_y_degrees > 0.0 && p.fov_y_degrees < 180.0) {
            return Err(invalid(
                "projection.fov_y_degrees",
                format!("{} is outside (0, 180)", p.fov_y_degrees),
            ));
        }
        if p.near >= p.far {
            return Err(invalid(
                "projection",
                format!("near {} must be less than far {}", p.near, p.far),
            ));
        }

        if self.window.width == 0 || self.window.height == 0 {
            return Err(invalid(
                "window",
                format!("{}x{} has zero area", self.window.width, self.window.height),
            ));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("{value} must be positive and finite")))
    }
}
