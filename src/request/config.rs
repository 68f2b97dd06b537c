//! Loading camera request overrides from TOML.
//!
//! The file never describes a finished request. Each present key becomes
//! one builder call, so requests still only come out of
//! [`CameraRequestBuilder`].
//!
//! ```toml
//! [request]
//! preview_width = 1280
//! preview_height = 720
//! camera_id = "/dev/video0"
//! front_camera = false
//! continuous_af = true
//! continuous_ae = false
//! ```

use super::CameraRequestBuilder;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional overrides, one per request field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RequestConfig {
    /// Preview width in pixels.
    pub preview_width: Option<u32>,
    /// Preview height in pixels.
    pub preview_height: Option<u32>,
    /// Camera identifier.
    pub camera_id: Option<String>,
    /// Front-facing camera flag.
    pub front_camera: Option<bool>,
    /// Continuous autofocus.
    pub continuous_af: Option<bool>,
    /// Continuous auto-exposure.
    pub continuous_ae: Option<bool>,
}

impl RequestConfig {
    /// Forwards every present override to `builder`.
    pub fn apply(&self, mut builder: CameraRequestBuilder) -> CameraRequestBuilder {
        if let Some(width) = self.preview_width {
            builder = builder.preview_width(width);
        }
        if let Some(height) = self.preview_height {
            builder = builder.preview_height(height);
        }
        if let Some(ref id) = self.camera_id {
            builder = builder.camera_id(id.clone());
        }
        if let Some(front) = self.front_camera {
            builder = builder.front_camera(front);
        }
        if let Some(af) = self.continuous_af {
            builder = builder.continuous_af_model(af);
        }
        if let Some(ae) = self.continuous_ae {
            builder = builder.continuous_auto_model(ae);
        }
        builder
    }

    /// Applies the overrides onto a fresh builder.
    pub fn to_builder(&self) -> CameraRequestBuilder {
        self.apply(CameraRequestBuilder::new())
    }
}

/// Config loading errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

/// Full configuration file format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileConfig {
    /// The `[request]` table.
    #[serde(default)]
    pub request: RequestConfig,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileReadError(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded request config");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}
