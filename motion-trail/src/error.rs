//! Error types for trail configuration, lifecycle, and raster output.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for trail operations.
pub type TrailResult<T> = Result<T, TrailError>;

/// Errors that can occur while configuring, ticking, or exporting a trail.
#[derive(Debug, Error)]
pub enum TrailError {
    /// The trail was destroyed and can no longer be updated.
    #[error("Trail has been destroyed")]
    Destroyed,

    /// Failed to read a configuration file.
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration file is not valid INI.
    #[error("Failed to parse config file {path}: {reason}")]
    ConfigParse { path: PathBuf, reason: String },

    /// A configuration value could not be parsed.
    #[error("Invalid value '{value}' for key '{key}'")]
    InvalidValue { key: String, value: String },

    /// Raster surface could not be created or encoded.
    #[error("Image error: {0}")]
    Image(String),

    /// I/O error while writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<image::ImageError> for TrailError {
    fn from(e: image::ImageError) -> Self {
        TrailError::Image(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destroyed_display() {
        assert_eq!(TrailError::Destroyed.to_string(), "Trail has been destroyed");
    }

    #[test]
    fn test_invalid_value_display() {
        let err = TrailError::InvalidValue {
            key: "max_points".to_string(),
            value: "lots".to_string(),
        };
        assert!(err.to_string().contains("max_points"));
        assert!(err.to_string().contains("lots"));
    }

    #[test]
    fn test_config_read_has_source() {
        use std::error::Error;

        let err = TrailError::ConfigRead {
            path: PathBuf::from("/missing/trail.ini"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("/missing/trail.ini"));
    }
}
