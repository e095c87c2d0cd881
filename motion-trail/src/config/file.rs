//! INI file loading and saving for trail configuration.

use std::fs;
use std::path::Path;

use ini::Ini;

use super::{Color, TrailConfig, TrailOverrides};
use crate::error::{TrailError, TrailResult};

/// Section name holding trail settings.
pub const TRAIL_SECTION: &str = "trail";

impl TrailOverrides {
    /// Load overrides from an INI file.
    ///
    /// A missing `[trail]` section yields empty overrides.
    pub fn load(path: impl AsRef<Path>) -> TrailResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| TrailError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let ini = Ini::load_from_str(&text).map_err(|e| TrailError::ConfigParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        tracing::debug!(path = %path.display(), "Loaded trail config file");
        Self::from_ini(&ini)
    }

    /// Parse overrides from INI text.
    pub fn from_ini_str(text: &str) -> TrailResult<Self> {
        let ini = Ini::load_from_str(text).map_err(|e| TrailError::ConfigParse {
            path: "<string>".into(),
            reason: e.to_string(),
        })?;
        Self::from_ini(&ini)
    }

    fn from_ini(ini: &Ini) -> TrailResult<Self> {
        let mut overrides = TrailOverrides::default();

        let Some(section) = ini.section(Some(TRAIL_SECTION)) else {
            return Ok(overrides);
        };

        for (key, value) in section.iter() {
            let value = value.trim();
            match key {
                "max_points" => overrides.max_points = Some(parse_number(key, value)?),
                "min_time_between_points" => {
                    overrides.min_time_between_points = Some(parse_number(key, value)?)
                }
                "base_width" => overrides.base_width = Some(parse_number(key, value)?),
                "tail_width" => overrides.tail_width = Some(parse_number(key, value)?),
                "base_alpha" => overrides.base_alpha = Some(parse_number(key, value)?),
                "tail_alpha" => overrides.tail_alpha = Some(parse_number(key, value)?),
                "color" => {
                    let color = value.parse::<Color>().map_err(|_| invalid(key, value))?;
                    overrides.color = Some(color);
                }
                _ => {
                    tracing::warn!(key, "Ignoring unknown trail config key");
                }
            }
        }

        Ok(overrides)
    }
}

impl TrailConfig {
    /// Render this configuration as an INI document with a `[trail]` section.
    pub fn to_ini_string(&self) -> TrailResult<String> {
        let mut ini = Ini::new();
        ini.with_section(Some(TRAIL_SECTION))
            .set("max_points", self.max_points().to_string())
            .set(
                "min_time_between_points",
                self.min_time_between_points().to_string(),
            )
            .set("base_width", self.base_width().to_string())
            .set("tail_width", self.tail_width().to_string())
            .set("base_alpha", self.base_alpha().to_string())
            .set("tail_alpha", self.tail_alpha().to_string())
            .set("color", self.color().to_string());

        let mut buf = Vec::new();
        ini.write_to(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Write this configuration to an INI file.
    pub fn save(&self, path: impl AsRef<Path>) -> TrailResult<()> {
        fs::write(path.as_ref(), self.to_ini_string()?)?;
        Ok(())
    }
}

/// Parse a number, accepting `inf`/`NaN` so they can be clamped later.
fn parse_number(key: &str, value: &str) -> TrailResult<f64> {
    value.parse::<f64>().map_err(|_| invalid(key, value))
}

fn invalid(key: &str, value: &str) -> TrailError {
    TrailError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}
