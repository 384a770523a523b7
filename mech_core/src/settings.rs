//! # Report Settings
//!
//! Output preferences for [`StateReport`](crate::report::StateReport): which
//! pressure unit to report stresses in, whether angles are shown in degrees or
//! radians, and how many decimals the text rendering uses.
//!
//! Settings are plain JSON; every field is optional and falls back to its
//! default.
//!
//! ```json
//! { "pressure_unit": "ksi", "angle_unit": "Degrees", "precision": 2 }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use mech_core::settings::{AngleUnit, ReportSettings};
//! use mech_core::units::PressureUnit;
//!
//! let settings = ReportSettings::from_json(r#"{ "pressure_unit": "MPa" }"#).unwrap();
//! assert_eq!(settings.pressure_unit, PressureUnit::Megapascal);
//! assert_eq!(settings.angle_unit, AngleUnit::Degrees);
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{MechError, MechResult};
use crate::units::PressureUnit;

/// Largest supported number of decimals in text output
pub const MAX_PRECISION: usize = 12;

/// Unit used to report angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AngleUnit {
    Radians,
    #[default]
    Degrees,
}

impl AngleUnit {
    /// Convert an angle in radians to this unit
    pub fn express_radians(self, radians: f64) -> f64 {
        match self {
            AngleUnit::Radians => radians,
            AngleUnit::Degrees => radians.to_degrees(),
        }
    }

    /// Convert an angle in this unit to radians
    pub fn to_radians(self, value: f64) -> f64 {
        match self {
            AngleUnit::Radians => value,
            AngleUnit::Degrees => value.to_radians(),
        }
    }

    /// Printable symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            AngleUnit::Radians => "rad",
            AngleUnit::Degrees => "°",
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Output preferences for state reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Unit stresses are reported in
    pub pressure_unit: PressureUnit,
    /// Unit angles are reported in
    pub angle_unit: AngleUnit,
    /// Decimals used by text rendering
    pub precision: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            pressure_unit: PressureUnit::Megapascal,
            angle_unit: AngleUnit::Degrees,
            precision: 3,
        }
    }
}

impl ReportSettings {
    /// Parse and validate settings from a JSON string.
    pub fn from_json(json: &str) -> MechResult<Self> {
        let settings: ReportSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> MechResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| MechError::file_error("read", path.display().to_string(), e.to_string()))?;
        let settings = Self::from_json(&json)?;
        log::debug!("loaded report settings from {}", path.display());
        Ok(settings)
    }

    /// Check field ranges.
    pub fn validate(&self) -> MechResult<()> {
        if self.precision > MAX_PRECISION {
            return Err(MechError::invalid_input(
                "precision",
                self.precision.to_string(),
                format!("Precision must be at most {}", MAX_PRECISION),
            ));
        }
        Ok(())
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> MechResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_defaults() {
        let settings = ReportSettings::default();
        assert_eq!(settings.pressure_unit, PressureUnit::Megapascal);
        assert_eq!(settings.angle_unit, AngleUnit::Degrees);
        assert_eq!(settings.precision, 3);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = ReportSettings::from_json(r#"{ "precision": 1 }"#).unwrap();
        assert_eq!(settings.precision, 1);
        assert_eq!(settings.pressure_unit, PressureUnit::Megapascal);

        let empty = ReportSettings::from_json("{}").unwrap();
        assert_eq!(empty, ReportSettings::default());
    }

    #[test]
    fn test_full_json() {
        let json = r#"{ "pressure_unit": "ksi", "angle_unit": "Radians", "precision": 6 }"#;
        let settings = ReportSettings::from_json(json).unwrap();
        assert_eq!(settings.pressure_unit, PressureUnit::Ksi);
        assert_eq!(settings.angle_unit, AngleUnit::Radians);
    }

    #[test]
    fn test_invalid_precision() {
        let err = ReportSettings::from_json(r#"{ "precision": 40 }"#).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_invalid_unit() {
        let err = ReportSettings::from_json(r#"{ "pressure_unit": "bar" }"#).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_missing_file() {
        let err = ReportSettings::load("/nonexistent/dir/settings.json").unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_json_round_trip() {
        let settings = ReportSettings {
            pressure_unit: PressureUnit::Psi,
            angle_unit: AngleUnit::Radians,
            precision: 2,
        };
        let json = settings.to_json().unwrap();
        assert_eq!(ReportSettings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_angle_conversion() {
        assert!((AngleUnit::Degrees.express_radians(PI) - 180.0).abs() < 1e-12);
        assert_eq!(AngleUnit::Radians.express_radians(1.5), 1.5);
        assert!((AngleUnit::Degrees.to_radians(90.0) - PI / 2.0).abs() < 1e-15);
    }
}
