//! # State Reports
//!
//! A flat, JSON-serializable summary of a stress or strain state and its
//! principal decomposition, laid out for display and for programmatic
//! consumers alike.
//!
//! ## Example
//!
//! ```rust
//! use mech_core::report::StateReport;
//! use mech_core::settings::ReportSettings;
//! use mech_core::stress::Stress;
//! use mech_core::units::PressureUnit;
//!
//! let stress = Stress::horizontal(80.0, -20.0, 30.0, PressureUnit::Megapascal);
//! let report = StateReport::for_stress(&stress, &ReportSettings::default());
//!
//! assert_eq!(report.case_code, "TC");
//! println!("{}", report.render_text(2));
//! let json = serde_json::to_string_pretty(&report).unwrap();
//! assert!(json.contains("\"quantity\": \"stress\""));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::MechResult;
use crate::principal_state::PrincipalCase;
use crate::quantity::Quantity;
use crate::settings::ReportSettings;
use crate::state::State;
use crate::strain::Strain;
use crate::stress::Stress;

/// Summary of a state and its principal decomposition.
///
/// Component values are in `unit`; angles are in `angle_unit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateReport {
    /// "stress" or "strain"
    pub quantity: String,
    /// Unit symbol of every component value (empty for strain)
    pub unit: String,
    /// Unit symbol of every angle
    pub angle_unit: String,

    pub x: f64,
    pub y: f64,
    pub xy: f64,
    /// Orientation of the X axis from horizontal
    pub theta_x: f64,

    /// Maximum principal value
    pub s1: f64,
    /// Minimum principal value
    pub s2: f64,
    /// Direction of S1 from horizontal
    pub theta1: f64,
    /// Direction of S2 from horizontal
    pub theta2: f64,

    pub case: PrincipalCase,
    pub case_code: String,

    /// Maximum in-plane shear (Mohr's circle radius)
    pub max_shear: f64,
    /// Mean normal value (Mohr's circle center)
    pub mean_normal: f64,

    /// Plane-stress von Mises equivalent (stress only)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub von_mises: Option<f64>,
}

impl StateReport {
    /// Report a stress state, converted to `settings.pressure_unit`.
    pub fn for_stress(stress: &Stress, settings: &ReportSettings) -> Self {
        let stress = stress.to_unit(settings.pressure_unit);
        let mut report = Self::build(&stress, settings);
        report.von_mises = Some(stress.von_mises().value());
        report
    }

    /// Report a strain state.
    pub fn for_strain(strain: &Strain, settings: &ReportSettings) -> Self {
        Self::build(strain, settings)
    }

    fn build<Q: Quantity>(state: &State<Q>, settings: &ReportSettings) -> Self {
        let angle = settings.angle_unit;
        let principal = state.to_principal();
        let (s1, s2) = principal.values();
        let circle = state.mohr_circle();
        let case = principal.case();
        let v = state.components();

        StateReport {
            quantity: Q::NAME.to_string(),
            unit: state.unit().to_string(),
            angle_unit: angle.symbol().to_string(),
            x: v.x,
            y: v.y,
            xy: v.xy,
            theta_x: angle.express_radians(state.theta_x()),
            s1,
            s2,
            theta1: angle.express_radians(principal.theta1()),
            theta2: angle.express_radians(principal.theta2()),
            case,
            case_code: case.code().to_string(),
            max_shear: circle.max_shear(),
            mean_normal: circle.center,
            von_mises: None,
        }
    }

    /// Multi-line text rendering with `precision` decimals.
    pub fn render_text(&self, precision: usize) -> String {
        format!("{:.*}", precision, self)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> MechResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Multi-line rendering; the formatter precision sets the decimals (default 3).
impl fmt::Display for StateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(3);
        let unit = if self.unit.is_empty() {
            String::new()
        } else {
            format!(" {}", self.unit)
        };

        writeln!(f, "{} state (θx = {:.p$}{}):", capitalize(&self.quantity), self.theta_x, self.angle_unit)?;
        writeln!(f, "  X  = {:.p$}{}", self.x, unit)?;
        writeln!(f, "  Y  = {:.p$}{}", self.y, unit)?;
        writeln!(f, "  XY = {:.p$}{}", self.xy, unit)?;
        writeln!(f, "Principal ({}):", self.case.description())?;
        writeln!(f, "  S1 = {:.p$}{} at {:.p$}{}", self.s1, unit, self.theta1, self.angle_unit)?;
        writeln!(f, "  S2 = {:.p$}{} at {:.p$}{}", self.s2, unit, self.theta2, self.angle_unit)?;
        writeln!(f, "  max shear = {:.p$}{}", self.max_shear, unit)?;
        if let Some(vm) = self.von_mises {
            writeln!(f, "  von Mises = {:.p$}{}", vm, unit)?;
        }
        Ok(())
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
