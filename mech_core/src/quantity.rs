//! Quantity capability shared by every state component type.
//!
//! [`State`](crate::state::State) and [`PrincipalState`](crate::principal_state::PrincipalState)
//! are written against this trait only. A quantity is a numeric value with a
//! unit, plus a tolerance sized for the magnitudes that quantity usually takes.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::units::{Pressure, PressureUnit};

/// Trait implemented by every physical quantity a state can hold.
///
/// # Invariants
///
/// - `TOLERANCE` is finite and positive and is expressed in `Unit::default()`.
///   A value is treated as exactly zero when its magnitude is below
///   [`Quantity::tolerance`] in the value's own unit, so classification does
///   not depend on the unit a state happens to be stored in.
/// - `convert(v, u, u) == v` for every unit `u`.
pub trait Quantity: Copy + fmt::Debug + PartialEq + Send + Sync + 'static {
    /// Runtime unit carried by values of this quantity.
    type Unit: Copy + fmt::Debug + fmt::Display + PartialEq + Default + Send + Sync + Serialize + DeserializeOwned + 'static;

    /// Near-zero / near-equal threshold, in the default unit.
    const TOLERANCE: f64;

    /// Short lowercase name ("stress", "strain").
    const NAME: &'static str;

    /// Build a quantity from a raw value and unit.
    fn from_value(value: f64, unit: Self::Unit) -> Self;

    /// Raw numeric value, in [`Quantity::unit`].
    fn value(&self) -> f64;

    /// Unit the value is expressed in.
    fn unit(&self) -> Self::Unit;

    /// Convert a raw value between two units.
    fn convert(value: f64, from: Self::Unit, to: Self::Unit) -> f64;

    /// Value expressed in `unit`.
    fn value_in(&self, unit: Self::Unit) -> f64 {
        Self::convert(self.value(), self.unit(), unit)
    }

    /// [`Quantity::TOLERANCE`] expressed in `unit`.
    fn tolerance(unit: Self::Unit) -> f64 {
        Self::convert(Self::TOLERANCE, Self::Unit::default(), unit)
    }

    /// Whether a raw value in `unit` is zero within [`Quantity::tolerance`].
    fn is_near_zero(value: f64, unit: Self::Unit) -> bool {
        value.abs() < Self::tolerance(unit)
    }
}

impl Quantity for Pressure {
    type Unit = PressureUnit;

    const TOLERANCE: f64 = 1e-6;
    const NAME: &'static str = "stress";

    fn from_value(value: f64, unit: PressureUnit) -> Self {
        Pressure::new(value, unit)
    }

    fn value(&self) -> f64 {
        Pressure::value(self)
    }

    fn unit(&self) -> PressureUnit {
        Pressure::unit(self)
    }

    fn convert(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
        value * from.factor_to(to)
    }
}

/// Unit marker for dimensionless quantities (strain).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Dimensionless;

impl fmt::Display for Dimensionless {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

/// Plain `f64` is the dimensionless strain component.
impl Quantity for f64 {
    type Unit = Dimensionless;

    const TOLERANCE: f64 = 1e-12;
    const NAME: &'static str = "strain";

    fn from_value(value: f64, _unit: Dimensionless) -> Self {
        value
    }

    fn value(&self) -> f64 {
        *self
    }

    fn unit(&self) -> Dimensionless {
        Dimensionless
    }

    fn convert(value: f64, _from: Dimensionless, _to: Dimensionless) -> f64 {
        value
    }
}
