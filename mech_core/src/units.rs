//! # Unit Types
//!
//! Pressure units and a pressure-valued quantity used to carry stress
//! components. Strain is dimensionless and uses plain `f64` (see
//! [`crate::quantity`]).
//!
//! ## Design Philosophy
//!
//! A stress state is built once and then rotated, decomposed and combined
//! many times, so the unit travels with the value at runtime instead of being
//! fixed in the type. Combining two pressures in different units converts the
//! right-hand operand into the left-hand operand's unit.
//!
//! Each unit knows its ratio to the pascal; conversion is
//! `value * (from.pascals() / to.pascals())`.
//!
//! ## Example
//!
//! ```rust
//! use mech_core::units::{Pressure, PressureUnit};
//!
//! let p = Pressure::new(1.0, PressureUnit::Ksi);
//! let psi = p.to_unit(PressureUnit::Psi);
//! assert!((psi.value() - 1000.0).abs() < 1e-9);
//!
//! let sum = Pressure::new(1.0, PressureUnit::Megapascal) + Pressure::new(500.0, PressureUnit::Kilopascal);
//! assert_eq!(sum.unit(), PressureUnit::Megapascal);
//! assert!((sum.value() - 1.5).abs() < 1e-12);
//! ```

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{MechError, MechResult};

// ============================================================================
// Pressure Units
// ============================================================================

/// Units of pressure (stress).
///
/// Serializes as the unit symbol (`"Pa"`, `"MPa"`, `"psi"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PressureUnit {
    /// Pascal (N/m²)
    #[default]
    #[serde(rename = "Pa")]
    Pascal,
    /// Kilopascal
    #[serde(rename = "kPa")]
    Kilopascal,
    /// Megapascal (N/mm²)
    #[serde(rename = "MPa")]
    Megapascal,
    /// Gigapascal
    #[serde(rename = "GPa")]
    Gigapascal,
    /// Pounds per square inch
    #[serde(rename = "psi")]
    Psi,
    /// Kips per square inch
    #[serde(rename = "ksi")]
    Ksi,
    /// Pounds per square foot
    #[serde(rename = "psf")]
    Psf,
}

impl PressureUnit {
    /// All supported pressure units
    pub const ALL: [PressureUnit; 7] = [
        PressureUnit::Pascal,
        PressureUnit::Kilopascal,
        PressureUnit::Megapascal,
        PressureUnit::Gigapascal,
        PressureUnit::Psi,
        PressureUnit::Ksi,
        PressureUnit::Psf,
    ];

    /// Number of pascals in one of this unit.
    pub fn pascals(&self) -> f64 {
        match self {
            PressureUnit::Pascal => 1.0,
            PressureUnit::Kilopascal => 1.0e3,
            PressureUnit::Megapascal => 1.0e6,
            PressureUnit::Gigapascal => 1.0e9,
            PressureUnit::Psi => 6_894.757_293_168_361,
            PressureUnit::Ksi => 6_894_757.293_168_361,
            PressureUnit::Psf => 47.880_258_980_335_84,
        }
    }

    /// Printable symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            PressureUnit::Pascal => "Pa",
            PressureUnit::Kilopascal => "kPa",
            PressureUnit::Megapascal => "MPa",
            PressureUnit::Gigapascal => "GPa",
            PressureUnit::Psi => "psi",
            PressureUnit::Ksi => "ksi",
            PressureUnit::Psf => "psf",
        }
    }

    /// Factor converting a value in `self` into a value in `target`.
    pub fn factor_to(&self, target: PressureUnit) -> f64 {
        if *self == target {
            1.0
        } else {
            self.pascals() / target.pascals()
        }
    }
}

impl fmt::Display for PressureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for PressureUnit {
    type Err = MechError;

    /// Parse a unit symbol. Matching is case-sensitive except for the
    /// imperial symbols (`psi`, `ksi`, `psf`), since `mPa` and `MPa` differ.
    fn from_str(s: &str) -> MechResult<Self> {
        let trimmed = s.trim();
        match trimmed {
            "Pa" => Ok(PressureUnit::Pascal),
            "kPa" => Ok(PressureUnit::Kilopascal),
            "MPa" | "N/mm2" | "N/mm²" => Ok(PressureUnit::Megapascal),
            "GPa" => Ok(PressureUnit::Gigapascal),
            _ => match trimmed.to_ascii_lowercase().as_str() {
                "psi" => Ok(PressureUnit::Psi),
                "ksi" => Ok(PressureUnit::Ksi),
                "psf" => Ok(PressureUnit::Psf),
                _ => Err(MechError::unknown_unit(trimmed)),
            },
        }
    }
}

// ============================================================================
// Pressure Quantity
// ============================================================================

/// A pressure value together with its unit.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Pressure {
    value: f64,
    unit: PressureUnit,
}

impl Pressure {
    /// Create a pressure in the given unit
    pub const fn new(value: f64, unit: PressureUnit) -> Self {
        Self { value, unit }
    }

    /// Zero pressure in the given unit
    pub const fn zero(unit: PressureUnit) -> Self {
        Self::new(0.0, unit)
    }

    /// Shorthand for a value in pascals
    pub const fn pascals(value: f64) -> Self {
        Self::new(value, PressureUnit::Pascal)
    }

    /// Shorthand for a value in megapascals
    pub const fn megapascals(value: f64) -> Self {
        Self::new(value, PressureUnit::Megapascal)
    }

    /// Shorthand for a value in psi
    pub const fn psi(value: f64) -> Self {
        Self::new(value, PressureUnit::Psi)
    }

    /// Get the raw f64 value (in [`Pressure::unit`])
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Unit the value is expressed in
    pub const fn unit(&self) -> PressureUnit {
        self.unit
    }

    /// Value expressed in another unit
    pub fn value_in(&self, unit: PressureUnit) -> f64 {
        self.value * self.unit.factor_to(unit)
    }

    /// Return a new pressure expressed in `unit`.
    pub fn to_unit(&self, unit: PressureUnit) -> Self {
        Self::new(self.value_in(unit), unit)
    }

    /// Absolute value
    pub fn abs(&self) -> Self {
        Self::new(self.value.abs(), self.unit)
    }
}

impl PartialEq for Pressure {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value_in(self.unit)
    }
}

impl PartialOrd for Pressure {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.value.partial_cmp(&other.value_in(self.unit))
    }
}

impl fmt::Display for Pressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*} {}", p, self.value, self.unit),
            None => write!(f, "{} {}", self.value, self.unit),
        }
    }
}

// ============================================================================
// Arithmetic Implementations
// ============================================================================

impl Add for Pressure {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.value + rhs.value_in(self.unit), self.unit)
    }
}

impl Sub for Pressure {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.value - rhs.value_in(self.unit), self.unit)
    }
}

impl Neg for Pressure {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::new(-self.value, self.unit)
    }
}

impl Mul<f64> for Pressure {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.value * rhs, self.unit)
    }
}

impl Mul<Pressure> for f64 {
    type Output = Pressure;
    fn mul(self, rhs: Pressure) -> Self::Output {
        rhs * self
    }
}

impl Div<f64> for Pressure {
    type Output = Self;
    fn div(self, rhs: f64) -> Self::Output {
        Self::new(self.value / rhs, self.unit)
    }
}
