//! # Principal States
//!
//! A planar tensor expressed in its shear-free orientation: the two principal
//! values and the direction of the larger one, measured from horizontal.
//!
//! ## Example
//!
//! ```rust
//! use mech_core::principal_state::PrincipalCase;
//! use mech_core::stress::Stress;
//! use mech_core::units::PressureUnit;
//!
//! let stress = Stress::from_values(0.0, 0.0, 10.0, 0.0, PressureUnit::Megapascal);
//! let principal = stress.to_principal();
//!
//! assert!((principal.s1().value() - 10.0).abs() < 1e-9);
//! assert!((principal.s2().value() + 10.0).abs() < 1e-9);
//! assert_eq!(principal.case(), PrincipalCase::TensionCompression);
//! ```

use std::f64::consts::FRAC_PI_2;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use approx::AbsDiffEq;
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::{MechError, MechResult};
use crate::principal::components_from_principal;
use crate::quantity::Quantity;
use crate::state::State;
use crate::transform::{finite_or_zero, StateVector};

// ============================================================================
// Principal Case
// ============================================================================

/// Classification of a principal state by the signs of S1 and S2.
///
/// | S1 | S2 | Case |
/// |---|---|---|
/// | ≈0 | ≈0 | Zero |
/// | ≈0 | <0 | UniaxialCompression |
/// | >0 | ≈0 | UniaxialTension |
/// | >0 | >0 | PureTension |
/// | <0 | <0 | PureCompression |
/// | >0 | <0 | TensionCompression |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrincipalCase {
    /// Both principal values vanish
    Zero,
    /// Both principal values are tensile
    PureTension,
    /// Both principal values are compressive
    PureCompression,
    /// One tensile and one compressive principal value
    TensionCompression,
    /// Only the maximum principal value is nonzero and it is tensile
    UniaxialTension,
    /// Only the minimum principal value is nonzero and it is compressive
    UniaxialCompression,
}

impl PrincipalCase {
    /// All cases
    pub const ALL: [PrincipalCase; 6] = [
        PrincipalCase::Zero,
        PrincipalCase::PureTension,
        PrincipalCase::PureCompression,
        PrincipalCase::TensionCompression,
        PrincipalCase::UniaxialTension,
        PrincipalCase::UniaxialCompression,
    ];

    /// Classify from raw principal values using `tolerance` for zero checks.
    pub fn classify(s1: f64, s2: f64, tolerance: f64) -> Self {
        match (Sign::of(s1, tolerance), Sign::of(s2, tolerance)) {
            (Sign::Zero, Sign::Zero) => PrincipalCase::Zero,
            (Sign::Positive, Sign::Positive) => PrincipalCase::PureTension,
            (Sign::Negative, Sign::Negative) => PrincipalCase::PureCompression,
            (Sign::Positive, Sign::Negative) | (Sign::Negative, Sign::Positive) => {
                PrincipalCase::TensionCompression
            }
            (Sign::Positive, Sign::Zero) | (Sign::Zero, Sign::Positive) => PrincipalCase::UniaxialTension,
            (Sign::Zero, Sign::Negative) | (Sign::Negative, Sign::Zero) => {
                PrincipalCase::UniaxialCompression
            }
        }
    }

    /// Short code used in reports
    pub fn code(&self) -> &'static str {
        match self {
            PrincipalCase::Zero => "Z",
            PrincipalCase::PureTension => "TT",
            PrincipalCase::PureCompression => "CC",
            PrincipalCase::TensionCompression => "TC",
            PrincipalCase::UniaxialTension => "T",
            PrincipalCase::UniaxialCompression => "C",
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            PrincipalCase::Zero => "Zero state",
            PrincipalCase::PureTension => "Biaxial tension",
            PrincipalCase::PureCompression => "Biaxial compression",
            PrincipalCase::TensionCompression => "Tension-compression",
            PrincipalCase::UniaxialTension => "Uniaxial tension",
            PrincipalCase::UniaxialCompression => "Uniaxial compression",
        }
    }

    /// Whether any principal value is tensile
    pub fn has_tension(&self) -> bool {
        matches!(
            self,
            PrincipalCase::PureTension | PrincipalCase::TensionCompression | PrincipalCase::UniaxialTension
        )
    }

    /// Whether any principal value is compressive
    pub fn has_compression(&self) -> bool {
        matches!(
            self,
            PrincipalCase::PureCompression
                | PrincipalCase::TensionCompression
                | PrincipalCase::UniaxialCompression
        )
    }
}

impl fmt::Display for PrincipalCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for PrincipalCase {
    type Err = MechError;

    fn from_str(s: &str) -> MechResult<Self> {
        let trimmed = s.trim();
        PrincipalCase::ALL
            .into_iter()
            .find(|case| case.code() == trimmed || format!("{:?}", case) == trimmed)
            .ok_or_else(|| MechError::unknown_case(trimmed))
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    fn of(value: f64, tolerance: f64) -> Self {
        if value.abs() < tolerance {
            Sign::Zero
        } else if value > 0.0 {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

// ============================================================================
// Principal State
// ============================================================================

/// A tensor in its principal orientation.
///
/// `s1 ≥ s2` holds for every value: constructing with `s1 < s2` swaps the two
/// and turns `theta1` by π/2, which describes the same tensor. Deserialization
/// goes through [`PrincipalState::from_values`] and keeps the ordering.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(bound(serialize = ""))]
pub struct PrincipalState<Q: Quantity> {
    s1: f64,
    s2: f64,
    theta1: f64,
    unit: Q::Unit,
    #[serde(skip)]
    marker: PhantomData<Q>,
}

impl<Q: Quantity> PrincipalState<Q> {
    /// Build from two quantities; `s2` is converted to the unit of `s1`.
    pub fn new(s1: Q, s2: Q, theta1: f64) -> Self {
        let unit = s1.unit();
        Self::from_values(s1.value(), s2.value_in(unit), theta1, unit)
    }

    /// Build from raw values in `unit`. NaN/∞ inputs become zero.
    pub fn from_values(s1: f64, s2: f64, theta1: f64, unit: Q::Unit) -> Self {
        let (s1, s2, theta1) = (finite_or_zero(s1), finite_or_zero(s2), finite_or_zero(theta1));
        let (s1, s2, theta1) = if s1 < s2 {
            (s2, s1, theta1 + FRAC_PI_2)
        } else {
            (s1, s2, theta1)
        };

        Self {
            s1,
            s2,
            theta1,
            unit,
            marker: PhantomData,
        }
    }

    /// The zero principal state in the default unit
    pub fn zero() -> Self {
        Self::from_values(0.0, 0.0, 0.0, Q::Unit::default())
    }

    /// Maximum principal value
    pub fn s1(&self) -> Q {
        Q::from_value(self.s1, self.unit)
    }

    /// Minimum principal value
    pub fn s2(&self) -> Q {
        Q::from_value(self.s2, self.unit)
    }

    /// Principal values as raw numbers in [`PrincipalState::unit`]
    pub fn values(&self) -> (f64, f64) {
        (self.s1, self.s2)
    }

    /// Direction of S1 from horizontal (radians)
    pub fn theta1(&self) -> f64 {
        self.theta1
    }

    /// Direction of S2 from horizontal (radians)
    pub fn theta2(&self) -> f64 {
        self.theta1 + FRAC_PI_2
    }

    /// Unit shared by both principal values
    pub fn unit(&self) -> Q::Unit {
        self.unit
    }

    /// Sign classification of the principal values
    pub fn case(&self) -> PrincipalCase {
        PrincipalCase::classify(self.s1, self.s2, Q::tolerance(self.unit))
    }

    /// Whether both principal values vanish
    pub fn is_zero(&self) -> bool {
        self.case() == PrincipalCase::Zero
    }

    /// Whether S1 ≈ S2, in which case every direction is principal
    pub fn is_hydrostatic(&self) -> bool {
        Q::is_near_zero(self.s1 - self.s2, self.unit)
    }

    /// Maximum in-plane shear, ½(S1 − S2)
    pub fn max_shear(&self) -> Q {
        Q::from_value(0.5 * (self.s1 - self.s2), self.unit)
    }

    /// Components in the horizontal frame
    pub fn to_vector(&self) -> StateVector {
        components_from_principal(self.s1, self.s2, self.theta1)
    }

    /// The full state in the horizontal frame
    pub fn to_state(&self) -> State<Q> {
        State::from_principal(self)
    }

    /// The full state with its X axis at `theta_x` from horizontal
    pub fn to_state_at(&self, theta_x: f64) -> State<Q> {
        self.to_state().transform(theta_x)
    }

    /// Return a copy expressed in `unit`
    pub fn to_unit(&self, unit: Q::Unit) -> Self {
        Self::from_values(
            Q::convert(self.s1, self.unit, unit),
            Q::convert(self.s2, self.unit, unit),
            self.theta1,
            unit,
        )
    }
}

#[derive(Deserialize)]
struct PrincipalFields<U> {
    s1: f64,
    s2: f64,
    theta1: f64,
    unit: U,
}

impl<'de, Q: Quantity> Deserialize<'de> for PrincipalState<Q> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = PrincipalFields::<Q::Unit>::deserialize(deserializer)?;
        Ok(Self::from_values(fields.s1, fields.s2, fields.theta1, fields.unit))
    }
}

impl<Q: Quantity> Default for PrincipalState<Q> {
    fn default() -> Self {
        Self::zero()
    }
}

/// Principal states are equal when their values agree and they describe the
/// same tensor. Directions are therefore compared through the horizontal-frame
/// components, which ignores the π ambiguity of an axis and the arbitrary
/// direction of a hydrostatic state.
impl<Q: Quantity> AbsDiffEq for PrincipalState<Q> {
    type Epsilon = f64;

    /// In the quantity's default unit; explicit epsilons are in `self`'s unit.
    fn default_epsilon() -> f64 {
        Q::TOLERANCE
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        let other = other.to_unit(self.unit);
        (self.s1 - other.s1).abs() <= epsilon
            && (self.s2 - other.s2).abs() <= epsilon
            && self.to_vector().max_abs_diff(&other.to_vector()) <= epsilon
    }
}

impl<Q: Quantity> PartialEq for PrincipalState<Q> {
    fn eq(&self, other: &Self) -> bool {
        self.abs_diff_eq(other, Q::tolerance(self.unit))
    }
}

impl<Q: Quantity> fmt::Display for PrincipalState<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(4);
        write!(
            f,
            "S1 = {:.*}{}, S2 = {:.*}{}, θ1 = {:.*}° ({})",
            precision,
            self.s1,
            UnitSuffix(self.unit),
            precision,
            self.s2,
            UnitSuffix(self.unit),
            precision,
            self.theta1.to_degrees(),
            self.case()
        )
    }
}

/// Formats a unit as `" MPa"`, or nothing for dimensionless quantities.
pub(crate) struct UnitSuffix<U>(pub U);

impl<U: fmt::Display> fmt::Display for UnitSuffix<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.0.to_string();
        if symbol.is_empty() {
            Ok(())
        } else {
            write!(f, " {}", symbol)
        }
    }
}
