//! # Planar States
//!
//! `State<Q>` is a planar symmetric tensor (stress or strain) given by its two
//! normal components, its shear component and the orientation of its X axis
//! relative to horizontal.
//!
//! States are immutable values: every transformation returns a new state.
//!
//! ## Frames
//!
//! - `transform(θ)` turns the axes by θ; the result has `theta_x + θ`.
//! - `to_horizontal()` re-expresses the state with `theta_x = 0`.
//! - Arithmetic (`+`, `-`, `*`, `/`) first brings both operands to the
//!   horizontal frame, so the result is always horizontal. The right-hand
//!   operand is converted to the left-hand operand's unit.
//!
//! ## Example
//!
//! ```rust
//! use mech_core::stress::Stress;
//! use mech_core::units::PressureUnit;
//! use std::f64::consts::FRAC_PI_2;
//!
//! let stress = Stress::from_values(10.0, 0.0, 0.0, FRAC_PI_2, PressureUnit::Megapascal);
//! assert!(stress.is_vertical());
//!
//! let horizontal = stress.to_horizontal();
//! assert!(horizontal.is_horizontal());
//! assert!(horizontal.is_x_zero());
//! assert!((horizontal.y().value() - 10.0).abs() < 1e-12);
//! ```

use std::f64::consts::{FRAC_PI_2, TAU};
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Div, Mul, Neg, Sub};

use approx::AbsDiffEq;
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::MechResult;
use crate::principal::{calculate_principal, calculate_principal_angles, MohrCircle};
use crate::principal_state::{PrincipalState, UnitSuffix};
use crate::quantity::Quantity;
use crate::transform::{
    angles_coincide, finite_or_zero, is_angle_zero, is_horizontal_angle, is_vertical_angle, rotate,
    transformation_matrix, StateVector,
};

/// A planar tensor state in a given orientation.
///
/// Deserialization goes through [`State::from_values`], so non-finite input is
/// coerced the same way as in code.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(bound(serialize = ""))]
pub struct State<Q: Quantity> {
    x: f64,
    y: f64,
    xy: f64,
    theta_x: f64,
    unit: Q::Unit,
    #[serde(skip)]
    marker: PhantomData<Q>,
}

impl<Q: Quantity> State<Q> {
    // ------------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------------

    /// Build from three quantities; `y` and `xy` are converted to the unit of `x`.
    pub fn new(x: Q, y: Q, xy: Q, theta_x: f64) -> Self {
        let unit = x.unit();
        Self::from_values(x.value(), y.value_in(unit), xy.value_in(unit), theta_x, unit)
    }

    /// Build from raw components in `unit`. NaN/∞ components and angles become zero.
    pub fn from_values(x: f64, y: f64, xy: f64, theta_x: f64, unit: Q::Unit) -> Self {
        Self::from_vector(StateVector::new(x, y, xy), theta_x, unit)
    }

    /// Build from a component vector (`[X, Y, XY]`, `StateVector` or nalgebra `Vector3`).
    pub fn from_vector(v: impl Into<StateVector>, theta_x: f64, unit: Q::Unit) -> Self {
        let v = v.into();
        let v = StateVector::finite(v.x, v.y, v.xy);
        Self {
            x: v.x,
            y: v.y,
            xy: v.xy,
            theta_x: finite_or_zero(theta_x),
            unit,
            marker: PhantomData,
        }
    }

    /// Build from a slice holding exactly `[X, Y, XY]`.
    pub fn from_slice(values: &[f64], theta_x: f64, unit: Q::Unit) -> MechResult<Self> {
        Ok(Self::from_vector(StateVector::from_slice(values)?, theta_x, unit))
    }

    /// The horizontal zero state in the default unit
    pub fn zero() -> Self {
        Self::zero_in(Q::Unit::default())
    }

    /// The horizontal zero state in `unit`
    pub fn zero_in(unit: Q::Unit) -> Self {
        Self::from_vector(StateVector::ZERO, 0.0, unit)
    }

    /// The state described by a principal state, expressed in the horizontal frame.
    pub fn from_principal(principal: &PrincipalState<Q>) -> Self {
        Self::from_vector(principal.to_vector(), 0.0, principal.unit())
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// Normal component along X
    pub fn x(&self) -> Q {
        Q::from_value(self.x, self.unit)
    }

    /// Normal component along Y
    pub fn y(&self) -> Q {
        Q::from_value(self.y, self.unit)
    }

    /// Shear component
    pub fn xy(&self) -> Q {
        Q::from_value(self.xy, self.unit)
    }

    /// Orientation of the X axis from horizontal (radians)
    pub fn theta_x(&self) -> f64 {
        self.theta_x
    }

    /// Orientation of the Y axis from horizontal (radians)
    pub fn theta_y(&self) -> f64 {
        self.theta_x + FRAC_PI_2
    }

    /// Unit shared by all three components
    pub fn unit(&self) -> Q::Unit {
        self.unit
    }

    /// Raw components in [`State::unit`]
    pub fn components(&self) -> StateVector {
        StateVector::new(self.x, self.y, self.xy)
    }

    /// Components as an nalgebra column vector
    pub fn to_vector(&self) -> Vector3<f64> {
        self.components().to_vector()
    }

    /// Components as `[X, Y, XY]`
    pub fn to_array(&self) -> [f64; 3] {
        self.components().to_array()
    }

    // ------------------------------------------------------------------------
    // Classification
    // ------------------------------------------------------------------------

    /// Normal component along X vanishes
    pub fn is_x_zero(&self) -> bool {
        Q::is_near_zero(self.x, self.unit)
    }

    /// Normal component along Y vanishes
    pub fn is_y_zero(&self) -> bool {
        Q::is_near_zero(self.y, self.unit)
    }

    /// Shear component vanishes
    pub fn is_xy_zero(&self) -> bool {
        Q::is_near_zero(self.xy, self.unit)
    }

    /// All three components vanish
    pub fn is_zero(&self) -> bool {
        self.is_x_zero() && self.is_y_zero() && self.is_xy_zero()
    }

    /// Both normal components present and no shear
    pub fn is_principal(&self) -> bool {
        !self.is_x_zero() && !self.is_y_zero() && self.is_xy_zero()
    }

    /// Shear only
    pub fn is_pure_shear(&self) -> bool {
        self.is_x_zero() && self.is_y_zero() && !self.is_xy_zero()
    }

    /// X axis along horizontal (θx ≡ 0 or π)
    pub fn is_horizontal(&self) -> bool {
        is_horizontal_angle(self.theta_x)
    }

    /// X axis along vertical (θx ≡ π/2 or 3π/2)
    pub fn is_vertical(&self) -> bool {
        is_vertical_angle(self.theta_x)
    }

    // ------------------------------------------------------------------------
    // Transformations
    // ------------------------------------------------------------------------

    /// Turn the axes by `theta` radians.
    pub fn transform(&self, theta: f64) -> Self {
        let theta = finite_or_zero(theta);
        if is_angle_zero(theta) {
            return *self;
        }
        Self::from_vector(rotate(self.components(), theta), self.theta_x + theta, self.unit)
    }

    /// Re-express the state with its X axis horizontal.
    pub fn to_horizontal(&self) -> Self {
        if is_angle_zero(self.theta_x) {
            return *self;
        }
        Self::from_vector(rotate(self.components(), -self.theta_x), 0.0, self.unit)
    }

    /// Principal decomposition. `theta1` of the result is measured from
    /// horizontal, i.e. this state's `theta_x` plus the principal angle
    /// relative to its own X axis.
    pub fn to_principal(&self) -> PrincipalState<Q> {
        let v = self.components();
        let tolerance = Q::tolerance(self.unit);
        let (s1, s2) = calculate_principal(v, tolerance);
        let (theta1, _) = calculate_principal_angles(v, Some(s2), tolerance);
        PrincipalState::from_values(s1, s2, self.theta_x + theta1, self.unit)
    }

    /// Return a copy with every component converted to `unit`.
    pub fn to_unit(&self, unit: Q::Unit) -> Self {
        if unit == self.unit {
            return *self;
        }
        Self::from_values(
            Q::convert(self.x, self.unit, unit),
            Q::convert(self.y, self.unit, unit),
            Q::convert(self.xy, self.unit, unit),
            self.theta_x,
            unit,
        )
    }

    /// Matrix taking this state's component vector to the horizontal frame.
    pub fn transformation_matrix(&self) -> Matrix3<f64> {
        transformation_matrix(-self.theta_x)
    }

    /// Mohr's circle of this state (frame independent)
    pub fn mohr_circle(&self) -> MohrCircle {
        MohrCircle::from_vector(self.components())
    }

    /// Maximum in-plane shear magnitude
    pub fn max_shear(&self) -> Q {
        Q::from_value(self.mohr_circle().max_shear(), self.unit)
    }

    fn map_horizontal(&self, f: impl Fn(StateVector) -> StateVector) -> Self {
        let h = self.to_horizontal();
        Self::from_vector(f(h.components()), 0.0, self.unit)
    }
}

#[derive(Deserialize)]
struct StateFields<U> {
    x: f64,
    y: f64,
    xy: f64,
    theta_x: f64,
    unit: U,
}

impl<'de, Q: Quantity> Deserialize<'de> for State<Q> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = StateFields::<Q::Unit>::deserialize(deserializer)?;
        Ok(Self::from_values(fields.x, fields.y, fields.xy, fields.theta_x, fields.unit))
    }
}

impl<Q: Quantity> Default for State<Q> {
    fn default() -> Self {
        Self::zero()
    }
}

// ============================================================================
// Arithmetic (horizontal frame)
// ============================================================================

impl<Q: Quantity> Add for State<Q> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        let rhs = rhs.to_horizontal().to_unit(self.unit).components();
        self.map_horizontal(|v| v.add(rhs))
    }
}

impl<Q: Quantity> Sub for State<Q> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl<Q: Quantity> Neg for State<Q> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        self.map_horizontal(|v| v.scale(-1.0))
    }
}

impl<Q: Quantity> Mul<f64> for State<Q> {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        self.map_horizontal(|v| v.scale(rhs))
    }
}

impl<Q: Quantity> Div<f64> for State<Q> {
    type Output = Self;
    fn div(self, rhs: f64) -> Self::Output {
        self.map_horizontal(|v| StateVector::new(v.x / rhs, v.y / rhs, v.xy / rhs))
    }
}

// ============================================================================
// Equality
// ============================================================================

/// States are equal when their components agree (after unit conversion) and
/// their orientations coincide modulo 2π.
impl<Q: Quantity> AbsDiffEq for State<Q> {
    type Epsilon = f64;

    /// In the quantity's default unit; explicit epsilons are in `self`'s unit.
    fn default_epsilon() -> f64 {
        Q::TOLERANCE
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        let other = other.to_unit(self.unit);
        self.components().max_abs_diff(&other.components()) <= epsilon
            && angles_coincide(self.theta_x, other.theta_x, TAU)
    }
}

impl<Q: Quantity> PartialEq for State<Q> {
    fn eq(&self, other: &Self) -> bool {
        self.abs_diff_eq(other, Q::tolerance(self.unit))
    }
}

impl<Q: Quantity> fmt::Display for State<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(4);
        let unit = UnitSuffix(self.unit);
        write!(
            f,
            "X = {:.*}{}, Y = {:.*}{}, XY = {:.*}{}, θx = {:.*}°",
            precision,
            self.x,
            unit,
            precision,
            self.y,
            unit,
            precision,
            self.xy,
            unit,
            precision,
            self.theta_x.to_degrees()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::principal_state::PrincipalCase;
    use crate::strain::Strain;
    use crate::stress::Stress;
    use crate::units::{Pressure, PressureUnit};
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_4, PI};

    fn mpa(x: f64, y: f64, xy: f64, theta: f64) -> Stress {
        Stress::from_values(x, y, xy, theta, PressureUnit::Megapascal)
    }

    #[test]
    fn test_construction_coerces_non_finite() {
        let s = mpa(f64::NAN, 5.0, f64::NEG_INFINITY, f64::INFINITY);
        assert_eq!(s.to_array(), [0.0, 5.0, 0.0]);
        assert_eq!(s.theta_x(), 0.0);
    }

    #[test]
    fn test_new_converts_to_first_unit() {
        let s = Stress::new(
            Pressure::megapascals(1.0),
            Pressure::new(500.0, PressureUnit::Kilopascal),
            Pressure::pascals(250_000.0),
            0.0,
        );
        assert_eq!(s.unit(), PressureUnit::Megapascal);
        assert_abs_diff_eq!(s.y().value(), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(s.xy().value(), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_from_slice() {
        let s = Stress::from_slice(&[1.0, 2.0, 3.0], 0.0, PressureUnit::Pascal).unwrap();
        assert_eq!(s.to_array(), [1.0, 2.0, 3.0]);
        assert_eq!(
            Stress::from_slice(&[1.0, 2.0, 3.0, 4.0], 0.0, PressureUnit::Pascal)
                .unwrap_err()
                .error_code(),
            "COMPONENT_COUNT"
        );
    }

    #[test]
    fn test_from_nalgebra_vector() {
        let s = Strain::from_vector(Vector3::new(1e-3, -2e-4, 5e-5), 0.2, Default::default());
        assert_eq!(s.to_vector(), Vector3::new(1e-3, -2e-4, 5e-5));
        assert_abs_diff_eq!(s.theta_y(), 0.2 + FRAC_PI_2);
    }

    #[test]
    fn test_classification() {
        assert!(mpa(0.0, 0.0, 0.0, 0.0).is_zero());
        assert!(Stress::zero().is_zero());
        assert!(Stress::horizontal(1e-7, -1e-7, 0.0, PressureUnit::Pascal).is_zero());
        assert!(mpa(1e-13, -1e-13, 0.0, 0.0).is_zero());
        assert!(!mpa(1e-7, 0.0, 0.0, 0.0).is_zero());

        let shear = mpa(0.0, 0.0, 4.0, 0.0);
        assert!(shear.is_pure_shear());
        assert!(!shear.is_principal());

        let principal = mpa(4.0, -2.0, 0.0, 0.0);
        assert!(principal.is_principal());
        assert!(!principal.is_pure_shear());

        // a single normal component is neither
        let uniaxial = mpa(4.0, 0.0, 0.0, 0.0);
        assert!(!uniaxial.is_principal());
        assert!(!uniaxial.is_pure_shear());
        assert!(uniaxial.is_y_zero() && uniaxial.is_xy_zero() && !uniaxial.is_x_zero());
    }

    #[test]
    fn test_classification_independent_of_unit() {
        // 5e-7 GPa is 500 Pa
        let gpa = Stress::from_values(5e-7, 0.0, 0.0, 0.0, PressureUnit::Gigapascal);
        let pa = gpa.to_unit(PressureUnit::Pascal);
        assert!(!gpa.is_zero());
        assert!(!pa.is_zero());
        assert_eq!(gpa.to_principal().case(), PrincipalCase::UniaxialTension);
        assert_eq!(pa.to_principal().case(), gpa.to_principal().case());

        let tiny = Stress::from_values(5e-7, 0.0, 0.0, 0.0, PressureUnit::Pascal);
        for unit in PressureUnit::ALL {
            let converted = tiny.to_unit(unit);
            assert!(converted.is_zero(), "{} should be zero", converted);
            assert_eq!(converted.to_principal().case(), PrincipalCase::Zero);
        }
    }

    #[test]
    fn test_orientation_classification() {
        assert!(mpa(1.0, 0.0, 0.0, 0.0).is_horizontal());
        assert!(mpa(1.0, 0.0, 0.0, PI).is_horizontal());
        assert!(mpa(1.0, 0.0, 0.0, FRAC_PI_2).is_vertical());
        assert!(mpa(1.0, 0.0, 0.0, 3.0 * FRAC_PI_2).is_vertical());
        let skew = mpa(1.0, 0.0, 0.0, FRAC_PI_4);
        assert!(!skew.is_horizontal() && !skew.is_vertical());
    }

    #[test]
    fn test_transform_zero_angle_is_noop() {
        let s = mpa(1.0 / 3.0, 2.0, 0.1, 0.4);
        let t = s.transform(0.0);
        assert_eq!(t.to_array(), s.to_array());
        assert_eq!(t.theta_x(), s.theta_x());
    }

    #[test]
    fn test_transform_accumulates_angle() {
        let s = mpa(10.0, 4.0, 3.0, 0.25);
        let t = s.transform(0.5);
        assert_abs_diff_eq!(t.theta_x(), 0.75);
    }

    #[test]
    fn test_transform_round_trip() {
        let s = mpa(120.0, -45.0, 30.0, 0.3);
        let back = s.transform(0.9).transform(-0.9);
        assert_eq!(back, s);
    }

    #[test]
    fn test_to_horizontal_quarter_turn() {
        let h = mpa(10.0, 0.0, 0.0, FRAC_PI_2).to_horizontal();
        assert_eq!(h.theta_x(), 0.0);
        assert!(h.is_x_zero());
        assert_abs_diff_eq!(h.y().value(), 10.0);
        assert!(h.is_xy_zero());
    }

    #[test]
    fn test_to_horizontal_idempotent() {
        let h = mpa(7.0, -3.0, 2.0, 1.1).to_horizontal();
        assert_eq!(h.to_horizontal(), h);
        assert_eq!(h.to_horizontal().to_array(), h.to_array());
    }

    #[test]
    fn test_principal_scenarios() {
        let p = mpa(100.0, 50.0, 0.0, 0.0).to_principal();
        assert_eq!(p.values(), (100.0, 50.0));
        assert_eq!(p.theta1(), 0.0);
        assert_eq!(p.case(), PrincipalCase::PureTension);

        let p = mpa(0.0, 0.0, 10.0, 0.0).to_principal();
        assert_abs_diff_eq!(p.s1().value(), 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.s2().value(), -10.0, epsilon = 1e-12);
        assert_eq!(p.case(), PrincipalCase::TensionCompression);

        assert_eq!(Stress::zero().to_principal().case(), PrincipalCase::Zero);
    }

    #[test]
    fn test_principal_angle_adds_state_orientation() {
        let s = mpa(10.0, 0.0, 5.0, 0.1);
        let p = s.to_principal();
        assert_abs_diff_eq!(p.theta1(), 0.1 + 22.5_f64.to_radians(), epsilon = 1e-12);
    }

    #[test]
    fn test_principal_bijection() {
        let s = mpa(-40.0, 25.0, 12.0, 0.35);
        let back = State::from_principal(&s.to_principal()).transform(s.theta_x());
        assert!(back.abs_diff_eq(&s, 1e-9));

        let horizontal = mpa(-40.0, 25.0, 12.0, 0.0);
        assert!(State::from_principal(&horizontal.to_principal()).abs_diff_eq(&horizontal, 1e-9));
    }

    #[test]
    fn test_principal_orientation_is_frame_independent() {
        let s = mpa(30.0, -10.0, 8.0, 0.0);
        let turned = s.transform(0.6);
        assert_eq!(s.to_principal(), turned.to_principal());
    }

    #[test]
    fn test_addition_scenario() {
        let sum = mpa(10.0, 20.0, 0.0, 0.0) + mpa(5.0, 5.0, 0.0, 0.0);
        assert_eq!(sum, mpa(15.0, 25.0, 0.0, 0.0));
        assert_eq!(sum.theta_x(), 0.0);
    }

    #[test]
    fn test_addition_aligns_frames() {
        let a = mpa(10.0, 0.0, 0.0, 0.0);
        let b = mpa(10.0, 0.0, 0.0, FRAC_PI_2);
        let sum = a + b;
        assert_eq!(sum, mpa(10.0, 10.0, 0.0, 0.0));
    }

    #[test]
    fn test_addition_converts_units() {
        let a = mpa(1.0, 0.0, 0.0, 0.0);
        let b = Stress::from_values(500.0, 0.0, 0.0, 0.0, PressureUnit::Kilopascal);
        let sum = a + b;
        assert_eq!(sum.unit(), PressureUnit::Megapascal);
        assert_abs_diff_eq!(sum.x().value(), 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_subtraction_and_scaling() {
        let a = mpa(10.0, 20.0, 4.0, 0.0);
        let b = mpa(5.0, 5.0, 1.0, 0.0);
        assert_eq!(a - b, mpa(5.0, 15.0, 3.0, 0.0));
        assert_eq!(a * 2.0, mpa(20.0, 40.0, 8.0, 0.0));
        assert_eq!(a / 2.0, mpa(5.0, 10.0, 2.0, 0.0));
        assert_eq!(-a, mpa(-10.0, -20.0, -4.0, 0.0));
        assert!((a / 0.0).is_zero());
    }

    #[test]
    fn test_scaling_result_is_horizontal() {
        let s = mpa(10.0, 0.0, 0.0, FRAC_PI_2) * 3.0;
        assert_eq!(s.theta_x(), 0.0);
        assert_abs_diff_eq!(s.y().value(), 30.0);
    }

    #[test]
    fn test_to_unit_returns_new_state() {
        let s = mpa(1.0, 2.0, 3.0, 0.2);
        let k = s.to_unit(PressureUnit::Kilopascal);
        assert_eq!(s.unit(), PressureUnit::Megapascal);
        assert_eq!(k.unit(), PressureUnit::Kilopascal);
        assert_abs_diff_eq!(k.xy().value(), 3000.0, epsilon = 1e-9);
        assert_eq!(k.theta_x(), 0.2);
        assert_eq!(s, k);
    }

    #[test]
    fn test_equality_angle_wraps() {
        assert_eq!(mpa(1.0, 2.0, 3.0, 0.2), mpa(1.0, 2.0, 3.0, 0.2 + TAU));
        assert_ne!(mpa(1.0, 2.0, 3.0, 0.2), mpa(1.0, 2.0, 3.0, 0.3));
        assert_ne!(mpa(1.0, 2.0, 3.0, 0.2), mpa(1.0, 2.0, 3.1, 0.2));
    }

    #[test]
    fn test_transformation_matrix_to_horizontal() {
        let s = mpa(12.0, -3.0, 4.0, 0.7);
        let by_matrix = StateVector::from(s.transformation_matrix() * s.to_vector());
        assert!(by_matrix.max_abs_diff(&s.to_horizontal().components()) < 1e-12);
    }

    #[test]
    fn test_max_shear() {
        let s = mpa(10.0, 0.0, 5.0, 0.0);
        assert_abs_diff_eq!(s.max_shear().value(), 50.0_f64.sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(s.max_shear().value(), s.to_principal().max_shear().value(), epsilon = 1e-12);
    }

    #[test]
    fn test_display() {
        let s = mpa(10.0, 0.0, 5.0, 0.0);
        assert_eq!(format!("{:.1}", s), "X = 10.0 MPa, Y = 0.0 MPa, XY = 5.0 MPa, θx = 0.0°");
    }

    #[test]
    fn test_serialization() {
        let s = mpa(10.0, 0.0, 5.0, 0.25);
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#"{"x":10.0,"y":0.0,"xy":5.0,"theta_x":0.25,"unit":"MPa"}"#);
        let back: Stress = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn test_deserialize_strain() {
        let json = r#"{"x":0.001,"y":-0.0002,"xy":0.00005,"theta_x":0.2,"unit":null}"#;
        let e: Strain = serde_json::from_str(json).unwrap();
        assert_eq!(e, Strain::strain(1e-3, -2e-4, 5e-5, 0.2));
        assert!(serde_json::from_str::<Stress>(r#"{"x":1.0,"y":2.0}"#).is_err());
    }
}
