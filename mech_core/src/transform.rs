//! # Direction Cosines and Plane Rotation
//!
//! The Mohr's-circle rotation of a planar symmetric tensor stored as the
//! 3-component vector `(X, Y, XY)`.
//!
//! Rotating by θ expresses the tensor in axes turned counter-clockwise by θ:
//!
//! ```text
//! X'  = ½(X+Y) + ½(X−Y)·cos2θ + XY·sin2θ
//! Y'  = ½(X+Y) − ½(X−Y)·cos2θ − XY·sin2θ
//! XY' = XY·cos2θ − ½(X−Y)·sin2θ
//! ```
//!
//! Cosines and sines below [`COSINE_CUTOFF`] are coerced to exactly zero so
//! that axis-aligned rotations (0, π/2, π, 3π/2) produce exact zeros instead
//! of `1e-17` noise that would defeat the zero predicates downstream.
//!
//! ## Example
//!
//! ```rust
//! use mech_core::transform::{rotate, StateVector};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let v = StateVector::new(10.0, 0.0, 0.0);
//! let turned = rotate(v, FRAC_PI_2);
//! assert_eq!(turned, StateVector::new(0.0, 10.0, 0.0));
//! ```

use std::f64::consts::{PI, TAU};

use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::errors::{MechError, MechResult};

/// Magnitude below which a direction cosine is coerced to zero
pub const COSINE_CUTOFF: f64 = 1e-6;

/// Tolerance used for every angle comparison (radians)
pub const ANGLE_TOLERANCE: f64 = 1e-6;

/// `(cos θ, sin θ)` with near-zero magnitudes coerced to exactly 0.
pub fn direction_cosines(theta: f64) -> (f64, f64) {
    let (sin, cos) = theta.sin_cos();
    (coerce(cos), coerce(sin))
}

fn coerce(value: f64) -> f64 {
    if value.abs() < COSINE_CUTOFF {
        0.0
    } else {
        value
    }
}

/// Replace NaN/∞ with zero.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        log::debug!("coercing non-finite value {} to 0", value);
        0.0
    }
}

/// Whether an angle is zero within [`ANGLE_TOLERANCE`] (no wrapping).
pub fn is_angle_zero(theta: f64) -> bool {
    theta.abs() < ANGLE_TOLERANCE
}

/// Wrap an angle into `[0, 2π)`.
pub fn normalize_angle(theta: f64) -> f64 {
    let wrapped = theta.rem_euclid(TAU);
    // rem_euclid may return TAU itself for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Whether two angles describe the same direction modulo `period`.
pub fn angles_coincide(a: f64, b: f64, period: f64) -> bool {
    let diff = (a - b).rem_euclid(period);
    diff < ANGLE_TOLERANCE || period - diff < ANGLE_TOLERANCE
}

/// Whether `theta` lies on the horizontal axis (0 or π).
pub fn is_horizontal_angle(theta: f64) -> bool {
    angles_coincide(theta, 0.0, PI)
}

/// Whether `theta` lies on the vertical axis (π/2 or 3π/2).
pub fn is_vertical_angle(theta: f64) -> bool {
    angles_coincide(theta, PI / 2.0, PI)
}

// ============================================================================
// State Vector
// ============================================================================

/// The three raw components of a planar tensor: normal X, normal Y and shear XY.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StateVector {
    /// Normal component along the X axis
    pub x: f64,
    /// Normal component along the Y axis
    pub y: f64,
    /// Shear component
    pub xy: f64,
}

impl StateVector {
    /// The zero vector
    pub const ZERO: StateVector = StateVector::new(0.0, 0.0, 0.0);

    /// Create a vector from its components
    pub const fn new(x: f64, y: f64, xy: f64) -> Self {
        Self { x, y, xy }
    }

    /// Create a vector, coercing NaN/∞ components to zero
    pub fn finite(x: f64, y: f64, xy: f64) -> Self {
        Self::new(finite_or_zero(x), finite_or_zero(y), finite_or_zero(xy))
    }

    /// Build from a slice that must hold exactly three values `[X, Y, XY]`.
    pub fn from_slice(values: &[f64]) -> MechResult<Self> {
        match values {
            [x, y, xy] => Ok(Self::new(*x, *y, *xy)),
            _ => Err(MechError::ComponentCount { found: values.len() }),
        }
    }

    /// Components as `[X, Y, XY]`
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.xy]
    }

    /// Components as an nalgebra column vector
    pub fn to_vector(self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.xy)
    }

    /// Multiply every component by `factor`
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor, self.xy * factor)
    }

    /// Component-wise sum
    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.xy + other.xy)
    }

    /// Whether every component is below `tolerance` in magnitude
    pub fn is_zero(&self, tolerance: f64) -> bool {
        self.x.abs() < tolerance && self.y.abs() < tolerance && self.xy.abs() < tolerance
    }

    /// Largest absolute component difference from `other`
    pub fn max_abs_diff(&self, other: &Self) -> f64 {
        (self.x - other.x)
            .abs()
            .max((self.y - other.y).abs())
            .max((self.xy - other.xy).abs())
    }
}

impl From<[f64; 3]> for StateVector {
    fn from(values: [f64; 3]) -> Self {
        Self::new(values[0], values[1], values[2])
    }
}

impl From<StateVector> for [f64; 3] {
    fn from(v: StateVector) -> Self {
        v.to_array()
    }
}

impl From<Vector3<f64>> for StateVector {
    fn from(v: Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<StateVector> for Vector3<f64> {
    fn from(v: StateVector) -> Self {
        v.to_vector()
    }
}

// ============================================================================
// Rotation
// ============================================================================

/// Rotate a tensor vector by `theta` radians (Mohr's circle formula).
///
/// `theta ≈ 0` returns the input unchanged.
pub fn rotate(v: StateVector, theta: f64) -> StateVector {
    if is_angle_zero(theta) {
        return v;
    }

    let (cos2, sin2) = direction_cosines(2.0 * theta);
    let half_diff = 0.5 * v.x - 0.5 * v.y;

    let a = 0.5 * v.x + 0.5 * v.y;
    let b = half_diff * cos2;
    let c = v.xy * sin2;
    let d = half_diff * sin2;
    let e = v.xy * cos2;

    StateVector::new(a + b + c, a - b - c, e - d)
}

/// 3×3 matrix `T` with `T · [X, Y, XY]ᵀ == rotate(v, theta)`.
///
/// ```rust
/// use mech_core::transform::{rotate, transformation_matrix, StateVector};
///
/// let v = StateVector::new(80.0, -20.0, 35.0);
/// let by_matrix = StateVector::from(transformation_matrix(0.4) * v.to_vector());
/// assert!(by_matrix.max_abs_diff(&rotate(v, 0.4)) < 1e-9);
/// ```
#[rustfmt::skip]
pub fn transformation_matrix(theta: f64) -> Matrix3<f64> {
    let (c, s) = direction_cosines(theta);
    let cc = c * c;
    let ss = s * s;
    let cs = c * s;

    Matrix3::new(
        cc, ss, 2.0 * cs,
        ss, cc, -2.0 * cs,
        -cs, cs, cc - ss,
    )
}
