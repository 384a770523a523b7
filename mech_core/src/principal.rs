//! # Principal Values and Angles
//!
//! Closed-form Mohr's-circle decomposition of a planar tensor into its two
//! principal values and the orientation of the maximum one.
//!
//! All functions take the tolerance of the quantity being decomposed, so
//! stress and strain each use a threshold sized for their own magnitudes.
//!
//! ## Degenerate Cases
//!
//! | Input | Values | θ1 |
//! |---|---|---|
//! | all components ≈ 0 | `(0, 0)` | π/4 (default) |
//! | XY ≈ 0 | `(max(X,Y), min(X,Y))` | 0 if X ≥ Y, else π/2 |
//! | X ≈ Y, XY < 0 | Mohr's circle | −π/4 |
//! | otherwise | Mohr's circle | `π/2 − atan((X − s2)/XY)` |
//!
//! ## Example
//!
//! ```rust
//! use mech_core::principal::{calculate_principal, calculate_principal_angles};
//! use mech_core::transform::StateVector;
//!
//! let v = StateVector::new(10.0, 0.0, 5.0);
//! let (s1, s2) = calculate_principal(v, 1e-6);
//! let (theta1, _) = calculate_principal_angles(v, Some(s2), 1e-6);
//!
//! assert!((s1 - 12.071_067_811_865_476).abs() < 1e-12);
//! assert!((theta1.to_degrees() - 22.5).abs() < 1e-9);
//! ```

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use serde::{Deserialize, Serialize};

use crate::transform::{direction_cosines, is_angle_zero, rotate, StateVector};

/// Principal angle reported when the tensor has no preferred direction
pub const DEFAULT_PRINCIPAL_ANGLE: f64 = FRAC_PI_4;

/// Principal values `(s1, s2)` with `s1 ≥ s2`.
pub fn calculate_principal(v: StateVector, tolerance: f64) -> (f64, f64) {
    if v.is_zero(tolerance) {
        return (0.0, 0.0);
    }

    if v.xy.abs() < tolerance {
        return (v.x.max(v.y), v.x.min(v.y));
    }

    let circle = MohrCircle::from_vector(v);
    (circle.center + circle.radius, circle.center - circle.radius)
}

/// Principal angles `(θ1, θ2)` relative to the vector's own X axis.
///
/// θ1 is the direction of the maximum principal value; θ2 = θ1 + π/2. Pass the
/// minimum principal value as `s2` when it is already known.
pub fn calculate_principal_angles(v: StateVector, s2: Option<f64>, tolerance: f64) -> (f64, f64) {
    let theta1 = principal_angle(v, s2, tolerance);
    (theta1, FRAC_PI_2 + theta1)
}

fn principal_angle(v: StateVector, s2: Option<f64>, tolerance: f64) -> f64 {
    if v.is_zero(tolerance) {
        return DEFAULT_PRINCIPAL_ANGLE;
    }

    if v.xy.abs() < tolerance {
        return if v.x >= v.y { 0.0 } else { FRAC_PI_2 };
    }

    if (v.x - v.y).abs() < tolerance && v.xy < 0.0 {
        return -FRAC_PI_4;
    }

    let theta1 = match s2 {
        Some(s2) => FRAC_PI_2 - ((v.x - s2) / v.xy).atan(),
        // atan2 keeps the quadrant that a bare atan(2XY / (Y − X)) loses when X > Y
        None => FRAC_PI_2 - 0.5 * (2.0 * v.xy).atan2(v.y - v.x),
    };

    if theta1.is_nan() {
        log::trace!("principal angle of {:?} is NaN, using default", v);
        DEFAULT_PRINCIPAL_ANGLE
    } else {
        theta1
    }
}

/// Components in the horizontal frame of a tensor whose maximum principal
/// value `s1` acts at `theta1` from horizontal.
pub fn components_from_principal(s1: f64, s2: f64, theta1: f64) -> StateVector {
    if is_angle_zero(theta1) {
        return StateVector::new(s1, s2, 0.0);
    }

    let theta2 = FRAC_PI_2 - theta1;
    let (cos2, sin2) = direction_cosines(2.0 * theta2);
    let center = 0.5 * (s1 + s2);
    let radius = 0.5 * (s1 - s2);

    StateVector::new(center - radius * cos2, center + radius * cos2, radius * sin2)
}

/// Mohr's circle of a planar tensor.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MohrCircle {
    /// Mean normal component ½(X + Y)
    pub center: f64,
    /// Radius, equal to the maximum in-plane shear
    pub radius: f64,
}

impl MohrCircle {
    /// Circle of the given tensor components
    pub fn from_vector(v: StateVector) -> Self {
        // halve before combining so finite components near f64::MAX stay finite
        let half_diff = 0.5 * v.y - 0.5 * v.x;
        Self {
            center: 0.5 * v.x + 0.5 * v.y,
            radius: half_diff.hypot(v.xy),
        }
    }

    /// Maximum in-plane shear magnitude
    pub fn max_shear(&self) -> f64 {
        self.radius
    }

    /// Circle intercepts with the normal axis, `(center + radius, center − radius)`
    pub fn principal_values(&self) -> (f64, f64) {
        (self.center + self.radius, self.center - self.radius)
    }

    /// `(normal, shear)` acting on the plane whose normal is turned `theta`
    /// from the X axis of `v`.
    pub fn point_at(v: StateVector, theta: f64) -> (f64, f64) {
        let r = rotate(v, theta);
        (r.x, r.xy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    const TOL: f64 = 1e-6;

    #[test]
    fn test_zero_state() {
        assert_eq!(calculate_principal(StateVector::ZERO, TOL), (0.0, 0.0));
        let (t1, t2) = calculate_principal_angles(StateVector::ZERO, None, TOL);
        assert_eq!(t1, FRAC_PI_4);
        assert_eq!(t2, FRAC_PI_2 + FRAC_PI_4);
    }

    #[test]
    fn test_zero_shear_direct() {
        assert_eq!(calculate_principal(StateVector::new(5.0, 3.0, 0.0), TOL), (5.0, 3.0));
        assert_eq!(calculate_principal(StateVector::new(3.0, 5.0, 0.0), TOL), (5.0, 3.0));
        assert_eq!(calculate_principal_angles(StateVector::new(5.0, 3.0, 0.0), None, TOL).0, 0.0);
        assert_eq!(calculate_principal_angles(StateVector::new(3.0, 5.0, 0.0), None, TOL).0, FRAC_PI_2);
        // equal normals without shear keep the X axis
        assert_eq!(calculate_principal_angles(StateVector::new(4.0, 4.0, 0.0), None, TOL).0, 0.0);
    }

    #[test]
    fn test_pure_shear() {
        let (s1, s2) = calculate_principal(StateVector::new(0.0, 0.0, 7.0), TOL);
        assert_abs_diff_eq!(s1, 7.0, epsilon = 1e-12);
        assert_abs_diff_eq!(s2, -7.0, epsilon = 1e-12);

        let (t1, _) = calculate_principal_angles(StateVector::new(0.0, 0.0, 7.0), Some(s2), TOL);
        assert_abs_diff_eq!(t1, FRAC_PI_4, epsilon = 1e-12);
    }

    #[test]
    fn test_large_components_stay_finite() {
        let v = StateVector::new(1e160, -1e160, 1e160);
        let (s1, s2) = calculate_principal(v, TOL);
        let radius = 2.0_f64.sqrt() * 1e160;
        assert!(s1.is_finite() && s2.is_finite());
        assert!((s1 - radius).abs() / radius < 1e-12);
        assert!((s2 + radius).abs() / radius < 1e-12);

        let huge = StateVector::new(0.5 * f64::MAX, -0.5 * f64::MAX, 0.25 * f64::MAX);
        let circle = MohrCircle::from_vector(huge);
        assert!(circle.radius.is_finite());
        assert_eq!(circle.center, 0.0);
    }

    #[test]
    fn test_negative_pure_shear_tie_break() {
        let v = StateVector::new(3.0, 3.0, -2.0);
        let (t1, t2) = calculate_principal_angles(v, None, TOL);
        assert_eq!(t1, -FRAC_PI_4);
        assert_eq!(t2, FRAC_PI_4);

        let (s1, _) = calculate_principal(v, TOL);
        let r = rotate(v, t1);
        assert_abs_diff_eq!(r.x, s1, epsilon = 1e-12);
        assert_abs_diff_eq!(r.xy, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_angle_convention_pinned() {
        // tan 2θp = 2·XY / (X − Y) = 1 → θp = 22.5°, carrying the maximum value
        let v = StateVector::new(10.0, 0.0, 5.0);
        let (_, s2) = calculate_principal(v, TOL);
        let (t1, t2) = calculate_principal_angles(v, Some(s2), TOL);
        assert_abs_diff_eq!(t1.to_degrees(), 22.5, epsilon = 1e-9);
        assert_abs_diff_eq!(t2.to_degrees(), 112.5, epsilon = 1e-9);
    }

    #[test]
    fn test_angle_with_and_without_s2_agree() {
        let cases = [
            StateVector::new(10.0, 0.0, 5.0),
            StateVector::new(0.0, 10.0, 5.0),
            StateVector::new(10.0, 0.0, -5.0),
            StateVector::new(0.0, 10.0, -5.0),
            StateVector::new(-40.0, 25.0, 12.0),
            StateVector::new(2.0, 2.0, 9.0),
        ];
        for v in cases {
            let (_, s2) = calculate_principal(v, TOL);
            let (with_s2, _) = calculate_principal_angles(v, Some(s2), TOL);
            let (without, _) = calculate_principal_angles(v, None, TOL);
            assert_abs_diff_eq!(with_s2, without, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_principal_angle_rotates_to_maximum() {
        let cases = [
            StateVector::new(10.0, 0.0, 5.0),
            StateVector::new(0.0, 10.0, -5.0),
            StateVector::new(-40.0, 25.0, 12.0),
            StateVector::new(-1.0, -8.0, -3.0),
        ];
        for v in cases {
            let (s1, s2) = calculate_principal(v, TOL);
            let (t1, t2) = calculate_principal_angles(v, Some(s2), TOL);
            let r1 = rotate(v, t1);
            assert_abs_diff_eq!(r1.x, s1, epsilon = 1e-9);
            assert_abs_diff_eq!(r1.y, s2, epsilon = 1e-9);
            assert_abs_diff_eq!(r1.xy, 0.0, epsilon = 1e-9);
            let r2 = rotate(v, t2);
            assert_abs_diff_eq!(r2.x, s2, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_ordering() {
        let (s1, s2) = calculate_principal(StateVector::new(-5.0, 12.0, -30.0), TOL);
        assert!(s1 >= s2);
        assert_abs_diff_eq!(s1 - s2, 2.0 * MohrCircle::from_vector(StateVector::new(-5.0, 12.0, -30.0)).radius, epsilon = 1e-12);
    }

    #[test]
    fn test_components_from_principal_inverts() {
        let v = StateVector::new(-40.0, 25.0, 12.0);
        let (s1, s2) = calculate_principal(v, TOL);
        let (t1, _) = calculate_principal_angles(v, Some(s2), TOL);
        let back = components_from_principal(s1, s2, t1);
        assert!(back.max_abs_diff(&v) < 1e-9);
    }

    #[test]
    fn test_components_from_principal_axis_aligned() {
        assert_eq!(components_from_principal(8.0, 2.0, 0.0), StateVector::new(8.0, 2.0, 0.0));
        assert_eq!(components_from_principal(8.0, 2.0, FRAC_PI_2), StateVector::new(2.0, 8.0, 0.0));
        assert_eq!(components_from_principal(8.0, 2.0, PI), StateVector::new(8.0, 2.0, 0.0));
    }

    #[test]
    fn test_mohr_circle() {
        let circle = MohrCircle::from_vector(StateVector::new(10.0, 0.0, 5.0));
        assert_abs_diff_eq!(circle.center, 5.0);
        assert_abs_diff_eq!(circle.max_shear(), 50.0_f64.sqrt(), epsilon = 1e-12);
        let (s1, s2) = circle.principal_values();
        assert!(s1 > s2);

        let (normal, shear) = MohrCircle::point_at(StateVector::new(0.0, 0.0, 4.0), FRAC_PI_4);
        assert_abs_diff_eq!(normal, 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(shear, 0.0, epsilon = 1e-12);
    }
}
