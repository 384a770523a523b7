//! # Strain
//!
//! Strain binds the generic state pair to plain dimensionless `f64` values.
//!
//! The shear component is the tensorial shear strain `εxy = γxy / 2`, so the
//! same Mohr's-circle rotation applies as for stress. Use
//! [`Strain::from_engineering`] and [`Strain::engineering_shear`] when working
//! with engineering shear strain γxy.
//!
//! ## Example
//!
//! ```rust
//! use mech_core::strain::Strain;
//!
//! // rosette reading: εx = 600µ, εy = −200µ, γxy = 400µ
//! let strain = Strain::from_engineering(600e-6, -200e-6, 400e-6, 0.0);
//! assert!((strain.xy() - 200e-6).abs() < 1e-15);
//!
//! let principal = strain.to_principal();
//! assert!(principal.s1() > 600e-6);
//! ```

use crate::principal_state::PrincipalState;
use crate::quantity::Dimensionless;
use crate::state::State;

/// Planar strain state (dimensionless, tensorial shear)
pub type Strain = State<f64>;

/// Principal strains
pub type PrincipalStrain = PrincipalState<f64>;

impl State<f64> {
    /// Strain from tensorial components.
    pub fn strain(x: f64, y: f64, xy: f64, theta_x: f64) -> Self {
        Self::from_values(x, y, xy, theta_x, Dimensionless)
    }

    /// Strain from normal strains and engineering shear strain `γxy = 2·εxy`.
    pub fn from_engineering(x: f64, y: f64, gamma_xy: f64, theta_x: f64) -> Self {
        Self::strain(x, y, 0.5 * gamma_xy, theta_x)
    }

    /// Engineering shear strain `γxy = 2·εxy`
    pub fn engineering_shear(&self) -> f64 {
        2.0 * self.xy()
    }

    /// In-plane areal (volumetric) strain `εx + εy`, invariant under rotation
    pub fn volumetric(&self) -> f64 {
        self.x() + self.y()
    }
}

impl PrincipalState<f64> {
    /// Maximum engineering shear strain `γmax = ε1 − ε2`
    pub fn max_engineering_shear(&self) -> f64 {
        let (s1, s2) = self.values();
        s1 - s2
    }
}
