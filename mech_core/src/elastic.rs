//! # Isotropic Linear Elasticity
//!
//! Relates a [`Strain`] to a [`Stress`] through the plane stiffness matrix of
//! an isotropic material. Both directions follow the same steps:
//!
//! 1. bring the input state to the horizontal frame,
//! 2. multiply its component vector by the 3×3 stiffness (or compliance) matrix,
//! 3. wrap the result vector back into a state,
//! 4. turn it back to the input's orientation.
//!
//! Shear strain is tensorial (`εxy`), so the shear terms of the matrices
//! carry `2G` rather than `G`.
//!
//! ## Example
//!
//! ```rust
//! use mech_core::elastic::{IsotropicElastic, PlaneCondition};
//! use mech_core::strain::Strain;
//! use mech_core::units::{Pressure, PressureUnit};
//!
//! let steel = IsotropicElastic::new(
//!     Pressure::new(200.0, PressureUnit::Gigapascal),
//!     0.3,
//!     PlaneCondition::PlaneStress,
//! ).unwrap();
//!
//! let strain = Strain::strain(1e-3, 0.0, 0.0, 0.0);
//! let stress = steel.stress_from_strain(&strain).to_unit(PressureUnit::Megapascal);
//! assert!((stress.x().value() - 219.78).abs() < 0.01);
//! ```

use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

use crate::errors::{MechError, MechResult};
use crate::quantity::Dimensionless;
use crate::strain::Strain;
use crate::stress::Stress;
use crate::transform::StateVector;
use crate::units::Pressure;

/// Out-of-plane idealization of a planar problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PlaneCondition {
    /// Thin plate: σz = 0
    #[default]
    PlaneStress,
    /// Thick body: εz = 0
    PlaneStrain,
}

/// Isotropic linear-elastic material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IsotropicElastic {
    modulus: Pressure,
    poisson: f64,
    condition: PlaneCondition,
}

impl IsotropicElastic {
    /// Create a material, validating `E > 0` and `−1 < ν < 0.5`.
    pub fn new(modulus: Pressure, poisson: f64, condition: PlaneCondition) -> MechResult<Self> {
        if !modulus.value().is_finite() || modulus.value() <= 0.0 {
            return Err(MechError::invalid_input(
                "modulus",
                modulus.to_string(),
                "Young's modulus must be positive and finite",
            ));
        }
        if !poisson.is_finite() || poisson <= -1.0 || poisson >= 0.5 {
            return Err(MechError::invalid_input(
                "poisson",
                poisson.to_string(),
                "Poisson's ratio must lie in (-1, 0.5)",
            ));
        }

        Ok(Self {
            modulus,
            poisson,
            condition,
        })
    }

    /// Young's modulus
    pub fn modulus(&self) -> Pressure {
        self.modulus
    }

    /// Poisson's ratio
    pub fn poisson(&self) -> f64 {
        self.poisson
    }

    /// Plane stress or plane strain idealization
    pub fn condition(&self) -> PlaneCondition {
        self.condition
    }

    /// Shear modulus `G = E / 2(1 + ν)`
    pub fn shear_modulus(&self) -> Pressure {
        self.modulus / (2.0 * (1.0 + self.poisson))
    }

    /// Stiffness matrix `D` with `[σx, σy, σxy] = D · [εx, εy, εxy]`, in the
    /// modulus unit.
    #[rustfmt::skip]
    pub fn stiffness_matrix(&self) -> Matrix3<f64> {
        let e = self.modulus.value();
        let nu = self.poisson;

        match self.condition {
            PlaneCondition::PlaneStress => {
                let k = e / (1.0 - nu * nu);
                Matrix3::new(
                    k,      k * nu, 0.0,
                    k * nu, k,      0.0,
                    0.0,    0.0,    k * (1.0 - nu),
                )
            }
            PlaneCondition::PlaneStrain => {
                let k = e / ((1.0 + nu) * (1.0 - 2.0 * nu));
                Matrix3::new(
                    k * (1.0 - nu), k * nu,         0.0,
                    k * nu,         k * (1.0 - nu), 0.0,
                    0.0,            0.0,            k * (1.0 - 2.0 * nu),
                )
            }
        }
    }

    /// Compliance matrix `C = D⁻¹`, in inverse modulus units.
    #[rustfmt::skip]
    pub fn compliance_matrix(&self) -> Matrix3<f64> {
        let e = self.modulus.value();
        let nu = self.poisson;

        match self.condition {
            PlaneCondition::PlaneStress => {
                let k = 1.0 / e;
                Matrix3::new(
                    k,       -k * nu, 0.0,
                    -k * nu, k,       0.0,
                    0.0,     0.0,     k * (1.0 + nu),
                )
            }
            PlaneCondition::PlaneStrain => {
                let k = (1.0 + nu) / e;
                Matrix3::new(
                    k * (1.0 - nu), -k * nu,        0.0,
                    -k * nu,        k * (1.0 - nu), 0.0,
                    0.0,            0.0,            k,
                )
            }
        }
    }

    /// Stress produced by `strain`, in the modulus unit and the strain's orientation.
    pub fn stress_from_strain(&self, strain: &Strain) -> Stress {
        let horizontal = strain.to_horizontal();
        let sigma = StateVector::from(self.stiffness_matrix() * horizontal.to_vector());
        Stress::from_vector(sigma, 0.0, self.modulus.unit()).transform(strain.theta_x())
    }

    /// Strain produced by `stress`, in the stress's orientation.
    pub fn strain_from_stress(&self, stress: &Stress) -> Strain {
        let horizontal = stress.to_horizontal().to_unit(self.modulus.unit());
        let epsilon = StateVector::from(self.compliance_matrix() * horizontal.to_vector());
        Strain::from_vector(epsilon, 0.0, Dimensionless).transform(stress.theta_x())
    }
}
