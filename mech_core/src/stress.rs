//! # Stress
//!
//! Stress binds the generic state pair to [`Pressure`]: components carry a
//! [`PressureUnit`] and near-zero checks use [`Pressure`]'s tolerance.
//!
//! ## Example
//!
//! ```rust
//! use mech_core::stress::Stress;
//! use mech_core::units::{Pressure, PressureUnit};
//!
//! let stress = Stress::from_values(80.0, -20.0, 30.0, 0.0, PressureUnit::Megapascal);
//! let principal = stress.to_principal();
//!
//! println!("{:.2}", principal);
//! assert!(principal.s1() > Pressure::megapascals(85.0));
//! assert!(stress.von_mises().value() > 0.0);
//! ```

use crate::principal_state::PrincipalState;
use crate::state::State;
use crate::units::{Pressure, PressureUnit};

/// Planar stress state
pub type Stress = State<Pressure>;

/// Principal stresses
pub type PrincipalStress = PrincipalState<Pressure>;

impl State<Pressure> {
    /// Stress from components given in `unit`, horizontal frame.
    pub fn horizontal(x: f64, y: f64, xy: f64, unit: PressureUnit) -> Self {
        Self::from_values(x, y, xy, 0.0, unit)
    }

    /// Mean in-plane normal stress ½(σx + σy), the center of Mohr's circle.
    pub fn mean_normal(&self) -> Pressure {
        Pressure::new(self.mohr_circle().center, self.unit())
    }

    /// Plane-stress von Mises equivalent stress
    /// `√(σx² − σx·σy + σy² + 3τxy²)`.
    pub fn von_mises(&self) -> Pressure {
        let v = self.components();
        let squared = v.x * v.x - v.x * v.y + v.y * v.y + 3.0 * v.xy * v.xy;
        Pressure::new(squared.max(0.0).sqrt(), self.unit())
    }
}

impl PrincipalState<Pressure> {
    /// Plane-stress von Mises equivalent stress `√(σ1² − σ1·σ2 + σ2²)`.
    pub fn von_mises(&self) -> Pressure {
        let (s1, s2) = self.values();
        let squared = s1 * s1 - s1 * s2 + s2 * s2;
        Pressure::new(squared.max(0.0).sqrt(), self.unit())
    }
}
