//! # mech_core - Planar Stress/Strain Transformation Engine
//!
//! `mech_core` provides value types and the transformation algebra for
//! two-dimensional stress and strain states: Mohr's-circle rotations,
//! principal value and angle extraction, and conversion between a state and
//! its principal representation.
//!
//! ## Design Philosophy
//!
//! - **Immutable values**: every operation returns a new state
//! - **One algebra**: stress and strain share the generic [`State`] /
//!   [`PrincipalState`] pair, differing only in their [`Quantity`]
//! - **Total functions**: degenerate inputs (zero shear, equal normals, NaN)
//!   resolve to documented defaults instead of errors
//! - **JSON-First**: all value types implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use mech_core::stress::Stress;
//! use mech_core::principal_state::PrincipalCase;
//! use mech_core::units::PressureUnit;
//!
//! let stress = Stress::from_values(0.0, 0.0, 10.0, 0.0, PressureUnit::Megapascal);
//! let principal = stress.to_principal();
//!
//! assert_eq!(principal.case(), PrincipalCase::TensionCompression);
//! assert!((principal.theta1().to_degrees() - 45.0).abs() < 1e-9);
//!
//! // and back again
//! let again = principal.to_state();
//! assert_eq!(again, stress);
//! ```
//!
//! ## Modules
//!
//! - [`transform`] - Direction cosines, rotation formula, state vectors
//! - [`principal`] - Principal values/angles and Mohr's circle
//! - [`state`] - Generic planar state
//! - [`principal_state`] - Generic principal state and case classification
//! - [`stress`] / [`strain`] - Quantity bindings
//! - [`elastic`] - Isotropic stiffness relating strain and stress
//! - [`report`] / [`settings`] - Serializable summaries and output settings
//! - [`units`] / [`quantity`] - Pressure units and the quantity capability
//! - [`errors`] - Structured error types

pub mod elastic;
pub mod errors;
pub mod principal;
pub mod principal_state;
pub mod quantity;
pub mod report;
pub mod settings;
pub mod state;
pub mod strain;
pub mod stress;
pub mod transform;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{MechError, MechResult};
pub use principal_state::{PrincipalCase, PrincipalState};
pub use quantity::{Dimensionless, Quantity};
pub use state::State;
pub use strain::{PrincipalStrain, Strain};
pub use stress::{PrincipalStress, Stress};
pub use transform::StateVector;
pub use units::{Pressure, PressureUnit};
