//! Material-model layer for the seismic wave solver.
//!
//! This crate defines how an anisotropic elastic medium is represented
//! (a symmetric 6×6 Voigt stiffness matrix plus density), rotated between
//! coordinate frames, expanded into the full 4th-order elasticity tensor,
//! and used to bound wave speeds for time-step selection.
//!
//! All operations are pure functions over `Copy` value types and are safe to
//! invoke concurrently. Physically invalid input (non-positive density,
//! non-PSD stiffness) is not checked and propagates as NaN per the numeric
//! contract; `AnisotropicMaterial::is_physically_valid` exists for test
//! suites that want to assert preconditions.

pub mod anisotropic;
pub mod elastic;
pub mod kernels;
pub mod sampling;
pub mod tensor;
pub mod timestep;
pub mod transform;

pub use anisotropic::{AnisotropicMaterial, WaveSpeedConfig};
pub use elastic::ElasticMaterial;
pub use kernels::christoffel;
pub use sampling::SAMPLING_DIRECTIONS;
pub use tensor::StiffnessTensor;
pub use timestep::stable_timestep;
pub use transform::rotation_operator;
