//! Initial wavefield evaluation for the seismic wave solver.

pub mod initial_field;

pub use initial_field::{InitialField, NUM_QUANTITIES, Planarwave};
