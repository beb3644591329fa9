//! Uniformly spaced weight vectors for multi-objective optimization.
//!
//! Every weight vector is a point of the unit simplex whose coordinates are
//! multiples of `1 / (divisions - 1)`. They are enumerated with an odometer
//! walk over all digit vectors, normalized and written as `W{obj}D_{n}.dat`
//! files for decomposition based optimizers to pick up.

pub mod config;
pub mod dat;
mod error;
pub mod io_utils;
pub mod logging;
pub mod odometer;
pub mod weights;

pub use config::GeneratorConfig;
pub use error::WeightError;
pub use odometer::{composition_count, compositions, Odometer};
pub use weights::{generate, generate_with_progress, WeightMatrix};
