//! Monte Carlo estimation of grouped mean-deviation test violations
//!
//! This crate is a convenience facade over the workspace members:
//!
//! 1. [`deviation_core`] - index partitioning into contiguous coordinate
//!    groups and the per-group mean-gap statistic
//! 2. [`deviation_sim`] - the simulation estimator: uniform sample batches,
//!    two-stage filtering and conditional-probability estimation
//!
//! # Example
//!
//! ```rust
//! use grouped_deviation::{estimate, DeviationSimulator};
//!
//! // Free-function form: 10_000 draws in [0,1]^8, coarse test on 2 groups,
//! // fine test on 8 groups, fixed seed.
//! let result = estimate(10_000, 8, 2, 8, Some(42)).unwrap();
//! assert!((0.0..=1.0).contains(&result.probability));
//!
//! // Builder form with an explicit seed.
//! let same = DeviationSimulator::new(10_000, 8, 2, 8)
//!     .with_seed(42)
//!     .run()
//!     .unwrap();
//! assert_eq!(result, same);
//! ```

// Re-export core types
pub use deviation_core::{partition, Error, GroupSet, Result};
pub use deviation_sim::{estimate, DeviationSimulator, Estimate, SampleBatch};
