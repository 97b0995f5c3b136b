//! Monte Carlo estimation for two-stage grouped mean-deviation tests
//!
//! This crate estimates, by simulation, the conditional probability that a
//! fine-grained grouped deviation test is violated given that a coarse one
//! passed. Each draw consists of two uniform vectors `x, y` in `[0,1]^N` and
//! two uniform scalar bounds `b_x, b_y`; draws with `b_y > b_x` define a
//! per-draw threshold `d = b_y - b_x` and proceed through two tests built on
//! [`deviation_core::partition`]:
//!
//! 1. **Coarse test** - every coarse group must satisfy
//!    `|mean(x) - mean(y)| <= d`;
//! 2. **Fine test** - a violation occurs when at least one fine group has
//!    `|mean(x) - mean(y)| >= d`.
//!
//! The estimator reports the violation frequency among coarse-valid draws
//! together with the coarse-valid count.
//!
//! # Example
//!
//! ```rust
//! use deviation_sim::DeviationSimulator;
//!
//! let result = DeviationSimulator::new(50_000, 10, 2, 10)
//!     .with_seed(7)
//!     .run()
//!     .unwrap();
//!
//! assert!(result.has_support());
//! assert!((0.0..=1.0).contains(&result.probability));
//! ```
//!
//! All comparisons are plain `f64` comparisons with no tolerance: a draw
//! sitting exactly on the threshold is coarse-valid (via `<=`) and a fine
//! violation (via `>=`) at the same time.

mod batch;
mod simulate;
mod types;

// Re-exports
pub use batch::SampleBatch;
pub use simulate::{estimate, DeviationSimulator};
pub use types::Estimate;
