//! Core types for grouped mean-deviation testing
//!
//! This crate provides the foundation the simulation layer builds on: a
//! deterministic partition of coordinate indices into contiguous groups, and
//! the per-group mean-gap statistic evaluated over that partition.
//!
//! # Overview
//!
//! A grouped deviation test averages two vectors over blocks of coordinates
//! and compares the block means against a per-sample threshold. The blocks
//! are produced by [`partition`], which splits `0..dimension` into a given
//! number of contiguous, disjoint groups; [`GroupSet`] owns the resulting
//! ranges and evaluates the statistic.
//!
//! # Example
//!
//! ```rust
//! use deviation_core::partition;
//!
//! // 5 coordinates into 2 groups: [0,2), [2,4) plus a remainder group [4,5)
//! let groups = partition(5, 2).unwrap();
//! assert_eq!(groups.group_count(), 3);
//!
//! let x = [0.2, 0.4, 0.6, 0.8, 1.0];
//! let y = [0.1, 0.5, 0.7, 0.7, 0.2];
//! // Largest |mean(x) - mean(y)| over the three groups
//! assert!(groups.max_mean_gap(&x, &y) <= 1.0);
//! ```

pub mod error;
pub mod partition;

// Re-export core types
pub use error::{Error, Result};
pub use partition::{partition, GroupSet};
