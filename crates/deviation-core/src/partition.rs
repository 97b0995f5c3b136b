//! Even partitioning of coordinate indices into contiguous groups
//!
//! A grouped deviation test never looks at single coordinates; it averages
//! over blocks of them. This module produces those blocks: `partition(n, k)`
//! splits the index range `0..n` into `k` regular groups of equal width plus,
//! when the division is inexact, one trailing remainder group.

use crate::error::{Error, Result};
use std::ops::Range;

/// An ordered set of disjoint, contiguous index ranges covering `0..dimension`.
///
/// Constructed by [`partition`]; immutable afterwards. The ranges appear in
/// ascending index order, never overlap, and jointly cover every index
/// exactly once. Group count is between 1 and `groups + 1`:
///
/// - `partition(4, 2)` yields `[0,2), [2,4)` - exact division
/// - `partition(5, 2)` yields `[0,2), [2,4), [4,5)` - remainder group
/// - `partition(3, 5)` yields `[0,3)` - zero-width regular groups are
///   dropped, leaving only the remainder group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSet {
    dimension: usize,
    ranges: Vec<Range<usize>>,
}

impl GroupSet {
    /// Number of coordinates covered by this partition
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of groups in the partition
    pub fn group_count(&self) -> usize {
        self.ranges.len()
    }

    /// The index ranges, in ascending order
    pub fn ranges(&self) -> &[Range<usize>] {
        &self.ranges
    }

    /// Iterate over the index ranges
    pub fn iter(&self) -> impl Iterator<Item = &Range<usize>> {
        self.ranges.iter()
    }

    /// Per-group absolute difference of means, `|mean(x[g]) - mean(y[g])|`.
    ///
    /// Both slices must have length [`dimension`](Self::dimension); groups are
    /// non-empty by construction, so each mean is well defined.
    pub fn mean_gaps<'a>(
        &'a self,
        x: &'a [f64],
        y: &'a [f64],
    ) -> impl Iterator<Item = f64> + 'a {
        debug_assert_eq!(x.len(), self.dimension);
        debug_assert_eq!(y.len(), self.dimension);
        self.ranges.iter().map(move |g| {
            let width = g.len() as f64;
            let mx: f64 = x[g.clone()].iter().sum::<f64>() / width;
            let my: f64 = y[g.clone()].iter().sum::<f64>() / width;
            (mx - my).abs()
        })
    }

    /// Largest per-group mean gap.
    ///
    /// Because the gap statistic is compared against a single threshold `d`,
    /// `max_mean_gap(x, y) <= d` holds iff every group satisfies the bound,
    /// and `max_mean_gap(x, y) >= d` holds iff at least one group meets or
    /// exceeds it. Both test stages reduce to this one value.
    pub fn max_mean_gap(&self, x: &[f64], y: &[f64]) -> f64 {
        // At least one group exists, so the fold never returns the seed.
        self.mean_gaps(x, y).fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Evenly partition indices `0..dimension` into `groups` contiguous groups.
///
/// With `base = dimension / groups`, regular group `i` spans
/// `[i * base, (i + 1) * base)` and is emitted only when non-empty; when the
/// division leaves a remainder, one extra group covers the trailing
/// `dimension % groups` indices. Oversized `groups` collapse: with
/// `groups > dimension` every regular group is empty and the whole range
/// lands in the remainder group.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] when `dimension` or `groups` is zero;
/// the integer arithmetic above has no meaning for either.
///
/// # Examples
///
/// ```rust
/// use deviation_core::partition;
///
/// let groups = partition(5, 2).unwrap();
/// assert_eq!(groups.ranges(), &[0..2, 2..4, 4..5]);
/// ```
pub fn partition(dimension: usize, groups: usize) -> Result<GroupSet> {
    if dimension == 0 {
        return Err(Error::non_positive("dimension", dimension));
    }
    if groups == 0 {
        return Err(Error::non_positive("groups", groups));
    }

    let base = dimension / groups;
    let remainder = dimension % groups;

    let mut ranges = Vec::with_capacity(groups + 1);

    // Regular groups; zero-width spans occur when groups > dimension and
    // are skipped rather than emitted empty.
    for i in 0..groups {
        let (start, end) = (i * base, (i + 1) * base);
        if end > start {
            ranges.push(start..end);
        }
    }

    // Leftover indices form one trailing group.
    if remainder > 0 {
        ranges.push(groups * base..dimension);
    }

    Ok(GroupSet { dimension, ranges })
}
