/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A multi level counting histogram over 16 bit values
//!
//! Level `k` has `N^(k+1)` buckets, the finest level has one bucket per
//! possible value. A value `v` lands in bucket `v >> (shift * (depth-1-k))`
//! of level `k`, so every bucket counts the values sharing a prefix and is
//! the sum of its `N` children one level down.
//!
//! Finding the `k`th smallest value walks down the levels, scanning at most
//! `N` buckets per level, instead of scanning all 65536 counts.
//!
//! All levels live in one allocation, coarsest first.
use std::fmt::{Debug, Formatter};

use hmf_core::options::BranchingFactor;

/// Deepest histogram, reached with a branching factor of 2
const MAX_LEVELS: usize = 16;

/// Number of distinct 16 bit values, the size of the finest level
const VALUE_RANGE: usize = 1 << 16;

#[derive(Copy, Clone, Default)]
struct Level {
    offset: usize,
    len:    usize
}

/// Counting histogram with `O(levels)` insert, erase and median
///
/// # Example
/// ```
/// use hmf_core::options::BranchingFactor;
/// use hmf_filter::histogram::HierarchicalHistogram;
///
/// let mut histogram = HierarchicalHistogram::new(BranchingFactor::DEFAULT);
/// for value in [900, 3, 65535, 41, 7] {
///     histogram.insert(value);
/// }
/// assert_eq!(histogram.median(), Some(41));
///
/// histogram.erase(900);
/// // even count: the upper of the two middle values
/// assert_eq!(histogram.median(), Some(41));
/// ```
#[derive(Clone)]
pub struct HierarchicalHistogram {
    counts:    Vec<u32>,
    levels:    [Level; MAX_LEVELS],
    depth:     usize,
    branching: BranchingFactor,
    total:     u32
}

impl HierarchicalHistogram {
    /// Create an empty histogram with `branching` buckets per node
    #[must_use]
    pub fn new(branching: BranchingFactor) -> HierarchicalHistogram {
        let shift = branching.shift();
        let mut levels = [Level::default(); MAX_LEVELS];

        let mut depth = 0;
        let mut offset = 0;
        let mut len = branching.get() as usize;

        loop {
            levels[depth] = Level { offset, len };
            offset += len;
            depth += 1;

            if len >= VALUE_RANGE {
                break;
            }
            len <<= shift;
        }

        HierarchicalHistogram {
            counts: vec![0; offset],
            levels,
            depth,
            branching,
            total: 0
        }
    }

    /// Add one occurrence of `value`
    #[inline]
    pub fn insert(&mut self, value: u16) {
        self.total += 1;

        let shift = self.branching.shift();
        let mut key = usize::from(value);

        for level in self.levels[..self.depth].iter().rev() {
            self.counts[level.offset + key] += 1;
            key >>= shift;
        }
    }

    /// Remove one occurrence of `value`
    ///
    /// `value` must have been inserted and not yet erased, counts are not
    /// checked for underflow outside of debug builds.
    #[inline]
    pub fn erase(&mut self, value: u16) {
        debug_assert!(self.total > 0, "erase from an empty histogram");
        self.total = self.total.wrapping_sub(1);

        let shift = self.branching.shift();
        let mut key = usize::from(value);

        for level in self.levels[..self.depth].iter().rev() {
            let count = &mut self.counts[level.offset + key];
            debug_assert!(*count > 0, "erase of value {value} that was never inserted");

            *count = count.wrapping_sub(1);
            key >>= shift;
        }
    }

    /// Remove every value
    pub fn clear(&mut self) {
        self.counts.fill(0);
        self.total = 0;
    }

    /// Return the smallest value `v` such that at least `total/2 + 1`
    /// values are `<= v`
    ///
    /// For odd counts that's the median, for even counts it's the upper of
    /// the two middle values.
    ///
    /// Returns `None` if the histogram is empty.
    #[must_use]
    pub fn median(&self) -> Option<u16> {
        if self.total == 0 {
            return None;
        }
        let target = self.total / 2 + 1;

        let shift = self.branching.shift();
        let fan_out = self.branching.get() as usize;

        let mut below = 0;
        let mut index = 0;

        for (k, level) in self.levels[..self.depth].iter().enumerate() {
            if k > 0 {
                index <<= shift;
            }
            let start = level.offset + index;
            let children = &self.counts[start..start + fan_out];

            let mut step = 0;
            for &count in children {
                if below + count >= target {
                    break;
                }
                below += count;
                step += 1;
            }
            // only reachable with inconsistent counts
            index += step.min(fan_out - 1);
        }
        u16::try_from(index).ok()
    }

    /// Number of values currently held
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    #[must_use]
    pub const fn branching(&self) -> BranchingFactor {
        self.branching
    }

    /// Number of levels, coarsest to finest
    #[must_use]
    pub const fn levels(&self) -> usize {
        self.depth
    }

    /// Bucket counts of level `level`, 0 being the coarsest
    #[must_use]
    pub fn level(&self, level: usize) -> Option<&[u32]> {
        if level >= self.depth {
            return None;
        }
        let Level { offset, len } = self.levels[level];
        Some(&self.counts[offset..offset + len])
    }
}

impl Debug for HierarchicalHistogram {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HierarchicalHistogram")
            .field("branching", &self.branching.get())
            .field("levels", &self.depth)
            .field("total", &self.total)
            .finish()
    }
}
