/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Median filter options
//!
//! All tunables of the filter are put into one [`MedianOptions`] so the
//! same configuration can be reused across images and radii.
use crate::errors::FilterErrors;
use crate::log::warn;

/// Number of children each histogram bucket splits into
///
/// The histogram covers the 16 bit value range with levels of
/// `N, N^2, ... 65536` buckets, so only powers of two that reach 65536
/// exactly are accepted.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct BranchingFactor(u32);

impl BranchingFactor {
    /// Every accepted branching factor
    pub const SUPPORTED: [u32; 5] = [2, 4, 16, 256, 65536];

    /// Sixteen buckets per node, four levels
    pub const DEFAULT: BranchingFactor = BranchingFactor(16);

    /// Validate a branching factor
    ///
    /// # Errors
    /// [`FilterErrors::InvalidBranchingFactor`] if `factor` isn't one of
    /// [`SUPPORTED`](Self::SUPPORTED)
    pub fn new(factor: u32) -> Result<BranchingFactor, FilterErrors> {
        if Self::SUPPORTED.contains(&factor) {
            Ok(BranchingFactor(factor))
        } else {
            Err(FilterErrors::InvalidBranchingFactor(factor))
        }
    }

    /// Accept any branching factor, replacing unsupported ones with 16
    ///
    /// The substitution is logged as a warning.
    #[must_use]
    pub fn coerce(factor: u32) -> BranchingFactor {
        match BranchingFactor::new(factor) {
            Ok(branching) => branching,
            Err(_) => {
                warn!(
                    "Unsupported branching factor {}, falling back to {}",
                    factor,
                    Self::DEFAULT.get()
                );
                Self::DEFAULT
            }
        }
    }

    /// The branching factor as a plain number
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// `log2(N)`, the shift that moves a key one level up
    #[must_use]
    pub const fn shift(self) -> u32 {
        self.0.trailing_zeros()
    }

    /// Number of histogram levels for this factor
    #[must_use]
    pub const fn levels(self) -> usize {
        (16 / self.shift()) as usize
    }
}

impl Default for BranchingFactor {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Median filter options
///
/// # Example
/// ```
/// use hmf_core::options::MedianOptions;
/// let options = MedianOptions::new(3).set_branching(256).set_threads(2);
/// assert_eq!(options.get_radius(), 3);
/// assert_eq!(options.branching_factor().unwrap().levels(), 2);
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct MedianOptions {
    /// Half width of the square window, the window is `2*radius+1` wide
    ///
    /// - Default value: 1
    radius:           usize,
    /// Requested histogram branching factor
    ///
    /// - Default value: 16
    branching:        u32,
    /// Whether an unsupported branching factor is an error (`true`)
    /// or replaced with 16 (`false`)
    ///
    /// - Default value: true
    strict_branching: bool,
    /// Number of worker threads, 0 picks one less than the number of cores
    ///
    /// - Default value: 0
    threads:          usize
}

impl Default for MedianOptions {
    fn default() -> Self {
        Self {
            radius:           1,
            branching:        BranchingFactor::DEFAULT.get(),
            strict_branching: true,
            threads:          0
        }
    }
}

impl MedianOptions {
    /// Default options with the given radius
    #[must_use]
    pub fn new(radius: usize) -> MedianOptions {
        MedianOptions::default().set_radius(radius)
    }

    #[must_use]
    pub const fn get_radius(&self) -> usize {
        self.radius
    }

    #[must_use]
    pub const fn get_branching(&self) -> u32 {
        self.branching
    }

    #[must_use]
    pub const fn get_strict_branching(&self) -> bool {
        self.strict_branching
    }

    #[must_use]
    pub const fn get_threads(&self) -> usize {
        self.threads
    }

    #[must_use]
    pub fn set_radius(mut self, radius: usize) -> Self {
        self.radius = radius;
        self
    }

    #[must_use]
    pub fn set_branching(mut self, branching: u32) -> Self {
        self.branching = branching;
        self
    }

    #[must_use]
    pub fn set_strict_branching(mut self, yes: bool) -> Self {
        self.strict_branching = yes;
        self
    }

    #[must_use]
    pub fn set_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Resolve the requested branching factor
    ///
    /// # Errors
    /// [`FilterErrors::InvalidBranchingFactor`] in strict mode when the
    /// factor is unsupported
    pub fn branching_factor(&self) -> Result<BranchingFactor, FilterErrors> {
        if self.strict_branching {
            BranchingFactor::new(self.branching)
        } else {
            Ok(BranchingFactor::coerce(self.branching))
        }
    }
}
