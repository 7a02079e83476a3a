/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Running a row task over bands of the destination
//!
//! The median filter only needs "call this once per band of rows". How the
//! calls are scheduled is up to a [`RowExecutor`], the filter never touches
//! threads itself.
//!
//! Bands are disjoint so tasks never share a destination row, the source is
//! only read.
use std::ops::Range;

#[cfg(feature = "threads")]
use hmf_core::log::trace;
use hmf_core::view::{ImageViewMut, RowBand};

/// A task run once per band of rows
pub type RowTask<'a, 'dst> = dyn Fn(RowBand<'dst>) + Sync + 'a;

/// Something that can run a row task over the bands of an image
pub trait RowExecutor {
    /// Name used in log messages
    fn name(&self) -> &'static str;

    /// Upper bound on how many bands are processed at the same time
    fn workers(&self) -> usize;

    /// Split `dst` into bands and call `task` once per band
    ///
    /// Every row of `dst` must be handed to exactly one call before this
    /// returns.
    fn for_each_band<'dst>(&self, dst: ImageViewMut<'dst>, task: &RowTask<'_, 'dst>);
}

/// Split `0..height` into at most `parts` contiguous ranges
///
/// Range lengths differ by at most one, the longer ones come first.
/// Empty ranges are never returned.
///
/// # Example
/// ```
/// use hmf_filter::dispatch::split_rows;
/// assert_eq!(split_rows(10, 3), vec![0..4, 4..7, 7..10]);
/// assert_eq!(split_rows(2, 8), vec![0..1, 1..2]);
/// ```
#[must_use]
pub fn split_rows(height: usize, parts: usize) -> Vec<Range<usize>> {
    let parts = parts.clamp(1, height.max(1));
    let base = height / parts;
    let extra = height % parts;

    let mut ranges = Vec::with_capacity(parts);
    let mut start = 0;

    for part in 0..parts {
        let len = base + usize::from(part < extra);
        if len == 0 {
            continue;
        }
        ranges.push(start..start + len);
        start += len;
    }
    ranges
}

/// Number of workers to use when the caller doesn't say
///
/// One less than the available parallelism, leaving a core for the
/// calling thread, but never less than one.
#[must_use]
pub fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(std::num::NonZeroUsize::get)
        .unwrap_or(1)
        .saturating_sub(1)
        .max(1)
}

/// Runs every band on the calling thread, top to bottom
#[derive(Copy, Clone, Debug, Default)]
pub struct SerialExecutor;

impl RowExecutor for SerialExecutor {
    fn name(&self) -> &'static str {
        "serial"
    }

    fn workers(&self) -> usize {
        1
    }

    fn for_each_band<'dst>(&self, dst: ImageViewMut<'dst>, task: &RowTask<'_, 'dst>) {
        let height = dst.height();

        for band in dst.into_bands(&[0..height]) {
            task(band);
        }
    }
}

/// Runs one band per thread inside a [`std::thread::scope`]
///
/// The image is cut into `threads` bands of nearly equal height, each
/// processed on its own scoped thread, and the call returns once all have
/// finished.
#[cfg(feature = "threads")]
#[derive(Copy, Clone, Debug)]
pub struct ScopedThreadExecutor {
    threads: usize
}

#[cfg(feature = "threads")]
impl ScopedThreadExecutor {
    /// Use `threads` workers, zero is treated as one
    #[must_use]
    pub fn new(threads: usize) -> ScopedThreadExecutor {
        ScopedThreadExecutor {
            threads: threads.max(1)
        }
    }

    /// Use [`default_workers`] workers
    #[must_use]
    pub fn with_available_parallelism() -> ScopedThreadExecutor {
        ScopedThreadExecutor::new(default_workers())
    }
}

#[cfg(feature = "threads")]
impl RowExecutor for ScopedThreadExecutor {
    fn name(&self) -> &'static str {
        "scoped threads"
    }

    fn workers(&self) -> usize {
        self.threads
    }

    fn for_each_band<'dst>(&self, dst: ImageViewMut<'dst>, task: &RowTask<'_, 'dst>) {
        let ranges = split_rows(dst.height(), self.threads);
        let mut bands = dst.into_bands(&ranges);

        if bands.len() <= 1 {
            // not worth a thread
            if let Some(band) = bands.pop() {
                task(band);
            }
            return;
        }
        trace!("Spawning {} threads for {} bands", bands.len(), ranges.len());

        std::thread::scope(|s| {
            for band in bands {
                s.spawn(move || task(band));
            }
        });
    }
}

/// Pick an executor for a requested thread count
///
/// `0` means [`default_workers`], `1` (or building without the `threads`
/// feature) runs serially.
#[must_use]
pub fn executor_for(threads: usize) -> Box<dyn RowExecutor + Sync> {
    #[cfg(feature = "threads")]
    {
        let threads = if threads == 0 { default_workers() } else { threads };

        if threads > 1 {
            return Box::new(ScopedThreadExecutor::new(threads));
        }
    }
    #[cfg(not(feature = "threads"))]
    {
        let _ = threads;
    }
    Box::new(SerialExecutor)
}
