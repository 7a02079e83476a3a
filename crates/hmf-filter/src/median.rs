/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Median filter entry points
//!
//! Median returns a new image in which each pixel is the median of its neighbors.
//! The parameter radius corresponds to the radius of the neighbor area to be searched,
//! for example a radius of R will result in a search window length of 2R+1 for each dimension.
//!
//! Windows are clamped at the image border (no padding), a border pixel takes the
//! middle element (index `count/2`) of the neighbours that exist.
//!
//! ## Supported depths
//! - 16 bit single channel images only, see [`PixelLayout`](hmf_core::layout::PixelLayout)
use std::sync::atomic::{AtomicUsize, Ordering};

use hmf_core::errors::FilterErrors;
use hmf_core::image::Image16;
use hmf_core::log::trace;
use hmf_core::options::{BranchingFactor, MedianOptions};
use hmf_core::view::{ImageView, ImageViewMut, RowBand, Sample};

use crate::dispatch::{executor_for, RowExecutor};
use crate::window::WindowMedianFilter;

/// A median filter operation
///
/// # Example
/// ```
/// use hmf_core::image::Image16;
/// use hmf_core::options::MedianOptions;
/// use hmf_filter::median::MedianBlur;
///
/// let noisy = Image16::from_fn(32, 32, |x, y| if (x + y) % 7 == 0 { u16::MAX } else { 100 });
/// let mut clean = Image16::default();
///
/// let filter = MedianBlur::new_with_options(MedianOptions::new(1).set_threads(2));
/// filter.execute(&noisy.view(), &mut clean).unwrap();
/// assert_eq!(clean.get(10, 10), 100);
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct MedianBlur {
    options: MedianOptions
}

impl MedianBlur {
    /// Median filter with a window `2*radius+1` wide and default options
    #[must_use]
    pub fn new(radius: usize) -> MedianBlur {
        MedianBlur {
            options: MedianOptions::new(radius)
        }
    }

    #[must_use]
    pub fn new_with_options(options: MedianOptions) -> MedianBlur {
        MedianBlur { options }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        "Median Blur"
    }

    #[must_use]
    pub const fn options(&self) -> &MedianOptions {
        &self.options
    }

    /// Filter `src` into `dst`, resizing `dst` to match `src` if needed
    ///
    /// Rows are spread over the executor chosen by
    /// [`MedianOptions::get_threads`].
    ///
    /// # Errors
    /// - [`FilterErrors::EmptyImage`] if `src` has no pixels
    /// - [`FilterErrors::InvalidRadius`] if the radius is zero
    /// - [`FilterErrors::InvalidBranchingFactor`] for an unsupported factor in strict mode
    ///
    /// `dst` is left untouched on error.
    pub fn execute(&self, src: &ImageView, dst: &mut Image16) -> Result<(), FilterErrors> {
        let branching = self.validate(src)?;
        let (width, height) = src.dimensions();

        dst.resize(width, height);

        let executor = executor_for(self.options.get_threads());
        self.run(src, dst.view_mut(), executor.as_ref(), branching);
        Ok(())
    }

    /// Filter `src` into an existing view using `executor`
    ///
    /// `executor` must hand every row of `dst` to the task exactly once,
    /// rows it skips are left unwritten. Debug builds assert the coverage.
    ///
    /// # Errors
    /// Same as [`execute`](Self::execute), plus
    /// [`FilterErrors::DimensionMismatch`] if `dst` isn't the size of `src`
    pub fn execute_into(
        &self, src: &ImageView, dst: ImageViewMut, executor: &dyn RowExecutor
    ) -> Result<(), FilterErrors> {
        let branching = self.validate(src)?;

        if dst.dimensions() != src.dimensions() {
            return Err(FilterErrors::DimensionMismatch {
                expected: src.dimensions(),
                found:    dst.dimensions()
            });
        }
        self.run(src, dst, executor, branching);
        Ok(())
    }

    fn validate(&self, src: &ImageView) -> Result<BranchingFactor, FilterErrors> {
        if src.is_empty() {
            return Err(FilterErrors::EmptyImage);
        }
        let radius = self.options.get_radius();

        if radius < 1 {
            return Err(FilterErrors::InvalidRadius(radius));
        }
        self.options.branching_factor()
    }

    fn run(&self, src: &ImageView, dst: ImageViewMut, executor: &dyn RowExecutor, branching: BranchingFactor) {
        let radius = self.options.get_radius();
        let (width, height) = src.dimensions();

        trace!(
            "Running median filter on {}x{} image, radius {}, branching factor {}, {} executor with {} worker(s)",
            width,
            height,
            radius,
            branching.get(),
            executor.name(),
            executor.workers()
        );

        let covered = AtomicUsize::new(0);

        let task = |mut band: RowBand<'_>| {
            covered.fetch_add(band.height(), Ordering::Relaxed);

            let mut filter = WindowMedianFilter::new(*src, radius, branching);
            filter.process_band(&mut band);
        };
        executor.for_each_band(dst, &task);

        debug_assert_eq!(
            covered.load(Ordering::Relaxed),
            height,
            "{} executor did not hand out every destination row",
            executor.name()
        );
    }
}

/// Median filter `src` into `dst` with a window `2*radius+1` wide
///
/// `dst` is resized to the dimensions of `src` if they differ.
///
/// # Errors
/// See [`MedianBlur::execute`]
pub fn median_blur(src: &ImageView, dst: &mut Image16, radius: usize) -> Result<(), FilterErrors> {
    MedianBlur::new(radius).execute(src, dst)
}

/// Median filter a tightly packed channel into another
///
/// # Errors
/// - [`FilterErrors::BufferTooSmall`] if either channel is shorter than `width * height`
/// - everything [`MedianBlur::execute_into`] returns
pub fn median(
    in_channel: &[Sample], out_channel: &mut [Sample], radius: usize, width: usize, height: usize
) -> Result<(), FilterErrors> {
    let src = ImageView::new_contiguous(in_channel, width, height)?;
    let dst = ImageViewMut::new_contiguous(out_channel, width, height)?;

    let filter = MedianBlur::new(radius);
    let executor = executor_for(filter.options().get_threads());

    filter.execute_into(&src, dst, executor.as_ref())
}
