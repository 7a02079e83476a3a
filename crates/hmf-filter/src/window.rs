/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Row by row sliding window median
//!
//! For a radius `R` a row `y` is either
//!
//! - an edge row (`y < R` or `y >= height - R`): the window is cut
//!   vertically, every pixel goes through [`clamped_window_median`]
//! - an interior row: the first and last `R` columns are still cut
//!   horizontally and go through the same path, column `R` fills the
//!   histogram with the full `(2R+1)^2` window and every following column
//!   erases the column leaving on the left and inserts the one entering on
//!   the right.
//!
//! Rows are classified against the full image, so the result does not
//! depend on how rows are split between workers.
use hmf_core::options::BranchingFactor;
use hmf_core::view::{ImageView, RowBand, Sample};

use crate::histogram::HierarchicalHistogram;
use crate::select::clamped_window_median;

/// Per worker median state, one histogram and one scratch buffer
///
/// Create one per band of rows, it is not meant to be shared.
pub struct WindowMedianFilter<'src> {
    src:       ImageView<'src>,
    radius:    usize,
    histogram: HierarchicalHistogram,
    scratch:   Vec<Sample>
}

impl<'src> WindowMedianFilter<'src> {
    /// Create a filter reading from `src`
    ///
    /// A radius of zero is treated as one.
    #[must_use]
    pub fn new(src: ImageView<'src>, radius: usize, branching: BranchingFactor) -> Self {
        let radius = radius.max(1);
        let side = 2 * radius + 1;

        WindowMedianFilter {
            src,
            radius,
            histogram: HierarchicalHistogram::new(branching),
            scratch: Vec::with_capacity(side * side)
        }
    }

    #[must_use]
    pub const fn radius(&self) -> usize {
        self.radius
    }

    /// Filter every row of `band`
    pub fn process_band(&mut self, band: &mut RowBand<'_>) {
        for y in band.rows() {
            self.process_row(y, band.row_mut(y));
        }
    }

    /// Filter source row `y` into `out`
    ///
    /// # Panics
    /// If `y` is outside the source or `out` is not exactly one row wide
    pub fn process_row(&mut self, y: usize, out: &mut [Sample]) {
        let (width, height) = self.src.dimensions();
        let radius = self.radius;

        assert!(y < height, "row {y} outside source of height {height}");
        assert_eq!(out.len(), width, "destination row has the wrong width");

        let edge_row = y < radius || y + radius >= height;
        // narrower than one window, nothing to slide
        let too_narrow = width < 2 * radius + 1;

        if edge_row || too_narrow {
            self.clamped_span(y, 0..width, out);
            return;
        }

        self.clamped_span(y, 0..radius, out);

        self.fill_histogram(radius, y);
        out[radius] = self.current_median();

        for x in radius + 1..width - radius {
            self.slide_histogram(x, y);
            out[x] = self.current_median();
        }

        self.clamped_span(y, width - radius..width, out);
    }

    fn clamped_span(&mut self, y: usize, columns: std::ops::Range<usize>, out: &mut [Sample]) {
        for x in columns {
            out[x] = clamped_window_median(&self.src, x, y, self.radius, &mut self.scratch);
        }
    }

    /// Reset the histogram to the full window centred on `(x, y)`
    fn fill_histogram(&mut self, x: usize, y: usize) {
        let radius = self.radius;
        self.histogram.clear();

        for yy in y - radius..=y + radius {
            for &value in &self.src.row(yy)[x - radius..=x + radius] {
                self.histogram.insert(value);
            }
        }
    }

    /// Move the window centred on `(x - 1, y)` one column right
    fn slide_histogram(&mut self, x: usize, y: usize) {
        let radius = self.radius;
        let leaving = x - radius - 1;
        let entering = x + radius;

        for yy in y - radius..=y + radius {
            let row = self.src.row(yy);

            self.histogram.erase(row[leaving]);
            self.histogram.insert(row[entering]);
        }
    }

    #[inline]
    fn current_median(&self) -> Sample {
        // never empty here, the window was just filled
        self.histogram.median().unwrap_or_default()
    }
}
