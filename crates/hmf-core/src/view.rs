/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Strided views over 16 bit sample buffers
//!
//! A view is a `width x height` grid of [`Sample`]s where row `y` starts at
//! `y * stride` in the backing slice. The stride is counted in samples and
//! may be larger than the width (padded rows).
//!
//! Geometry is validated once, when the view is created. A stride that can't
//! hold a row or a backing slice that can't hold the last row is an error,
//! after that every row access is in bounds.
use alloc::vec::Vec;
use core::mem::size_of;
use core::ops::Range;

use crate::errors::FilterErrors;
use crate::layout::PixelLayout;

/// A single pixel value, and the key type of the median histogram
pub type Sample = u16;

/// Number of samples a buffer needs to hold `height` rows of `width` samples
/// spaced `stride` apart.
///
/// The last row doesn't need its padding.
fn required_len(width: usize, height: usize, stride: usize) -> usize {
    if width == 0 || height == 0 {
        return 0;
    }
    (height - 1).saturating_mul(stride).saturating_add(width)
}

fn check_geometry(len: usize, width: usize, height: usize, stride: usize) -> Result<(), FilterErrors> {
    if stride < width {
        return Err(FilterErrors::InsufficientStride { stride, width });
    }
    let expected = required_len(width, height, stride);

    if len < expected {
        return Err(FilterErrors::BufferTooSmall {
            expected,
            found: len
        });
    }
    Ok(())
}

/// Convert a stride in bytes to one in samples
fn sample_stride(stride_bytes: usize) -> Result<usize, FilterErrors> {
    if stride_bytes % size_of::<Sample>() != 0 {
        return Err(FilterErrors::UnalignedBuffer);
    }
    Ok(stride_bytes / size_of::<Sample>())
}

/// Drop a trailing odd byte, the last row never needs it
fn even_len(bytes: usize) -> usize {
    bytes & !(size_of::<Sample>() - 1)
}

/// A read only strided view of a single channel 16 bit image
#[derive(Copy, Clone, Debug)]
pub struct ImageView<'a> {
    data:   &'a [Sample],
    width:  usize,
    height: usize,
    stride: usize
}

impl<'a> ImageView<'a> {
    /// Create a view over `data` with rows `stride` samples apart
    ///
    /// # Errors
    /// - [`FilterErrors::InsufficientStride`] if `stride < width`
    /// - [`FilterErrors::BufferTooSmall`] if `data` can't hold the last row
    pub fn new(
        data: &'a [Sample], width: usize, height: usize, stride: usize
    ) -> Result<ImageView<'a>, FilterErrors> {
        check_geometry(data.len(), width, height, stride)?;

        Ok(ImageView {
            data,
            width,
            height,
            stride
        })
    }

    /// Create a view over tightly packed rows
    ///
    /// # Errors
    /// [`FilterErrors::BufferTooSmall`] if `data` is shorter than `width * height`
    pub fn new_contiguous(
        data: &'a [Sample], width: usize, height: usize
    ) -> Result<ImageView<'a>, FilterErrors> {
        ImageView::new(data, width, height, width)
    }

    /// Create a view over raw bytes laid out as described by `layout`
    ///
    /// `stride_bytes` is the distance in bytes between two rows, it must be a
    /// multiple of two and the buffer must be aligned for [`u16`] reads.
    ///
    /// # Errors
    /// - [`FilterErrors::UnsupportedFormat`] if the layout isn't single channel 16 bit
    /// - [`FilterErrors::UnalignedBuffer`] if the bytes can't be read as samples
    /// - the geometry errors of [`ImageView::new`]
    pub fn from_bytes(
        bytes: &'a [u8], layout: PixelLayout, width: usize, height: usize, stride_bytes: usize
    ) -> Result<ImageView<'a>, FilterErrors> {
        layout.ensure_supported()?;
        let stride = sample_stride(stride_bytes)?;

        let data: &[Sample] = bytemuck::try_cast_slice(&bytes[..even_len(bytes.len())])
            .map_err(|_| FilterErrors::UnalignedBuffer)?;

        ImageView::new(data, width, height, stride)
    }

    /// Views built internally from buffers already known to fit
    pub(crate) fn from_parts(data: &'a [Sample], width: usize, height: usize) -> ImageView<'a> {
        debug_assert!(data.len() >= width * height);
        ImageView {
            data,
            width,
            height,
            stride: width
        }
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Distance between two rows, in samples
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Return `(width, height)`
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Whether the view has no pixels
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The `width` samples of row `y`
    ///
    /// # Panics
    /// If `y >= height`
    #[inline]
    #[must_use]
    pub fn row(&self, y: usize) -> &'a [Sample] {
        assert!(y < self.height, "row {y} out of bounds for height {}", self.height);
        let start = y * self.stride;
        &self.data[start..start + self.width]
    }

    /// Sample at column `x`, row `y`
    ///
    /// # Panics
    /// If the coordinate is outside the view
    #[inline]
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Sample {
        self.row(y)[x]
    }

    /// Iterate over rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &'a [Sample]> + '_ {
        (0..self.height).map(move |y| self.row(y))
    }

    /// Copy the visible samples into a tightly packed vector
    #[must_use]
    pub fn to_contiguous(&self) -> Vec<Sample> {
        let mut out = Vec::with_capacity(self.width * self.height);
        for row in self.rows() {
            out.extend_from_slice(row);
        }
        out
    }
}

/// A writable strided view of a single channel 16 bit image
#[derive(Debug)]
pub struct ImageViewMut<'a> {
    data:   &'a mut [Sample],
    width:  usize,
    height: usize,
    stride: usize
}

impl<'a> ImageViewMut<'a> {
    /// Create a writable view over `data` with rows `stride` samples apart
    ///
    /// # Errors
    /// - [`FilterErrors::InsufficientStride`] if `stride < width`
    /// - [`FilterErrors::BufferTooSmall`] if `data` can't hold the last row
    pub fn new(
        data: &'a mut [Sample], width: usize, height: usize, stride: usize
    ) -> Result<ImageViewMut<'a>, FilterErrors> {
        check_geometry(data.len(), width, height, stride)?;

        Ok(ImageViewMut {
            data,
            width,
            height,
            stride
        })
    }

    /// Create a writable view over tightly packed rows
    ///
    /// # Errors
    /// [`FilterErrors::BufferTooSmall`] if `data` is shorter than `width * height`
    pub fn new_contiguous(
        data: &'a mut [Sample], width: usize, height: usize
    ) -> Result<ImageViewMut<'a>, FilterErrors> {
        ImageViewMut::new(data, width, height, width)
    }

    /// Create a writable view over raw bytes laid out as described by `layout`
    ///
    /// # Errors
    /// Same as [`ImageView::from_bytes`]
    pub fn from_bytes(
        bytes: &'a mut [u8], layout: PixelLayout, width: usize, height: usize, stride_bytes: usize
    ) -> Result<ImageViewMut<'a>, FilterErrors> {
        layout.ensure_supported()?;
        let stride = sample_stride(stride_bytes)?;
        let len = even_len(bytes.len());

        let data: &mut [Sample] = bytemuck::try_cast_slice_mut(&mut bytes[..len])
            .map_err(|_| FilterErrors::UnalignedBuffer)?;

        ImageViewMut::new(data, width, height, stride)
    }

    pub(crate) fn from_parts(data: &'a mut [Sample], width: usize, height: usize) -> ImageViewMut<'a> {
        debug_assert!(data.len() >= width * height);
        ImageViewMut {
            data,
            width,
            height,
            stride: width
        }
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// The `width` writable samples of row `y`
    ///
    /// # Panics
    /// If `y >= height`
    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [Sample] {
        assert!(y < self.height, "row {y} out of bounds for height {}", self.height);
        let start = y * self.stride;
        &mut self.data[start..start + self.width]
    }

    /// Reborrow as a read only view
    #[must_use]
    pub fn as_view(&self) -> ImageView<'_> {
        ImageView {
            data:   self.data,
            width:  self.width,
            height: self.height,
            stride: self.stride
        }
    }

    /// Split the view into disjoint bands of rows
    ///
    /// `ranges` must be sorted and non overlapping, parts that fall outside
    /// the view or overlap an earlier range are dropped. Rows not covered by
    /// any range are simply not handed out.
    #[must_use]
    pub fn into_bands(self, ranges: &[Range<usize>]) -> Vec<RowBand<'a>> {
        let ImageViewMut {
            data,
            width,
            height,
            stride
        } = self;

        let mut bands = Vec::with_capacity(ranges.len());

        if width == 0 || height == 0 {
            return bands;
        }
        let mut rest = data;
        // first row held by `rest`
        let mut next_row = 0;

        for range in ranges {
            let start = range.start.max(next_row);
            let end = range.end.min(height);

            if start >= end {
                continue;
            }
            let skipped = core::mem::take(&mut rest);
            let (_, tail) = skipped.split_at_mut((start - next_row) * stride);

            let band_len = if end == height {
                tail.len()
            } else {
                (end - start) * stride
            };
            let (head, tail) = tail.split_at_mut(band_len);

            bands.push(RowBand {
                start_row: start,
                view:      ImageViewMut {
                    data: head,
                    width,
                    height: end - start,
                    stride
                }
            });
            rest = tail;
            next_row = end;
        }
        bands
    }
}

/// A run of destination rows handed to a single worker
///
/// Bands produced by [`ImageViewMut::into_bands`] never alias, so each can
/// be written from a different thread.
#[derive(Debug)]
pub struct RowBand<'a> {
    start_row: usize,
    view:      ImageViewMut<'a>
}

impl<'a> RowBand<'a> {
    /// Index of the first row of this band in the full image
    #[must_use]
    pub const fn start_row(&self) -> usize {
        self.start_row
    }

    /// Rows of the full image this band covers
    #[must_use]
    pub const fn rows(&self) -> Range<usize> {
        self.start_row..self.start_row + self.view.height
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.view.height
    }

    /// Writable samples of image row `y`
    ///
    /// # Panics
    /// If `y` is not one of [`rows`](Self::rows)
    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [Sample] {
        assert!(y >= self.start_row, "row {y} is above this band");
        self.view.row_mut(y - self.start_row)
    }

    /// The band as a view of its own rows, row 0 being [`start_row`](Self::start_row)
    pub fn view_mut(&mut self) -> &mut ImageViewMut<'a> {
        &mut self.view
    }
}
