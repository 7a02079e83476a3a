/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! An owned single channel 16 bit image
use alloc::vec;
use alloc::vec::Vec;

use crate::errors::FilterErrors;
use crate::view::{ImageView, ImageViewMut, Sample};

/// A tightly packed, single channel 16 bit image
///
/// This is what the filter writes into when the caller lets it pick the
/// destination size, see [`Image16::resize`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Image16 {
    pixels: Vec<Sample>,
    width:  usize,
    height: usize
}

impl Image16 {
    /// Create a black image of the given dimensions
    #[must_use]
    pub fn new(width: usize, height: usize) -> Image16 {
        Image16 {
            pixels: vec![0; width * height],
            width,
            height
        }
    }

    /// Wrap an existing pixel buffer
    ///
    /// Extra samples past `width * height` are dropped.
    ///
    /// # Errors
    /// [`FilterErrors::BufferTooSmall`] if the buffer can't hold the image
    pub fn from_vec(mut pixels: Vec<Sample>, width: usize, height: usize) -> Result<Image16, FilterErrors> {
        let expected = width * height;

        if pixels.len() < expected {
            return Err(FilterErrors::BufferTooSmall {
                expected,
                found: pixels.len()
            });
        }
        pixels.truncate(expected);

        Ok(Image16 {
            pixels,
            width,
            height
        })
    }

    /// Create an image by calling `func(x, y)` for every pixel
    ///
    /// # Example
    /// ```
    /// use hmf_core::image::Image16;
    /// let ramp = Image16::from_fn(4, 2, |x, y| (y * 4 + x) as u16);
    /// assert_eq!(ramp.pixels(), &[0, 1, 2, 3, 4, 5, 6, 7]);
    /// ```
    pub fn from_fn<F>(width: usize, height: usize, mut func: F) -> Image16
    where
        F: FnMut(usize, usize) -> Sample
    {
        let mut pixels = Vec::with_capacity(width * height);

        for y in 0..height {
            for x in 0..width {
                pixels.push(func(x, y));
            }
        }
        Image16 {
            pixels,
            width,
            height
        }
    }

    /// Copy the visible pixels of a (possibly strided) view
    #[must_use]
    pub fn from_view(view: &ImageView) -> Image16 {
        Image16 {
            pixels: view.to_contiguous(),
            width:  view.width(),
            height: view.height()
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

    /// Return `(width, height)`
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    #[must_use]
    pub fn pixels(&self) -> &[Sample] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Sample] {
        &mut self.pixels
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Sample> {
        self.pixels
    }

    /// Pixel at column `x`, row `y`
    ///
    /// # Panics
    /// If the coordinate is outside the image
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Sample {
        assert!(x < self.width && y < self.height);
        self.pixels[y * self.width + x]
    }

    /// Change the dimensions of the image
    ///
    /// Does nothing if the dimensions already match, otherwise the contents
    /// are reset to zero.
    pub fn resize(&mut self, width: usize, height: usize) {
        if self.dimensions() == (width, height) {
            return;
        }
        self.pixels.clear();
        self.pixels.resize(width * height, 0);
        self.width = width;
        self.height = height;
    }

    #[must_use]
    pub fn view(&self) -> ImageView<'_> {
        ImageView::from_parts(&self.pixels, self.width, self.height)
    }

    pub fn view_mut(&mut self) -> ImageViewMut<'_> {
        ImageViewMut::from_parts(&mut self.pixels, self.width, self.height)
    }
}
