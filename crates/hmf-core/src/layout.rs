/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Pixel layout checks
//!
//! The filter only understands one layout, single channel samples stored
//! in a [`u16`]. Anything coming from a decoder is described with a
//! [`PixelLayout`] and checked before a view is built over it.
use zune_core::bit_depth::BitDepth;

use crate::errors::FilterErrors;

/// Sample depth and channel count of an image buffer
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PixelLayout {
    pub depth:    BitDepth,
    pub channels: usize
}

impl PixelLayout {
    /// The only layout the filter accepts
    pub const LUMA16: PixelLayout = PixelLayout {
        depth:    BitDepth::Sixteen,
        channels: 1
    };

    #[must_use]
    pub const fn new(depth: BitDepth, channels: usize) -> PixelLayout {
        PixelLayout { depth, channels }
    }

    /// Whether the filter can run on images with this layout
    #[must_use]
    pub fn is_supported(&self) -> bool {
        self.depth == BitDepth::Sixteen && self.channels == 1
    }

    /// Return an error if the filter can't run on this layout
    ///
    /// # Errors
    /// [`FilterErrors::UnsupportedFormat`] for anything but single channel 16 bit
    pub fn ensure_supported(self) -> Result<(), FilterErrors> {
        if self.is_supported() {
            Ok(())
        } else {
            Err(FilterErrors::UnsupportedFormat(self))
        }
    }
}

impl Default for PixelLayout {
    fn default() -> Self {
        PixelLayout::LUMA16
    }
}
