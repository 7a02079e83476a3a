/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors returned by the filter and the views it runs on
use core::fmt::{Debug, Display, Formatter};

use crate::layout::PixelLayout;

/// Broad class an error falls into
///
/// Useful for callers that only care whether the arguments were wrong,
/// the image can't be handled at all, or the buffers broke a contract.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// A parameter (radius, dimensions, branching factor) was out of range
    InvalidArgument,
    /// The image isn't single channel 16 bit
    UnsupportedFormat,
    /// A buffer or stride can't hold the image it claims to describe
    PreconditionViolation
}

/// Errors that can occur when building views or running the median filter
///
/// All of them are raised before any destination pixel is written.
#[non_exhaustive]
pub enum FilterErrors {
    /// The source image has zero width or zero height
    EmptyImage,
    /// Radius must be at least one
    InvalidRadius(usize),
    /// Destination dimensions (width, height) do not match the source
    DimensionMismatch {
        expected: (usize, usize),
        found:    (usize, usize)
    },
    /// Branching factor is not one of 2, 4, 16, 256 or 65536
    InvalidBranchingFactor(u32),
    /// Only single channel 16 bit images can be filtered
    UnsupportedFormat(PixelLayout),
    /// Row stride (in samples) is smaller than the row width
    InsufficientStride { stride: usize, width: usize },
    /// Backing buffer holds fewer samples than the geometry needs
    BufferTooSmall { expected: usize, found: usize },
    /// A byte buffer or byte stride can't be read as 16 bit samples
    UnalignedBuffer
}

impl FilterErrors {
    /// Return the class this error belongs to
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyImage
            | Self::InvalidRadius(_)
            | Self::DimensionMismatch { .. }
            | Self::InvalidBranchingFactor(_) => ErrorKind::InvalidArgument,
            Self::UnsupportedFormat(_) => ErrorKind::UnsupportedFormat,
            Self::InsufficientStride { .. } | Self::BufferTooSmall { .. } | Self::UnalignedBuffer => {
                ErrorKind::PreconditionViolation
            }
        }
    }
}

impl Debug for FilterErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::EmptyImage => {
                writeln!(f, "Empty image, width and height must be non-zero")
            }
            Self::InvalidRadius(radius) => {
                writeln!(f, "Invalid radius {radius}, radius must be at least 1")
            }
            Self::DimensionMismatch { expected, found } => {
                writeln!(
                    f,
                    "Dimension mismatch, expected {}x{} but found {}x{}",
                    expected.0, expected.1, found.0, found.1
                )
            }
            Self::InvalidBranchingFactor(factor) => {
                writeln!(
                    f,
                    "Invalid branching factor {factor}, expected one of 2, 4, 16, 256 or 65536"
                )
            }
            Self::UnsupportedFormat(layout) => {
                writeln!(
                    f,
                    "Unsupported format {:?} with {} channel(s), only single channel 16 bit images are supported",
                    layout.depth, layout.channels
                )
            }
            Self::InsufficientStride { stride, width } => {
                writeln!(f, "Stride {stride} is too small for a row of {width} samples")
            }
            Self::BufferTooSmall { expected, found } => {
                writeln!(f, "Buffer too small, expected at least {expected} samples but found {found}")
            }
            Self::UnalignedBuffer => {
                writeln!(f, "Buffer or stride is not aligned to 16 bit samples")
            }
        }
    }
}

impl Display for FilterErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FilterErrors {}
