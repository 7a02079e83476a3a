/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Direct median of windows cut by the image border
//!
//! Border pixels see fewer neighbours than interior ones, so their windows
//! change size from pixel to pixel and are not worth sliding. They are
//! gathered into a scratch buffer and the middle element is selected.
use hmf_core::view::{ImageView, Sample};

/// Return the element at index `len/2` in ascending order
///
/// Only a partial sort is done, the order of `array` afterwards is unspecified.
/// For even lengths this is the upper of the two middle values.
///
/// # Panics
/// If `array` is empty
pub fn find_median<T: Copy + Ord>(array: &mut [T]) -> T {
    let middle = array.len() / 2;
    *array.select_nth_unstable(middle).1
}

/// Median of the window of `radius` around `(x, y)` clamped to the image
///
/// `scratch` is reused between calls to avoid an allocation per pixel.
///
/// # Panics
/// If `(x, y)` is outside `src`
pub fn clamped_window_median(
    src: &ImageView, x: usize, y: usize, radius: usize, scratch: &mut Vec<Sample>
) -> Sample {
    let (width, height) = src.dimensions();

    let x_min = x.saturating_sub(radius);
    let x_max = (x + radius).min(width - 1);
    let y_min = y.saturating_sub(radius);
    let y_max = (y + radius).min(height - 1);

    scratch.clear();
    for yy in y_min..=y_max {
        scratch.extend_from_slice(&src.row(yy)[x_min..=x_max]);
    }
    find_median(scratch)
}
