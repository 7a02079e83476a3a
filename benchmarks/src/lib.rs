/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use hmf_core::image::Image16;
use hmf_core::view::{ImageView, Sample};
use nanorand::Rng;

/// A noisy 16 bit image, the same for every call with the same arguments
pub fn noise_image(width: usize, height: usize, seed: u64) -> Image16 {
    let mut rng = nanorand::WyRand::new_seed(seed);
    Image16::from_fn(width, height, |_, _| rng.generate::<u16>())
}

/// Median filter by sorting every window, what the histogram filter is
/// measured against
pub fn sort_median(src: &ImageView, dst: &mut Image16, radius: usize) {
    let (width, height) = src.dimensions();
    dst.resize(width, height);

    let mut window: Vec<Sample> = Vec::with_capacity((2 * radius + 1).pow(2));

    for y in 0..height {
        let rows = y.saturating_sub(radius)..=(y + radius).min(height - 1);

        for x in 0..width {
            let columns = x.saturating_sub(radius)..=(x + radius).min(width - 1);

            window.clear();
            for wy in rows.clone() {
                window.extend_from_slice(&src.row(wy)[columns.clone()]);
            }
            let middle = window.len() / 2;
            let (_, median, _) = window.select_nth_unstable(middle);

            dst.pixels_mut()[y * width + x] = *median;
        }
    }
}
