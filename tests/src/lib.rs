/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Cross crate tests for the median filter
//!
//! Every filtered image is checked against [`brute_force_median`], a plain
//! sort of the clamped window, or against another filtered image via
//! [`hash`].
#![allow(unused)]

use hmf_core::image::Image16;
use hmf_core::options::BranchingFactor;
use hmf_core::view::{ImageView, Sample};
use nanorand::Rng;
use xxhash_rust::xxh3::xxh3_128;

mod equivalence;
mod failures;
mod partition;
mod scenarios;
mod strided;

/// Every branching factor the histogram accepts
pub fn all_factors() -> Vec<BranchingFactor> {
    BranchingFactor::SUPPORTED
        .iter()
        .map(|&f| BranchingFactor::new(f).unwrap())
        .collect()
}

/// An image of random samples below `max_value`, or over the full range
/// when `max_value` is `None`
pub fn random_image(width: usize, height: usize, max_value: Option<u16>, seed: u64) -> Image16 {
    let mut rng = nanorand::WyRand::new_seed(seed);

    Image16::from_fn(width, height, |_, _| match max_value {
        Some(max) => rng.generate_range(0..max),
        None => rng.generate::<u16>()
    })
}

/// Sorted window median, `sorted[count / 2]` of the window clamped to the image
pub fn brute_force_median(src: &ImageView, x: usize, y: usize, radius: usize) -> Sample {
    let (width, height) = src.dimensions();

    let mut window = Vec::new();
    for wy in y.saturating_sub(radius)..=(y + radius).min(height - 1) {
        for wx in x.saturating_sub(radius)..=(x + radius).min(width - 1) {
            window.push(src.get(wx, wy));
        }
    }
    window.sort_unstable();
    window[window.len() / 2]
}

/// Filter `src` pixel by pixel with [`brute_force_median`]
pub fn brute_force(src: &ImageView, radius: usize) -> Image16 {
    Image16::from_fn(src.width(), src.height(), |x, y| {
        brute_force_median(src, x, y, radius)
    })
}

/// Hash of the samples of `image`, row by row
pub fn hash(image: &Image16) -> u128 {
    let bytes: Vec<u8> = image
        .pixels()
        .iter()
        .flat_map(|p| p.to_le_bytes())
        .collect();
    xxh3_128(&bytes)
}

/// Compare two images and report the first differing pixel
#[track_caller]
pub fn assert_same(expected: &Image16, found: &Image16, context: &str) {
    assert_eq!(expected.dimensions(), found.dimensions(), "{context}");

    if hash(expected) != hash(found) {
        let (width, _) = expected.dimensions();
        let position = expected
            .pixels()
            .iter()
            .zip(found.pixels())
            .position(|(a, b)| a != b)
            .unwrap_or_default();

        panic!(
            "{context}: pixel ({}, {}) expected {} but found {}",
            position % width,
            position / width,
            expected.pixels()[position],
            found.pixels()[position]
        );
    }
}
