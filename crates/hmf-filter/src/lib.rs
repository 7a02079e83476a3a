/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Median filtering for single channel 16 bit images
//!
//! The filter keeps the current window in a [`HierarchicalHistogram`](histogram::HierarchicalHistogram),
//! a few levels of counting buckets over the 16 bit range. Moving the window one
//! column to the right only touches `2R+1` samples going out and `2R+1` coming in,
//! and the median is found by walking down the levels instead of sorting the window.
//!
//! Pixels whose window is cut by the image border are computed directly with a
//! partial sort of the clamped window.
//!
//! # Example
//! - Median filter a ramp with a radius of 2
//! ```
//! use hmf_core::image::Image16;
//! use hmf_filter::median::median_blur;
//!
//! let source = Image16::from_fn(64, 64, |x, y| (x * y) as u16);
//! let mut filtered = Image16::default();
//! median_blur(&source.view(), &mut filtered, 2).unwrap();
//! assert_eq!(filtered.dimensions(), (64, 64));
//! ```
//!
//! # Features
//! - `threads`: Split rows over scoped threads, enabled by default
//! - `log`: Emit `trace` messages through the `log` crate, also enables
//!   the `log` feature of `hmf-core`
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod dispatch;
pub mod histogram;
pub mod median;
pub mod select;
pub mod window;
