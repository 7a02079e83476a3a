/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use hmf_core::image::Image16;
use hmf_core::options::MedianOptions;
use hmf_filter::median::MedianBlur;

use crate::{all_factors, assert_same, brute_force, random_image};

fn filter(src: &Image16, radius: usize, branching: u32, threads: usize) -> Image16 {
    let options = MedianOptions::new(radius)
        .set_branching(branching)
        .set_threads(threads);

    let mut dst = Image16::default();
    MedianBlur::new_with_options(options)
        .execute(&src.view(), &mut dst)
        .unwrap();
    dst
}

#[test]
fn matches_sorted_window_for_every_factor() {
    let src = random_image(37, 23, Some(4096), 1);

    for branching in all_factors() {
        for radius in 1..=4 {
            let expected = brute_force(&src.view(), radius);
            let found = filter(&src, radius, branching.get(), 1);

            assert_same(
                &expected,
                &found,
                &format!("radius {radius}, branching {}", branching.get())
            );
        }
    }
}

#[test]
fn full_sample_range() {
    let src = random_image(29, 31, None, 2);

    for branching in all_factors() {
        let expected = brute_force(&src.view(), 3);
        let found = filter(&src, 3, branching.get(), 2);

        assert_same(&expected, &found, &format!("branching {}", branching.get()));
    }
}

#[test]
fn heavy_duplicates() {
    // a handful of distinct values, most windows have ties around the median
    let src = random_image(40, 40, Some(3), 3);

    for radius in [1, 2, 5] {
        let expected = brute_force(&src.view(), radius);
        assert_same(&expected, &filter(&src, radius, 16, 0), &format!("radius {radius}"));
    }
}

#[test]
fn radius_larger_than_image() {
    let src = random_image(6, 5, Some(1000), 4);

    for radius in [3, 4, 10] {
        let expected = brute_force(&src.view(), radius);
        assert_same(&expected, &filter(&src, radius, 4, 3), &format!("radius {radius}"));
    }
}

#[test]
fn single_rows_and_columns() {
    for (width, height) in [(1, 1), (1, 17), (17, 1), (2, 9)] {
        let src = random_image(width, height, Some(500), 5);

        for radius in 1..=3 {
            let expected = brute_force(&src.view(), radius);
            assert_same(
                &expected,
                &filter(&src, radius, 256, 0),
                &format!("{width}x{height} radius {radius}")
            );
        }
    }
}

#[test]
fn filtering_is_deterministic() {
    let src = random_image(64, 48, None, 6);

    let first = filter(&src, 2, 16, 0);
    for _ in 0..3 {
        assert_same(&first, &filter(&src, 2, 16, 0), "repeated run");
    }
}
