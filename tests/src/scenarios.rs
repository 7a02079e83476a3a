/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use hmf_core::image::Image16;
use hmf_filter::median::{median, median_blur};

fn ramp() -> Image16 {
    Image16::from_fn(5, 5, |x, y| (y * 5 + x) as u16)
}

#[test]
fn ramp_centre_is_twelve() {
    let mut dst = Image16::default();
    median_blur(&ramp().view(), &mut dst, 1).unwrap();

    // window {6, 7, 8, 11, 12, 13, 16, 17, 18}
    assert_eq!(dst.get(2, 2), 12);
}

#[test]
fn ramp_corner_takes_third_smallest() {
    let mut dst = Image16::default();
    median_blur(&ramp().view(), &mut dst, 1).unwrap();

    // clamped window {0, 1, 5, 6}, element count/2 = 2
    assert_eq!(dst.get(0, 0), 5);
    // {18, 19, 23, 24}
    assert_eq!(dst.get(4, 4), 23);
}

#[test]
fn ramp_full_output() {
    let src = ramp();
    let mut out = vec![0; 25];
    median(src.pixels(), &mut out, 1, 5, 5).unwrap();

    #[rustfmt::skip]
    let expected = [
        5,  5,  6,  7,  8,
        6,  6,  7,  8,  9,
        11, 11, 12, 13, 14,
        16, 16, 17, 18, 19,
        20, 20, 21, 22, 23,
    ];
    assert_eq!(out, expected);
}

#[test]
fn salt_and_pepper_is_removed() {
    let src = Image16::from_fn(16, 16, |x, y| match (x * 7 + y * 3) % 11 {
        0 => u16::MAX,
        5 => 0,
        _ => 1000
    });
    let mut dst = Image16::default();
    median_blur(&src.view(), &mut dst, 1).unwrap();

    for y in 1..15 {
        for x in 1..15 {
            assert_eq!(dst.get(x, y), 1000, "pixel ({x}, {y})");
        }
    }
}

#[test]
fn constant_image_is_unchanged() {
    let src = Image16::from_fn(13, 9, |_, _| 31337);
    let mut dst = Image16::default();

    for radius in [1, 2, 7] {
        median_blur(&src.view(), &mut dst, radius).unwrap();
        assert_eq!(dst, src);
    }
}
