/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Bad input fails before anything is written

use hmf_core::errors::{ErrorKind, FilterErrors};
use hmf_core::image::Image16;
use hmf_core::layout::PixelLayout;
use hmf_core::options::MedianOptions;
use hmf_core::view::{ImageView, ImageViewMut};
use hmf_filter::dispatch::SerialExecutor;
use hmf_filter::median::{median, MedianBlur};
use zune_core::bit_depth::BitDepth;

#[test]
fn zero_radius() {
    let src = Image16::from_fn(4, 4, |x, y| (x + y) as u16);
    let mut dst = Image16::from_fn(4, 4, |_, _| 9);

    let err = MedianBlur::new(0).execute(&src.view(), &mut dst).unwrap_err();
    assert!(matches!(err, FilterErrors::InvalidRadius(0)));
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(dst.pixels().iter().all(|&p| p == 9));
}

#[test]
fn empty_source() {
    let src = Image16::new(0, 7);
    let mut dst = Image16::default();

    let err = MedianBlur::new(1).execute(&src.view(), &mut dst).unwrap_err();
    assert!(matches!(err, FilterErrors::EmptyImage));
}

#[test]
fn unsupported_branching_factor() {
    let src = Image16::from_fn(4, 4, |x, _| x as u16);
    let mut dst = Image16::default();

    for factor in [0, 1, 3, 8, 32, 1024, 100_000] {
        let options = MedianOptions::new(1).set_branching(factor);
        let err = MedianBlur::new_with_options(options)
            .execute(&src.view(), &mut dst)
            .unwrap_err();
        assert!(matches!(err, FilterErrors::InvalidBranchingFactor(f) if f == factor));
    }
}

#[test]
fn relaxed_branching_factor_falls_back() {
    let src = Image16::from_fn(6, 6, |x, y| (x * y) as u16);
    let mut expected = Image16::default();
    let mut found = Image16::default();

    MedianBlur::new(1).execute(&src.view(), &mut expected).unwrap();

    let options = MedianOptions::new(1)
        .set_branching(7)
        .set_strict_branching(false);
    MedianBlur::new_with_options(options)
        .execute(&src.view(), &mut found)
        .unwrap();

    assert_eq!(expected, found);
}

#[test]
fn destination_of_another_size() {
    let src = Image16::from_fn(5, 5, |x, _| x as u16);
    let mut dst = Image16::new(5, 4);

    let err = MedianBlur::new(1)
        .execute_into(&src.view(), dst.view_mut(), &SerialExecutor)
        .unwrap_err();
    assert!(matches!(
        err,
        FilterErrors::DimensionMismatch {
            expected: (5, 5),
            found:    (5, 4)
        }
    ));
}

#[test]
fn stride_shorter_than_width() {
    let data = vec![0_u16; 64];
    let err = ImageView::new(&data, 8, 4, 6).unwrap_err();

    assert!(matches!(err, FilterErrors::InsufficientStride { stride: 6, width: 8 }));
    assert_eq!(err.kind(), ErrorKind::PreconditionViolation);
}

#[test]
fn short_channels() {
    let src = vec![0_u16; 20];
    let mut dst = vec![0_u16; 24];

    assert!(matches!(
        median(&src, &mut dst, 1, 5, 5),
        Err(FilterErrors::BufferTooSmall { expected: 25, found: 20 })
    ));

    let src = vec![0_u16; 25];
    let mut dst = vec![0_u16; 24];
    assert!(matches!(
        median(&src, &mut dst, 1, 5, 5),
        Err(FilterErrors::BufferTooSmall { expected: 25, found: 24 })
    ));
}

#[test]
fn eight_bit_layout() {
    let bytes = vec![0_u8; 64];
    let layout = PixelLayout::new(BitDepth::Eight, 1);

    let err = ImageView::from_bytes(&bytes, layout, 8, 8, 8).unwrap_err();
    assert!(matches!(err, FilterErrors::UnsupportedFormat(_)));
    assert_eq!(err.kind(), ErrorKind::UnsupportedFormat);

    let mut bytes = vec![0_u8; 64];
    let rgb16 = PixelLayout::new(BitDepth::Sixteen, 3);
    assert!(ImageViewMut::from_bytes(&mut bytes, rgb16, 8, 8, 16).is_err());
}
