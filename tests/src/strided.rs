/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use hmf_core::image::Image16;
use hmf_core::layout::PixelLayout;
use hmf_core::options::MedianOptions;
use hmf_core::view::{ImageView, ImageViewMut};
use hmf_filter::dispatch::ScopedThreadExecutor;
use hmf_filter::median::MedianBlur;

use crate::{assert_same, brute_force, random_image};

const PADDING: u16 = 0xDEAD;

/// Copy `image` into rows `stride` samples apart, padding filled with [`PADDING`]
fn pad(image: &Image16, stride: usize) -> Vec<u16> {
    let mut padded = vec![PADDING; stride * image.height()];

    for (y, row) in image.pixels().chunks_exact(image.width()).enumerate() {
        padded[y * stride..y * stride + image.width()].copy_from_slice(row);
    }
    padded
}

#[test]
fn padded_rows_filter_like_packed_ones() {
    let src = random_image(21, 17, None, 20);
    let expected = brute_force(&src.view(), 2);

    for src_stride in [21, 22, 32] {
        for dst_stride in [21, 25] {
            let padded_src = pad(&src, src_stride);
            let mut padded_dst = vec![PADDING; dst_stride * 17];

            let src_view = ImageView::new(&padded_src, 21, 17, src_stride).unwrap();
            let dst_view = ImageViewMut::new(&mut padded_dst, 21, 17, dst_stride).unwrap();

            MedianBlur::new_with_options(MedianOptions::new(2))
                .execute_into(&src_view, dst_view, &ScopedThreadExecutor::new(3))
                .unwrap();

            let found = Image16::from_view(&ImageView::new(&padded_dst, 21, 17, dst_stride).unwrap());
            let context = format!("src stride {src_stride}, dst stride {dst_stride}");
            assert_same(&expected, &found, &context);

            // padding of the destination is never written
            for row in padded_dst.chunks(dst_stride) {
                assert!(row[21..].iter().all(|&p| p == PADDING), "{context}");
            }
        }
    }
}

#[test]
fn byte_views_with_padding() {
    let src = random_image(10, 6, Some(900), 21);
    let expected = brute_force(&src.view(), 1);

    // 24 bytes per row, 12 samples
    let padded = pad(&src, 12);
    let mut dst_samples = vec![0_u16; 12 * 6];

    let src_view =
        ImageView::from_bytes(bytemuck::cast_slice(&padded), PixelLayout::LUMA16, 10, 6, 24).unwrap();
    let dst_view = ImageViewMut::from_bytes(
        bytemuck::cast_slice_mut(&mut dst_samples),
        PixelLayout::LUMA16,
        10,
        6,
        24
    )
    .unwrap();

    MedianBlur::new(1)
        .execute_into(&src_view, dst_view, &ScopedThreadExecutor::new(2))
        .unwrap();

    let found = Image16::from_view(&ImageView::new(&dst_samples, 10, 6, 12).unwrap());
    assert_same(&expected, &found, "byte views");
}
