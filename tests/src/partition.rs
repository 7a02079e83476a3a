/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The output must not depend on how rows are split between workers

use std::ops::Range;

use hmf_core::image::Image16;
use hmf_core::options::MedianOptions;
use hmf_core::view::ImageViewMut;
use hmf_filter::dispatch::{RowExecutor, RowTask, ScopedThreadExecutor, SerialExecutor};
use hmf_filter::median::MedianBlur;

use crate::{assert_same, random_image};

/// Runs bands one after the other in the order given, bands may be uneven
struct FixedBands(Vec<Range<usize>>);

impl RowExecutor for FixedBands {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn workers(&self) -> usize {
        1
    }

    fn for_each_band<'dst>(&self, dst: ImageViewMut<'dst>, task: &RowTask<'_, 'dst>) {
        for band in dst.into_bands(&self.0) {
            task(band);
        }
    }
}

fn run(src: &Image16, radius: usize, executor: &dyn RowExecutor) -> Image16 {
    let mut dst = Image16::new(src.width(), src.height());
    MedianBlur::new_with_options(MedianOptions::new(radius))
        .execute_into(&src.view(), dst.view_mut(), executor)
        .unwrap();
    dst
}

#[test]
fn worker_count_does_not_change_output() {
    let src = random_image(53, 41, None, 10);

    for radius in [1, 3, 6] {
        let expected = run(&src, radius, &SerialExecutor);

        // more workers than rows included
        for threads in [1, 2, 3, 4, 7, 16, 41, 64] {
            let found = run(&src, radius, &ScopedThreadExecutor::new(threads));
            assert_same(&expected, &found, &format!("radius {radius}, {threads} threads"));
        }
    }
}

#[test]
fn uneven_bands_match_serial() {
    let src = random_image(30, 20, Some(2000), 11);
    let expected = run(&src, 2, &SerialExecutor);

    let splits = [
        vec![0..1, 1..20],
        vec![0..19, 19..20],
        vec![0..3, 3..4, 4..11, 11..20],
        (0..20).map(|y| y..y + 1).collect()
    ];
    for split in splits {
        let context = format!("{split:?}");
        assert_same(&expected, &run(&src, 2, &FixedBands(split)), &context);
    }
}

#[test]
fn bands_in_reverse_order() {
    let src = random_image(25, 18, Some(100), 12);
    let expected = run(&src, 3, &SerialExecutor);

    // split in order, run back to front
    struct Reversed;

    impl RowExecutor for Reversed {
        fn name(&self) -> &'static str {
            "reversed"
        }

        fn workers(&self) -> usize {
            1
        }

        fn for_each_band<'dst>(&self, dst: ImageViewMut<'dst>, task: &RowTask<'_, 'dst>) {
            let bands = dst.into_bands(&[0..5, 5..9, 9..18]);
            for band in bands.into_iter().rev() {
                task(band);
            }
        }
    }

    assert_same(&expected, &run(&src, 3, &Reversed), "reversed bands");
}
