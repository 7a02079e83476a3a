/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::time::Instant;

use hmf_core::image::Image16;
use hmf_filter::median::MedianBlur;
use log::{error, info, warn};

use crate::cmd_parsers::RunOptions;
use crate::codec::{load_luma16, save_luma16};
use crate::errors::BinErrors;

/// Filter and write the output for a single radius
fn filter_one(
    src: &Image16, dst: &mut Image16, options: &RunOptions, radius: usize
) -> Result<(), BinErrors> {
    let filter = MedianBlur::new_with_options(options.median.set_radius(radius));

    let start = Instant::now();
    filter.execute(&src.view(), dst)?;
    let filtered = start.elapsed();

    let path = options.output_path(radius);
    save_luma16(dst, &path)?;

    info!(
        "Radius {radius}: filtered in {:?}, wrote {:?} after {:?}",
        filtered,
        path,
        start.elapsed()
    );
    Ok(())
}

/// Load the input once then write one filtered image per radius.
///
/// A radius that fails is logged and skipped, the remaining ones still run.
/// Returns the number of images written.
pub(crate) fn run_workflow(options: &RunOptions) -> Result<usize, BinErrors> {
    let start = Instant::now();

    let src = load_luma16(options.input(), options.convert)?;
    info!(
        "Loaded {}x{} image in {:?}",
        src.width(),
        src.height(),
        start.elapsed()
    );

    std::fs::create_dir_all(&options.out_dir)?;

    let mut dst = Image16::default();
    let mut failed = 0;
    let mut written = 0;

    for radius in options.radii.clone() {
        match filter_one(&src, &mut dst, options, radius) {
            Ok(()) => written += 1,
            Err(err) => {
                failed += 1;
                error!("Radius {radius} failed, skipping it: {:?}", err);
            }
        }
    }
    if failed > 0 {
        warn!("{failed} of {} radii failed", failed + written);
    }
    info!("Total time: {:?}", start.elapsed());

    Ok(written)
}
