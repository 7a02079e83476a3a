/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Moving pixels between files and [`Image16`]

use std::path::Path;

use hmf_core::errors::FilterErrors;
use hmf_core::image::Image16;
use hmf_core::layout::PixelLayout;
use log::{debug, info};
use zune_core::bit_depth::BitDepth;
use zune_core::colorspace::ColorSpace;
use zune_image::core_filters::colorspace::ColorspaceConv;
use zune_image::core_filters::depth::Depth;
use zune_image::image::Image;
use zune_image::traits::OperationsTrait;

use crate::errors::BinErrors;

fn is_luma16(image: &Image) -> bool {
    image.depth() == BitDepth::Sixteen && image.colorspace() == ColorSpace::Luma
}

/// Bring a decoded image to single channel 16 bit samples.
///
/// When `convert` is false anything that isn't already `Luma` at 16 bits
/// fails with [`FilterErrors::UnsupportedFormat`].
pub fn to_luma16(image: &mut Image, convert: bool) -> Result<(), BinErrors> {
    if is_luma16(image) {
        return Ok(());
    }
    if !convert {
        let layout = PixelLayout::new(image.depth(), image.colorspace().num_components());
        return Err(BinErrors::Filter(FilterErrors::UnsupportedFormat(layout)));
    }
    if image.colorspace() != ColorSpace::Luma {
        debug!("Converting {:?} to Luma", image.colorspace());
        ColorspaceConv::new(ColorSpace::Luma).execute(image)?;
    }
    if image.depth() != BitDepth::Sixteen {
        debug!("Converting {:?} to 16 bits", image.depth());
        Depth::new(BitDepth::Sixteen).execute(image)?;
    }
    Ok(())
}

/// Copy the first frame of a `Luma` 16 bit image into an owned buffer
pub fn image_to_luma16(image: &Image) -> Result<Image16, BinErrors> {
    let (width, height) = image.dimensions();

    let channels = image.channels_ref(true);
    let channel = channels
        .first()
        .ok_or_else(|| BinErrors::Generic("Decoded image has no channels".to_string()))?;

    let samples = channel.reinterpret_as::<u16>()?;

    Ok(Image16::from_vec(samples.to_vec(), width, height)?)
}

/// Decode `path` into a single channel 16 bit image
pub fn load_luma16<P: AsRef<Path>>(path: P, convert: bool) -> Result<Image16, BinErrors> {
    let path = path.as_ref();
    info!("Decoding {:?}", path);

    let mut image = Image::open(path)?;
    to_luma16(&mut image, convert)?;

    image_to_luma16(&image)
}

/// Encode `image` to `path`, the encoder is picked from the extension
pub fn save_luma16<P: AsRef<Path>>(image: &Image16, path: P) -> Result<(), BinErrors> {
    let (width, height) = image.dimensions();
    let encoded = Image::from_u16(image.pixels(), width, height, ColorSpace::Luma);

    encoded.save(path)?;
    Ok(())
}
