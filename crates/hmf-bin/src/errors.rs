/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};

use hmf_core::errors::FilterErrors;
use zune_image::channel::ChannelErrors;
use zune_image::errors::ImageErrors;

/// Everything that can stop the driver
pub enum BinErrors {
    /// Decoding, encoding or converting an image failed
    Image(ImageErrors),
    /// Decoded pixels couldn't be read as 16 bit samples
    Channel(ChannelErrors),
    /// The median filter rejected its input
    Filter(FilterErrors),
    Io(std::io::Error),
    Generic(String)
}

impl Debug for BinErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Image(err) => writeln!(f, "Image error: {err:?}"),
            Self::Channel(err) => writeln!(f, "Channel error: {err:?}"),
            Self::Filter(err) => writeln!(f, "Filter error: {err:?}"),
            Self::Io(err) => writeln!(f, "I/O error: {err}"),
            Self::Generic(msg) => writeln!(f, "{msg}")
        }
    }
}

impl Display for BinErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for BinErrors {}

impl From<ImageErrors> for BinErrors {
    fn from(err: ImageErrors) -> Self {
        BinErrors::Image(err)
    }
}

impl From<ChannelErrors> for BinErrors {
    fn from(err: ChannelErrors) -> Self {
        BinErrors::Channel(err)
    }
}

impl From<FilterErrors> for BinErrors {
    fn from(err: FilterErrors) -> Self {
        BinErrors::Filter(err)
    }
}

impl From<std::io::Error> for BinErrors {
    fn from(err: std::io::Error) -> Self {
        BinErrors::Io(err)
    }
}
