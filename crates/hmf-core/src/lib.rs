/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by the hmf crates
//!
//! This crate provides the pieces the median filter and its
//! command line driver agree on
//!
//! It currently contains
//!
//! - Bounds checked strided views over 16 bit sample buffers
//! - An owned single channel 16 bit image
//! - The pixel layout description used to reject unsupported images
//! - Filter options and branching factor validation
//! - The error type returned by every filter entry point
//!
//! This library is `#[no_std]` with `alloc` needed for the owned image.
//!
//! # Features
//!  - `std`: Implements `std::error::Error` for [`FilterErrors`](errors::FilterErrors)
//!
//!  - `log`: Routes the internal `log` macros to the `log` crate, without it
//!     they compile to nothing
//!
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub mod errors;
pub mod image;
pub mod layout;
#[cfg(not(feature = "log"))]
pub mod log;
pub mod options;
pub mod view;

#[cfg(feature = "log")]
pub use log;
