/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Command line driver for the median filter
//!
//! Loads one image, converts it to single channel 16 bit and writes one
//! filtered copy per radius, `image1.jpg`, `image2.jpg` and so on.

use std::process::exit;

use log::error;

use crate::workflow::run_workflow;

mod cmd_args;
mod cmd_parsers;
mod codec;
mod errors;
mod workflow;

pub fn main() {
    let cmd = cmd_args::create_cmd_args();
    let options = cmd.get_matches();

    cmd_parsers::setup_logger(&options);

    let result = cmd_parsers::parse_options(&options).and_then(|parsed| run_workflow(&parsed));

    if let Err(reason) = result {
        println!();
        error!(" Could not complete workflow, reason {:?}", reason);
        println!();
        exit(-1);
    }
}
