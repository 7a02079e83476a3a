/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("hmf")
        .about("Median filter a grayscale image for a range of radii")
        .arg(Arg::new("in")
            .short('i')
            .long("input")
            .help("Input file to read data from")
            .value_parser(value_parser!(PathBuf))
            .required(true))
        .arg(Arg::new("out-dir")
            .short('o')
            .long("out-dir")
            .help("Directory to write the filtered images to")
            .value_parser(value_parser!(PathBuf))
            .default_value("."))
        .arg(Arg::new("prefix")
            .long("prefix")
            .help("File name prefix of the outputs, the radius is appended to it")
            .default_value("image"))
        .arg(Arg::new("format")
            .long("format")
            .help("Extension of the outputs, picks the encoder")
            .default_value("jpg"))
        .arg(Arg::new("min-radius")
            .long("min-radius")
            .help_heading("FILTER")
            .help("Smallest radius to filter with")
            .value_parser(value_parser!(usize))
            .default_value("1"))
        .arg(Arg::new("max-radius")
            .long("max-radius")
            .help_heading("FILTER")
            .help("Largest radius to filter with")
            .value_parser(value_parser!(usize))
            .default_value("6"))
        .arg(Arg::new("branching")
            .long("branching")
            .help_heading("FILTER")
            .help("Histogram branching factor, one of 2, 4, 16, 256, 65536")
            .value_parser(value_parser!(u32))
            .default_value("16"))
        .arg(Arg::new("relaxed-branching")
            .long("relaxed-branching")
            .help_heading("FILTER")
            .action(ArgAction::SetTrue)
            .help("Replace an unsupported branching factor with 16 instead of failing"))
        .arg(Arg::new("threads")
            .long("threads")
            .help_heading("FILTER")
            .help("Number of worker threads, 0 uses all cores but one")
            .value_parser(value_parser!(usize))
            .default_value("0"))
        .arg(Arg::new("no-convert")
            .long("no-convert")
            .help_heading("FILTER")
            .action(ArgAction::SetTrue)
            .help("Fail on images that are not 16 bit grayscale instead of converting them"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about each written file"))
}
