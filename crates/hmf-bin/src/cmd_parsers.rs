/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use clap::ArgMatches;
use hmf_core::options::MedianOptions;
use log::{info, Level};

use crate::errors::BinErrors;

/// Everything the workflow needs, pulled out of the command line
#[derive(Clone, Debug)]
pub struct RunOptions {
    pub input:   PathBuf,
    pub out_dir: PathBuf,
    pub prefix:  String,
    pub format:  String,
    pub radii:   RangeInclusive<usize>,
    pub median:  MedianOptions,
    pub convert: bool
}

impl RunOptions {
    /// Where the output for `radius` goes, `<out-dir>/<prefix><radius>.<format>`
    pub fn output_path(&self, radius: usize) -> PathBuf {
        self.out_dir
            .join(format!("{}{}.{}", self.prefix, radius, self.format))
    }

    pub fn input(&self) -> &Path {
        &self.input
    }
}

fn value<T: Clone + Send + Sync + 'static>(options: &ArgMatches, id: &str) -> Result<T, BinErrors> {
    options
        .get_one::<T>(id)
        .cloned()
        .ok_or_else(|| BinErrors::Generic(format!("Missing value for --{id}")))
}

pub fn parse_options(options: &ArgMatches) -> Result<RunOptions, BinErrors> {
    let min_radius = value::<usize>(options, "min-radius")?;
    let max_radius = value::<usize>(options, "max-radius")?;

    if min_radius > max_radius {
        return Err(BinErrors::Generic(format!(
            "--min-radius {min_radius} is larger than --max-radius {max_radius}"
        )));
    }

    let median = MedianOptions::default()
        .set_branching(value(options, "branching")?)
        .set_strict_branching(!options.get_flag("relaxed-branching"))
        .set_threads(value(options, "threads")?);

    let run_options = RunOptions {
        input: value(options, "in")?,
        out_dir: value(options, "out-dir")?,
        prefix: value(options, "prefix")?,
        format: value(options, "format")?,
        radii: min_radius..=max_radius,
        median,
        convert: !options.get_flag("no-convert")
    };
    info!("Options: {:?}", run_options);

    Ok(run_options)
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("warn") {
        Level::Warn
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    };

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
