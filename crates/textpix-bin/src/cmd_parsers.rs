/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use clap::ArgMatches;
use textpix_colormap::textpix_core::options::DecoderOptions;
use textpix_colormap::Algorithm;

use crate::cmd_args::arg_parsers::IAlgorithm;

pub mod global_options;

/// Decoder options from `--max-width`, `--max-height` and `--strict`
pub fn get_decoder_options(options: &ArgMatches) -> DecoderOptions {
    let mut decoder_options = DecoderOptions::new_cmd();

    if let Some(max_width) = options.get_one::<usize>("max-width") {
        decoder_options = decoder_options.set_max_width(*max_width);
    }
    if let Some(max_height) = options.get_one::<usize>("max-height") {
        decoder_options = decoder_options.set_max_height(*max_height);
    }
    decoder_options.set_strict_mode(options.get_flag("strict"))
}

/// The algorithm picked with `--algorithm`, hsl when absent
pub fn get_algorithm(options: &ArgMatches) -> Algorithm {
    options
        .get_one::<IAlgorithm>("algorithm")
        .map_or(Algorithm::Hsl, |x| x.to_algorithm())
}

pub fn get_path<'a>(options: &'a ArgMatches, id: &str) -> Option<&'a Path> {
    options
        .get_one::<std::path::PathBuf>(id)
        .map(|x| x.as_path())
}
