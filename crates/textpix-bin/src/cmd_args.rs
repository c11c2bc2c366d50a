/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

use crate::cmd_args::arg_parsers::IAlgorithm;
use crate::cmd_args::help_strings::{ALGORITHM_HELP, DECODE_HELP, METADATA_HELP};

pub mod arg_parsers;
pub mod help_strings;

fn algorithm_arg() -> Arg {
    Arg::new("algorithm")
        .short('a')
        .long("algorithm")
        .help("Color mapping algorithm")
        .long_help(ALGORITHM_HELP)
        .value_parser(value_parser!(IAlgorithm))
        .default_value("hsl")
}

fn metadata_arg(help: &'static str) -> Arg {
    Arg::new("metadata")
        .long("metadata")
        .help(help)
        .long_help(METADATA_HELP)
        .value_parser(value_parser!(PathBuf))
}

fn decoder_args(cmd: Command) -> Command {
    cmd.arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Maximum width of an image to accept")
            .value_parser(value_parser!(usize))
            .default_value("1048576"))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Maximum height of an image to accept")
            .value_parser(value_parser!(usize))
            .default_value("1048576"))
        .arg(Arg::new("strict")
            .long("strict")
            .help_heading("ADVANCED")
            .action(ArgAction::SetTrue)
            .help("Treat bytes after the pixel data as an error"))
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("textpix")
        .about("Turn text into images of colored pixels and back")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new("algorithms")
            .about("List the available color mapping algorithms"))
        .subcommand(Command::new("encode")
            .about("Encode a text file into an image")
            .arg(Arg::new("in")
                .short('i')
                .long("input")
                .help("Text file to encode")
                .value_parser(value_parser!(PathBuf))
                .required(true))
            .arg(Arg::new("out")
                .short('o')
                .long("output")
                .help("Image to write, .png or .ppm/.pam, chosen by extension")
                .value_parser(value_parser!(PathBuf))
                .required(true))
            .arg(algorithm_arg())
            .arg(Arg::new("rgb")
                .long("rgb")
                .action(ArgAction::SetTrue)
                .help("Write three channel images instead of RGBA"))
            .arg(metadata_arg("Also write a metadata file for the image")))
        .subcommand(decoder_args(Command::new("decode")
            .about("Decode an image back into text")
            .long_about(DECODE_HELP)
            .arg(Arg::new("in")
                .short('i')
                .long("input")
                .help("Image to decode, a ppm, pam, png or jpeg file")
                .value_parser(value_parser!(PathBuf))
                .required(true))
            .arg(Arg::new("out")
                .short('o')
                .long("output")
                .help("Write the text to this file instead of standard output")
                .value_parser(value_parser!(PathBuf)))
            .arg(algorithm_arg())
            .arg(metadata_arg("Metadata file written when the image was encoded"))))
        .subcommand(Command::new("legend")
            .about("Print the color of every character")
            .arg(algorithm_arg())
            .arg(Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the legend as JSON")))
        .subcommand(Command::new("check")
            .about("Report characters that share a color for every algorithm"))
        .subcommand(decoder_args(Command::new("probe")
            .about("Print image header information as JSON")
            .arg(Arg::new("in")
                .short('i')
                .long("input")
                .help("Images to probe")
                .value_parser(value_parser!(PathBuf))
                .action(ArgAction::Append)
                .required(true))))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("LOGGING")
            .help("Display information about the encoding and decoding"))
}
