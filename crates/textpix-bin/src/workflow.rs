/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsStr;
use std::path::Path;

use clap::ArgMatches;
use log::{debug, info, warn};
use textpix_colormap::textpix_core::colorspace::ColorSpace;
use textpix_colormap::textpix_core::options::DecoderOptions;
use textpix_colormap::{
    decode_image, encode_text, legend, list_algorithms, Algorithm, ColorMapper, DecodedText,
    ALL_ALGORITHMS
};
use textpix_ppm::extension_for_colorspace;

use crate::cmd_parsers::{get_algorithm, get_decoder_options, get_path};
use crate::codecs::ImageFormat;
use crate::errors::CliErrors;
use crate::file_io::{read_file, read_text_file, verify_file_paths, write_file};
use crate::probe_files::probe_input_files;
use crate::serde::ImageMetadata;

pub(crate) fn create_and_exec_workflow_from_cmd(args: &ArgMatches) -> Result<(), CliErrors> {
    info!("Creating workflows from input");

    match args.subcommand() {
        Some(("algorithms", _)) => print!("{}", format_algorithms()),
        Some(("encode", sub)) => encode_cmd(sub)?,
        Some(("decode", sub)) => decode_cmd(&ColorMapper::new(), sub)?,
        Some(("legend", sub)) => legend_cmd(sub)?,
        Some(("check", _)) => print!("{}", format_check_report(&ColorMapper::new())),
        Some(("probe", sub)) => probe_input_files(sub)?,
        Some((name, _)) => {
            return Err(CliErrors::GenericString(format!(
                "Unknown subcommand {name}"
            )))
        }
        None => return Err(CliErrors::GenericString("No subcommand given".to_string()))
    }
    Ok(())
}

fn required_path<'a>(args: &'a ArgMatches, id: &str) -> Result<&'a Path, CliErrors> {
    get_path(args, id).ok_or_else(|| CliErrors::GenericString(format!("Missing argument {id}")))
}

fn encode_cmd(args: &ArgMatches) -> Result<(), CliErrors> {
    let input = required_path(args, "in")?;
    let output = required_path(args, "out")?;
    let colorspace = if args.get_flag("rgb") {
        ColorSpace::RGB
    } else {
        ColorSpace::RGBA
    };
    let metadata = encode_file(
        input,
        output,
        get_algorithm(args),
        colorspace,
        get_path(args, "metadata")
    )?;
    info!(
        "Encoded {} characters into a {}x{} image",
        metadata.char_count, metadata.width, metadata.height
    );
    Ok(())
}

fn decode_cmd(mapper: &ColorMapper, args: &ArgMatches) -> Result<(), CliErrors> {
    let input = required_path(args, "in")?;
    let output = get_path(args, "out");

    let (text, decoded) = decode_file(
        mapper,
        input,
        get_algorithm(args),
        get_path(args, "metadata"),
        get_decoder_options(args)
    )?;

    match output {
        Some(path) => write_file(path, text.as_bytes())?,
        None => println!("{text}")
    }
    eprintln!("{}", format_confidence(&decoded));

    Ok(())
}

fn legend_cmd(args: &ArgMatches) -> Result<(), CliErrors> {
    let algorithm = get_algorithm(args);

    if args.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&legend(algorithm))?);
    } else {
        print!("{}", format_legend(algorithm));
    }
    Ok(())
}

/// Encode the text in `input` as an image at `output`, optionally
/// writing the metadata sidecar to `metadata_path`
pub fn encode_file(
    input: &Path, output: &Path, algorithm: Algorithm, colorspace: ColorSpace,
    metadata_path: Option<&Path>
) -> Result<ImageMetadata, CliErrors> {
    verify_file_paths(input, Some(output))?;

    if metadata_path == Some(input) || metadata_path == Some(output) {
        return Err(CliErrors::GenericString(format!(
            "Metadata path {:?} clashes with the input or output",
            metadata_path.unwrap_or(input)
        )));
    }
    let format = output_format(output);

    if !format.has_encoder() {
        return Err(CliErrors::GenericString(format!(
            "Cannot write {output:?}, {format:?} images can only be decoded"
        )));
    }
    let text = read_text_file(input)?;
    let image = encode_text(algorithm, &text, colorspace)?;

    if format == ImageFormat::PPM {
        if let Some(ext) = extension_for_colorspace(colorspace) {
            if output.extension() != Some(OsStr::new(ext)) {
                warn!("{colorspace:?} images are usually stored as .{ext}, writing {output:?} anyway");
            }
        }
    }
    let encoded = format.encode(&image)?;

    write_file(output, &encoded)?;

    let metadata = ImageMetadata::new(algorithm, &image);

    if let Some(path) = metadata_path {
        debug!("Writing metadata to {path:?}");
        write_file(path, serde_json::to_string_pretty(&metadata)?.as_bytes())?;
    }
    Ok(metadata)
}

/// Format to write `output` in, from its extension
///
/// Unknown extensions get PPM/PAM.
fn output_format(output: &Path) -> ImageFormat {
    let format = output
        .extension()
        .and_then(OsStr::to_str)
        .and_then(ImageFormat::encoder_for_extension);

    match format {
        Some(format) => format,
        None => {
            warn!("Unknown image extension for {output:?}, writing a PPM/PAM image");
            ImageFormat::PPM
        }
    }
}

fn read_metadata(path: &Path) -> Result<ImageMetadata, CliErrors> {
    let bytes = read_file(path)?;

    Ok(serde_json::from_slice(&bytes)?)
}

/// Decode the image at `input`
///
/// Metadata, when present, overrides `algorithm` and fixes the length of
/// the returned text.
pub fn decode_file(
    mapper: &ColorMapper, input: &Path, algorithm: Algorithm, metadata_path: Option<&Path>,
    options: DecoderOptions
) -> Result<(String, DecodedText), CliErrors> {
    verify_file_paths(input, None)?;

    let metadata = metadata_path.map(read_metadata).transpose()?;

    let algorithm = match &metadata {
        Some(metadata) => {
            let from_metadata = metadata.algorithm()?;

            if from_metadata != algorithm {
                info!("Using algorithm {from_metadata} from metadata");
            }
            from_metadata
        }
        None => algorithm
    };
    let contents = read_file(input)?;

    let format = ImageFormat::guess_format(&contents).ok_or_else(|| {
        CliErrors::GenericString(format!(
            "Could not determine the image format of {input:?}, expected ppm, pam, png or jpeg"
        ))
    })?;
    debug!("Decoding {input:?} as {format:?}");

    let image = format.decode(&contents, options)?;
    let (width, height, colorspace) = (image.info.width, image.info.height, image.info.colorspace);

    if let Some(metadata) = &metadata {
        if (metadata.width, metadata.height) != (width, height) {
            warn!(
                "Metadata describes a {}x{} image but {input:?} is {width}x{height}",
                metadata.width, metadata.height
            );
        }
    }
    let decoded = decode_image(mapper, algorithm, &image.pixels, width, height, colorspace)?;

    let text = match &metadata {
        Some(metadata) => decoded.text_with_len(metadata.char_count).to_string(),
        None => decoded.text().to_string()
    };
    Ok((text, decoded))
}

pub fn format_confidence(decoded: &DecodedText) -> String {
    format!(
        "Confidence: {:.1}% ({}), {} of {} pixels matched exactly",
        decoded.confidence() * 100.0,
        decoded.confidence_level().as_str(),
        decoded.exact_matches(),
        decoded.total_pixels()
    )
}

pub fn format_algorithms() -> String {
    let mut out = String::new();

    for info in list_algorithms() {
        out.push_str(&format!("{:<10} {}\n", info.id, info.name));
        out.push_str(&format!("{:<10} {}\n", "", info.description));
    }
    out
}

pub fn format_legend(algorithm: Algorithm) -> String {
    let mut out = format!("Legend for {}\n", algorithm.name());

    for entry in legend(algorithm) {
        let color = entry.color;

        out.push_str(&format!(
            "{:>3}  {:?}  {}  rgb({}, {}, {})\n",
            entry.code, entry.character, color, color.r, color.g, color.b
        ));
    }
    out
}

/// Injectivity report for every algorithm
pub fn format_check_report(mapper: &ColorMapper) -> String {
    let mut out = String::new();

    for algorithm in ALL_ALGORITHMS {
        let table = mapper.table(algorithm);

        if table.is_injective() {
            out.push_str(&format!(
                "{algorithm}: injective, {} distinct colors\n",
                table.len()
            ));
            continue;
        }
        out.push_str(&format!(
            "{algorithm}: {} collisions, {} distinct colors\n",
            table.collisions().len(),
            table.len()
        ));
        for collision in table.collisions() {
            out.push_str(&format!(
                "    {:?} and {:?} share {}, {:?} decodes as {:?}\n",
                collision.kept,
                collision.shadowed,
                collision.color,
                collision.shadowed,
                collision.kept
            ));
        }
    }
    out
}
