/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use clap::ArgMatches;
use log::warn;
use textpix_colormap::textpix_core::options::DecoderOptions;

use crate::cmd_parsers::get_decoder_options;
use crate::codecs::ImageFormat;
use crate::errors::CliErrors;
use crate::file_io::read_file;
use crate::serde::ProbeMetadata;

/// Read the headers of `file` and describe it as JSON
pub fn probe_file(file: &Path, options: DecoderOptions) -> Result<String, CliErrors> {
    let contents = read_file(file)?;

    let format = ImageFormat::guess_format(&contents).ok_or_else(|| {
        CliErrors::GenericString(format!("{file:?} is not a ppm, pam, png or jpeg image"))
    })?;
    let info = format.read_headers(&contents, options)?;

    let metadata = ProbeMetadata::new(
        file,
        contents.len() as u64,
        info.format,
        (info.width, info.height),
        info.colorspace
    );
    Ok(serde_json::to_string_pretty(&metadata)?)
}

/// Probe input files, extract metadata, and print to standard output.
///
/// Files that cannot be probed are reported and skipped.
pub fn probe_input_files(args: &ArgMatches) -> Result<(), CliErrors> {
    let options = get_decoder_options(args);

    for in_file in args.get_many::<std::path::PathBuf>("in").into_iter().flatten() {
        if !in_file.exists() {
            warn!("Path {in_file:?} does not exist, skipping");
            continue;
        }
        match probe_file(in_file, options) {
            Ok(json) => println!("{json}"),
            Err(err) => warn!("Could not probe {in_file:?}, reason {err:?}")
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use textpix_colormap::textpix_core::colorspace::ColorSpace;
    use textpix_colormap::textpix_core::options::{DecoderOptions, EncoderOptions};
    use textpix_colormap::{encode_text, Algorithm};
    use textpix_ppm::PPMEncoder;

    use crate::codecs::ImageFormat;
    use crate::probe_files::probe_file;
    use crate::workflow::tests::temp_path;

    #[test]
    fn test_probe_pam() {
        let path = temp_path("probe.pam");
        let pixels = [7; 2 * 3 * 4];
        let encoded = PPMEncoder::new(&pixels, EncoderOptions::new(2, 3, ColorSpace::RGBA))
            .encode()
            .unwrap();
        std::fs::write(&path, &encoded).unwrap();

        let json = probe_file(&path, DecoderOptions::new_cmd()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["width"], 2);
        assert_eq!(value["height"], 3);
        assert_eq!(value["format"], "P7");
        assert_eq!(value["file_size"], encoded.len() as u64);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_probe_png() {
        let path = temp_path("probe.png");
        let image = encode_text(Algorithm::Semantic, "probe me", ColorSpace::RGB).unwrap();
        std::fs::write(&path, ImageFormat::PNG.encode(&image).unwrap()).unwrap();

        let json = probe_file(&path, DecoderOptions::new_cmd()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["format"], "PNG");
        assert_eq!(value["colorspace"], "RGB");
        assert_eq!(value["capacity"], 9);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_probe_garbage() {
        let path = temp_path("probe.txt");
        std::fs::write(&path, b"not an image").unwrap();

        assert!(probe_file(&path, DecoderOptions::new_cmd()).is_err());

        std::fs::remove_file(&path).unwrap();
    }
}
