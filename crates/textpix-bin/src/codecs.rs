/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image formats text images are read from and written to
//!
//! PPM/PAM is handled by `textpix-ppm`, PNG and JPEG by the zune codecs.
//! JPEG can only be decoded, it is lossy and would not give back the
//! colors a text was written with.
use log::{debug, trace};
use textpix_colormap::textpix_core::colorspace::ColorSpace;
use textpix_colormap::textpix_core::options::{DecoderOptions, EncoderOptions};
use textpix_colormap::EncodedImage;
use textpix_ppm::{PPMDecoder, PPMEncoder, PPMVersions};
use zune_core::bit_depth::BitDepth;
use zune_core::colorspace::ColorSpace as ZColorSpace;
use zune_core::options::{DecoderOptions as ZDecoderOptions, EncoderOptions as ZEncoderOptions};
use zune_core::result::DecodingResult;
use zune_jpeg::JpegDecoder;
use zune_png::{PngDecoder, PngEncoder};

use crate::errors::CliErrors;

/// Supported image formats
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ImageFormat {
    /// Netpbm P6 and P7 images
    PPM,
    PNG,
    /// Decode only
    JPEG
}

const MAGIC_BYTES: [(&[u8], ImageFormat); 4] = [
    (&[137, 80, 78, 71, 13, 10, 26, 10], ImageFormat::PNG),
    // some jpegs do not carry the third 0xff byte
    (&[0xff, 0xd8], ImageFormat::JPEG),
    (b"P6", ImageFormat::PPM),
    (b"P7", ImageFormat::PPM)
];

/// Header information shared by every format
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ImageInfo {
    /// Short name of the exact format, e.g. `P7` or `PNG`
    pub format:     &'static str,
    pub width:      usize,
    pub height:     usize,
    pub colorspace: ColorSpace
}

/// Pixels of a decoded image, always 8 bits per channel
pub struct DecodedImage {
    pub info:   ImageInfo,
    pub pixels: Vec<u8>
}

impl ImageFormat {
    /// Identify the format of `bytes` from its first few bytes
    pub fn guess_format(bytes: &[u8]) -> Option<ImageFormat> {
        MAGIC_BYTES
            .iter()
            .find(|(magic, _)| bytes.starts_with(magic))
            .map(|(_, format)| *format)
    }

    /// Pick a format from a file extension, case insensitive
    pub fn encoder_for_extension(extension: &str) -> Option<ImageFormat> {
        match extension.to_ascii_lowercase().as_str() {
            "ppm" | "pam" => Some(ImageFormat::PPM),
            "png" => Some(ImageFormat::PNG),
            "jpg" | "jpeg" => Some(ImageFormat::JPEG),
            _ => None
        }
    }

    pub const fn has_encoder(self) -> bool {
        matches!(self, ImageFormat::PPM | ImageFormat::PNG)
    }

    /// Encode a text image into this format
    pub fn encode(self, image: &EncodedImage) -> Result<Vec<u8>, CliErrors> {
        let (width, height) = image.dimensions();

        debug!("Encoding a {width}x{height} image as {self:?}");

        match self {
            ImageFormat::PPM => {
                let options = EncoderOptions::new(width, height, image.colorspace());

                Ok(PPMEncoder::new(image.pixels(), options).encode()?)
            }
            ImageFormat::PNG => {
                if image.is_empty() {
                    return Err(CliErrors::GenericString(
                        "PNG cannot store an image without pixels, use ppm for empty texts"
                            .to_string()
                    ));
                }
                let options = ZEncoderOptions::new(
                    width,
                    height,
                    to_zune_colorspace(image.colorspace()),
                    BitDepth::Eight
                );
                let mut encoder = PngEncoder::new(image.pixels(), options);

                Ok(encoder.encode())
            }
            ImageFormat::JPEG => Err(CliErrors::GenericString(
                "JPEG is lossy and cannot be used to store text images, use png or ppm"
                    .to_string()
            ))
        }
    }

    /// Read only the headers of `bytes`
    pub fn read_headers(self, bytes: &[u8], options: DecoderOptions) -> Result<ImageInfo, CliErrors> {
        match self {
            ImageFormat::PPM => {
                let mut decoder = PPMDecoder::new_with_options(options, bytes);
                decoder.read_headers()?;

                ppm_info(&decoder)
            }
            ImageFormat::PNG => {
                let mut decoder = PngDecoder::new_with_options(bytes, to_zune_options(options));
                decoder.decode_headers()?;

                png_info(&decoder)
            }
            ImageFormat::JPEG => {
                let mut decoder = JpegDecoder::new_with_options(bytes, to_zune_options(options));
                decoder.decode_headers()?;

                jpeg_info(&decoder)
            }
        }
    }

    /// Decode `bytes` into 8-bit pixels
    pub fn decode(self, bytes: &[u8], options: DecoderOptions) -> Result<DecodedImage, CliErrors> {
        trace!("Decoding {} bytes as {self:?}", bytes.len());

        match self {
            ImageFormat::PPM => {
                let mut decoder = PPMDecoder::new_with_options(options, bytes);
                let pixels = decoder.decode()?;
                let info = ppm_info(&decoder)?;

                Ok(DecodedImage { info, pixels })
            }
            ImageFormat::PNG => {
                let mut decoder = PngDecoder::new_with_options(bytes, to_zune_options(options));

                let pixels = match decoder.decode()? {
                    DecodingResult::U8(pixels) => pixels,
                    _ => {
                        return Err(CliErrors::GenericString(
                            "PNG decoder did not return 8-bit pixels".to_string()
                        ))
                    }
                };
                let info = png_info(&decoder)?;

                Ok(DecodedImage { info, pixels })
            }
            ImageFormat::JPEG => {
                let mut decoder = JpegDecoder::new_with_options(bytes, to_zune_options(options));
                let pixels = decoder.decode()?;
                let info = jpeg_info(&decoder)?;

                Ok(DecodedImage { info, pixels })
            }
        }
    }
}

fn missing_headers(format: ImageFormat) -> CliErrors {
    CliErrors::GenericString(format!("No headers decoded for {format:?} image"))
}

fn ppm_info(decoder: &PPMDecoder) -> Result<ImageInfo, CliErrors> {
    let (Some(version), Some((width, height)), Some(colorspace)) = (
        decoder.get_version(),
        decoder.get_dimensions(),
        decoder.get_colorspace()
    ) else {
        return Err(missing_headers(ImageFormat::PPM));
    };
    let format = match version {
        PPMVersions::P6 => "P6",
        PPMVersions::P7 => "P7"
    };
    Ok(ImageInfo {
        format,
        width,
        height,
        colorspace
    })
}

fn png_info(decoder: &PngDecoder) -> Result<ImageInfo, CliErrors> {
    let (Some((width, height)), Some(colorspace)) =
        (decoder.get_dimensions(), decoder.get_colorspace())
    else {
        return Err(missing_headers(ImageFormat::PNG));
    };
    Ok(ImageInfo {
        format: "PNG",
        width,
        height,
        colorspace: from_zune_colorspace(colorspace)
    })
}

fn jpeg_info(decoder: &JpegDecoder) -> Result<ImageInfo, CliErrors> {
    let (Some((width, height)), Some(colorspace)) =
        (decoder.dimensions(), decoder.get_output_colorspace())
    else {
        return Err(missing_headers(ImageFormat::JPEG));
    };
    Ok(ImageInfo {
        format: "JPEG",
        width,
        height,
        colorspace: from_zune_colorspace(colorspace)
    })
}

fn to_zune_options(options: DecoderOptions) -> ZDecoderOptions {
    ZDecoderOptions::default()
        .set_max_width(options.get_max_width())
        .set_max_height(options.get_max_height())
        .set_strict_mode(options.get_strict_mode())
        .png_set_strip_to_8bit(true)
        .jpeg_set_out_colorspace(ZColorSpace::RGB)
}

const fn to_zune_colorspace(colorspace: ColorSpace) -> ZColorSpace {
    match colorspace {
        ColorSpace::RGB => ZColorSpace::RGB,
        ColorSpace::RGBA => ZColorSpace::RGBA,
        _ => ZColorSpace::Unknown
    }
}

/// Layouts other than RGB and RGBA come back as `Unknown`, which the
/// text decoder rejects
const fn from_zune_colorspace(colorspace: ZColorSpace) -> ColorSpace {
    match colorspace {
        ZColorSpace::RGB => ColorSpace::RGB,
        ZColorSpace::RGBA => ColorSpace::RGBA,
        _ => ColorSpace::Unknown
    }
}
