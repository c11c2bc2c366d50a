/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};
use std::io;

use textpix_colormap::ColorMapErrors;
use textpix_ppm::{PPMDecodeErrors, PPMErrors};

/// Everything that can stop a subcommand
pub enum CliErrors {
    IoErrors(io::Error),
    ColorMap(ColorMapErrors),
    EncodeErrors(PPMErrors),
    DecodeErrors(PPMDecodeErrors),
    PngDecodeErrors(zune_png::error::PngDecodeErrors),
    JpegDecodeErrors(zune_jpeg::errors::DecodeErrors),
    Metadata(serde_json::Error),
    GenericString(String)
}

impl Debug for CliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoErrors(err) => writeln!(f, "I/O error: {err}"),
            Self::ColorMap(err) => writeln!(f, "{err:?}"),
            Self::EncodeErrors(err) => writeln!(f, "Could not encode image: {err:?}"),
            Self::DecodeErrors(err) => writeln!(f, "Could not decode image: {err:?}"),
            Self::PngDecodeErrors(err) => writeln!(f, "Could not decode png: {err:?}"),
            Self::JpegDecodeErrors(err) => writeln!(f, "Could not decode jpeg: {err:?}"),
            Self::Metadata(err) => writeln!(f, "Invalid metadata: {err}"),
            Self::GenericString(err) => writeln!(f, "{err}")
        }
    }
}

impl Display for CliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for CliErrors {}

impl From<io::Error> for CliErrors {
    fn from(err: io::Error) -> Self {
        Self::IoErrors(err)
    }
}

impl From<ColorMapErrors> for CliErrors {
    fn from(err: ColorMapErrors) -> Self {
        Self::ColorMap(err)
    }
}

impl From<PPMErrors> for CliErrors {
    fn from(err: PPMErrors) -> Self {
        Self::EncodeErrors(err)
    }
}

impl From<PPMDecodeErrors> for CliErrors {
    fn from(err: PPMDecodeErrors) -> Self {
        Self::DecodeErrors(err)
    }
}

impl From<zune_png::error::PngDecodeErrors> for CliErrors {
    fn from(err: zune_png::error::PngDecodeErrors) -> Self {
        Self::PngDecodeErrors(err)
    }
}

impl From<zune_jpeg::errors::DecodeErrors> for CliErrors {
    fn from(err: zune_jpeg::errors::DecodeErrors) -> Self {
        Self::JpegDecodeErrors(err)
    }
}

impl From<serde_json::Error> for CliErrors {
    fn from(err: serde_json::Error) -> Self {
        Self::Metadata(err)
    }
}

impl From<String> for CliErrors {
    fn from(err: String) -> Self {
        Self::GenericString(err)
    }
}
