/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use textpix_colormap::textpix_core::colorspace::ColorSpace;
use textpix_colormap::{Algorithm, EncodedImage};

/// Sidecar written next to an encoded image
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ImageMetadata {
    /// Id of the algorithm the image was encoded with
    pub algorithm:  String,
    /// Characters in the source text, padding excluded
    #[serde(rename = "charCount")]
    pub char_count: usize,
    pub width:      usize,
    pub height:     usize
}

impl ImageMetadata {
    pub fn new(algorithm: Algorithm, image: &EncodedImage) -> ImageMetadata {
        ImageMetadata {
            algorithm:  algorithm.id().to_string(),
            char_count: image.char_count(),
            width:      image.width(),
            height:     image.height()
        }
    }

    pub fn algorithm(&self) -> Result<Algorithm, crate::errors::CliErrors> {
        Ok(self.algorithm.parse::<Algorithm>()?)
    }
}

/// Header information of a probed image
pub struct ProbeMetadata<'a> {
    file:       &'a Path,
    file_size:  u64,
    format:     &'static str,
    width:      usize,
    height:     usize,
    colorspace: ColorSpace
}

impl<'a> ProbeMetadata<'a> {
    pub fn new(
        file: &'a Path, file_size: u64, format: &'static str, (width, height): (usize, usize),
        colorspace: ColorSpace
    ) -> ProbeMetadata<'a> {
        ProbeMetadata {
            file,
            file_size,
            format,
            width,
            height,
            colorspace
        }
    }
}

impl<'a> Serialize for ProbeMetadata<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("ProbeMetadata", 7)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("file_size", &self.file_size)?;
        state.serialize_field("format", self.format)?;
        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.serialize_field("colorspace", &self.colorspace)?;
        state.serialize_field("capacity", &self.width.saturating_mul(self.height))?;

        state.end()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use textpix_colormap::textpix_core::colorspace::ColorSpace;
    use textpix_colormap::{encode_text, Algorithm};

    use crate::serde::{ImageMetadata, ProbeMetadata};

    #[test]
    fn test_metadata_json() {
        let image = encode_text(Algorithm::Frequency, "Hello World!", ColorSpace::RGB).unwrap();
        let metadata = ImageMetadata::new(Algorithm::Frequency, &image);

        let json = serde_json::to_string(&metadata).unwrap();

        assert_eq!(
            json,
            r#"{"algorithm":"frequency","charCount":12,"width":4,"height":4}"#
        );

        let parsed: ImageMetadata = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, metadata);
        assert_eq!(parsed.algorithm().unwrap(), Algorithm::Frequency);
    }

    #[test]
    fn test_metadata_unknown_algorithm() {
        let json = r#"{"algorithm":"cmyk","charCount":1,"width":1,"height":1}"#;
        let parsed: ImageMetadata = serde_json::from_str(json).unwrap();

        assert!(parsed.algorithm().is_err());
    }

    #[test]
    fn test_probe_json() {
        let probe = ProbeMetadata::new(
            Path::new("a.pam"),
            100,
            "P7",
            (3, 2),
            ColorSpace::RGBA
        );
        let value = serde_json::to_value(&probe).unwrap();

        assert_eq!(value["format"], "P7");
        assert_eq!(value["colorspace"], "RGBA");
        assert_eq!(value["capacity"], 6);
        assert_eq!(value["file"], "a.pam");
    }
}
