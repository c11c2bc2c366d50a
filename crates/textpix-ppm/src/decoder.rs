/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};

use textpix_core::bytestream::ZByteReader;
use textpix_core::colorspace::ColorSpace;
use textpix_core::log::{info, warn};
use textpix_core::options::DecoderOptions;

use crate::encoder::PPMVersions;

/// An instance of a PPM decoder
///
/// The decoder can decode 8 bit P6 and P7 images
pub struct PPMDecoder<'a> {
    width:           usize,
    height:          usize,
    decoded_headers: bool,
    reader:          ZByteReader<'a>,
    colorspace:      ColorSpace,
    version:         PPMVersions,
    options:         DecoderOptions
}

pub enum PPMDecodeErrors {
    Generic(String),
    GenericStatic(&'static str),
    InvalidHeader(String),
    UnsupportedImpl(String),
    /// Maximum allowed and the value found
    LargeDimensions(usize, usize),
    /// Expected pixel bytes and what the stream has
    InsufficientData(usize, usize),
    /// Expected pixel bytes and what the stream has
    TrailingData(usize, usize)
}

impl Debug for PPMDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Generic(val) => {
                writeln!(f, "{val}")
            }
            Self::GenericStatic(val) => writeln!(f, "{val}"),
            Self::InvalidHeader(val) => {
                writeln!(f, "Invalid header, reason: {val}")
            }
            Self::UnsupportedImpl(val) => {
                writeln!(f, "Unsupported image, reason: {val}")
            }
            Self::LargeDimensions(expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions, expected a value less than {expected} but found {found}"
                )
            }
            Self::InsufficientData(expected, found) => {
                writeln!(
                    f,
                    "Not enough pixel data, expected {expected} bytes but found {found}"
                )
            }
            Self::TrailingData(expected, found) => {
                writeln!(
                    f,
                    "Trailing bytes after pixel data, expected {expected} bytes but found {found}"
                )
            }
        }
    }
}

impl Display for PPMDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for PPMDecodeErrors {}

impl<'a> PPMDecoder<'a> {
    /// Create a new ppm decoder with default options
    ///
    /// # Example
    /// ```
    /// use textpix_ppm::PPMDecoder;
    /// let mut decoder = PPMDecoder::new(b"NOT VALID PPM");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(data: &'a [u8]) -> PPMDecoder<'a> {
        PPMDecoder::new_with_options(DecoderOptions::default(), data)
    }

    /// Create a new PPM decoder with the specified options
    ///
    /// # Example
    /// ```
    /// use textpix_core::options::DecoderOptions;
    /// use textpix_ppm::PPMDecoder;
    ///
    /// let options = DecoderOptions::default().set_max_width(1);
    /// let mut decoder = PPMDecoder::new_with_options(options, b"P6 2 1 255\n\0\0\0\0\0\0");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new_with_options(options: DecoderOptions, data: &'a [u8]) -> PPMDecoder<'a> {
        PPMDecoder {
            width: 0,
            height: 0,
            decoded_headers: false,
            reader: ZByteReader::new(data),
            colorspace: ColorSpace::Unknown,
            version: PPMVersions::P6,
            options
        }
    }

    /// Read PPM headers and store them in internal state
    ///
    /// Calling this more than once is a no-op
    pub fn read_headers(&mut self) -> Result<(), PPMDecodeErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        if !self.reader.has(3) {
            let len = self.reader.remaining();
            let msg = format!("Expected at least 3 bytes in header but stream has {len}");

            return Err(PPMDecodeErrors::Generic(msg));
        }
        let p = self.reader.get_u8();
        let version = self.reader.get_u8();

        if p != b'P' {
            let msg = format!("Expected P as first PPM byte but got '{}' ", p as char);

            return Err(PPMDecodeErrors::Generic(msg));
        }
        match version {
            b'6' => self.decode_p6_header()?,
            b'7' => self.decode_p7_header()?,
            _ => {
                let msg = format!(
                    "Unsupported PPM version `{}`, supported versions are 6 and 7",
                    version as char
                );
                return Err(PPMDecodeErrors::UnsupportedImpl(msg));
            }
        }
        info!("Format: {}", self.version);
        info!("Width: {}, height: {}", self.width, self.height);
        info!("Colorspace: {:?}", self.colorspace);

        self.decoded_headers = true;

        Ok(())
    }

    fn decode_p6_header(&mut self) -> Result<(), PPMDecodeErrors> {
        self.version = PPMVersions::P6;
        self.colorspace = ColorSpace::RGB;

        skip_spaces(&mut self.reader);
        self.width = self.get_integer("width")?;
        self.check_width()?;

        skip_spaces(&mut self.reader);
        self.height = self.get_integer("height")?;
        self.check_height()?;

        skip_spaces(&mut self.reader);
        let max_value = self.get_integer("max value")?;
        check_max_value(max_value)?;

        // exactly one whitespace byte separates the header from pixels,
        // which may themselves start with whitespace values
        match self.reader.get_u8_err() {
            Ok(byte) if byte.is_ascii_whitespace() => Ok(()),
            _ => Err(PPMDecodeErrors::GenericStatic(
                "Expected a whitespace after the max value"
            ))
        }
    }

    fn decode_p7_header(&mut self) -> Result<(), PPMDecodeErrors> {
        self.version = PPMVersions::P7;

        let mut depth = None;
        let mut seen_width = false;
        let mut seen_height = false;
        let mut seen_max_val = false;
        let mut tuple_type = None;

        loop {
            skip_spaces(&mut self.reader);

            if self.reader.eof() {
                return Err(PPMDecodeErrors::GenericStatic(
                    "Stream ended before ENDHDR"
                ));
            }
            let token = get_token(&mut self.reader);

            match token {
                b"WIDTH" => {
                    skip_spaces(&mut self.reader);
                    self.width = self.get_integer("width")?;
                    self.check_width()?;
                    seen_width = true;
                }
                b"HEIGHT" => {
                    skip_spaces(&mut self.reader);
                    self.height = self.get_integer("height")?;
                    self.check_height()?;
                    seen_height = true;
                }
                b"DEPTH" => {
                    skip_spaces(&mut self.reader);
                    depth = Some(self.get_integer("depth")?);
                }
                b"MAXVAL" => {
                    skip_spaces(&mut self.reader);
                    check_max_value(self.get_integer("max value")?)?;
                    seen_max_val = true;
                }
                b"TUPLTYPE" => {
                    skip_spaces(&mut self.reader);
                    let value = get_token(&mut self.reader);

                    let colorspace = match value {
                        b"RGB" => ColorSpace::RGB,
                        b"RGB_ALPHA" => ColorSpace::RGBA,
                        _ => {
                            let msg = format!(
                                "Unknown/unsupported tuple type {}",
                                String::from_utf8_lossy(value)
                            );
                            return Err(PPMDecodeErrors::UnsupportedImpl(msg));
                        }
                    };
                    tuple_type = Some(colorspace);
                }
                b"ENDHDR" => {
                    // the single newline ending the header
                    match self.reader.get_u8_err() {
                        Ok(b'\n') => break,
                        _ => {
                            return Err(PPMDecodeErrors::GenericStatic(
                                "Expected a newline after ENDHDR"
                            ))
                        }
                    }
                }
                _ => {
                    let msg = format!(
                        "Unknown/unsupported header declaration {}",
                        String::from_utf8_lossy(token)
                    );
                    return Err(PPMDecodeErrors::InvalidHeader(msg));
                }
            }
        }
        let (Some(depth), Some(colorspace), true, true, true) =
            (depth, tuple_type, seen_width, seen_height, seen_max_val)
        else {
            return Err(PPMDecodeErrors::GenericStatic(
                "Not all expected headers were found"
            ));
        };
        if depth != colorspace.num_components() {
            let msg = format!(
                "Depth {depth} does not match tuple type {colorspace:?} with {} channels",
                colorspace.num_components()
            );
            return Err(PPMDecodeErrors::InvalidHeader(msg));
        }
        self.colorspace = colorspace;

        Ok(())
    }

    fn check_width(&self) -> Result<(), PPMDecodeErrors> {
        if self.width > self.options.get_max_width() {
            return Err(PPMDecodeErrors::LargeDimensions(
                self.options.get_max_width(),
                self.width
            ));
        }
        Ok(())
    }

    fn check_height(&self) -> Result<(), PPMDecodeErrors> {
        if self.height > self.options.get_max_height() {
            return Err(PPMDecodeErrors::LargeDimensions(
                self.options.get_max_height(),
                self.height
            ));
        }
        Ok(())
    }

    fn get_integer(&mut self, field: &str) -> Result<usize, PPMDecodeErrors> {
        let mut value = 0_usize;
        let mut digits = 0;

        while !self.reader.eof() {
            let byte = self.reader.get_u8();

            if byte.is_ascii_digit() {
                value = value
                    .checked_mul(10)
                    .and_then(|x| x.checked_add(usize::from(byte - b'0')))
                    .ok_or_else(|| {
                        PPMDecodeErrors::InvalidHeader(format!("The {field} overflows"))
                    })?;
                digits += 1;
            } else {
                // rewind to the previous byte
                self.reader.rewind(1);
                break;
            }
        }
        if digits == 0 {
            let msg = format!("Expected a number for the {field}");
            return Err(PPMDecodeErrors::InvalidHeader(msg));
        }
        Ok(value)
    }

    /// Return the image colorspace or none if
    /// headers aren't decoded
    pub const fn get_colorspace(&self) -> Option<ColorSpace> {
        if self.decoded_headers {
            Some(self.colorspace)
        } else {
            None
        }
    }

    /// Return image dimensions or none if headers aren't decoded
    pub const fn get_dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            Some((self.width, self.height))
        } else {
            None
        }
    }

    /// Return the format of the image or none if headers aren't decoded
    pub const fn get_version(&self) -> Option<PPMVersions> {
        if self.decoded_headers {
            Some(self.version)
        } else {
            None
        }
    }

    /// Decode a ppm encoded file and return the pixels in it
    ///
    /// Bytes after the pixel data are an error in strict mode and ignored
    /// otherwise.
    pub fn decode(&mut self) -> Result<Vec<u8>, PPMDecodeErrors> {
        self.read_headers()?;

        let size = self
            .width
            .checked_mul(self.height)
            .and_then(|x| x.checked_mul(self.colorspace.num_components()))
            .ok_or(PPMDecodeErrors::GenericStatic("Image dimensions overflow"))?;

        let remaining = self.reader.remaining();

        if remaining < size {
            return Err(PPMDecodeErrors::InsufficientData(size, remaining));
        }
        if remaining > size {
            if self.options.get_strict_mode() {
                return Err(PPMDecodeErrors::TrailingData(size, remaining));
            }
            warn!("Ignoring {} bytes after pixel data", remaining - size);
        }
        let data = self
            .reader
            .get_as_ref(size)
            .map_err(PPMDecodeErrors::GenericStatic)?;

        Ok(data.to_vec())
    }
}

/// Skip all whitespace characters and comments
/// until one hits a character that isn't a space or
/// we reach eof
fn skip_spaces(byte_stream: &mut ZByteReader) {
    while !byte_stream.eof() {
        let mut byte = byte_stream.get_u8();

        if byte == b'#' {
            // skip the whole comment
            while byte != b'\n' && !byte_stream.eof() {
                byte = byte_stream.get_u8();
            }
        } else if !byte.is_ascii_whitespace() {
            // go back one step, we hit something that is not a space
            byte_stream.rewind(1);
            break;
        }
    }
}

/// Return all bytes up to, not including, the next whitespace
///
/// The whitespace itself is not consumed.
fn get_token<'a>(z: &mut ZByteReader<'a>) -> &'a [u8] {
    let start = z.get_position();

    while !z.eof() {
        if z.get_u8().is_ascii_whitespace() {
            z.rewind(1);
            break;
        }
    }
    let length = z.get_position() - start;

    z.rewind(length);
    z.get_as_ref(length).unwrap_or(&[])
}

fn check_max_value(max_value: usize) -> Result<(), PPMDecodeErrors> {
    if max_value != 255 {
        let msg = format!("Max value {max_value} is not supported, only 8 bit (255) images are");
        return Err(PPMDecodeErrors::UnsupportedImpl(msg));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use textpix_core::colorspace::ColorSpace;
    use textpix_core::options::DecoderOptions;

    use crate::decoder::{PPMDecodeErrors, PPMDecoder};
    use crate::encoder::PPMVersions;

    #[test]
    fn test_p6_with_comments() {
        let data = b"P6\n# made by hand\n2 # width\n1\n255\n\x01\x02\x03\x04\x05\x06";
        let mut decoder = PPMDecoder::new(data);

        assert_eq!(decoder.get_dimensions(), None);
        assert_eq!(decoder.decode().unwrap(), [1, 2, 3, 4, 5, 6]);
        assert_eq!(decoder.get_dimensions(), Some((2, 1)));
        assert_eq!(decoder.get_colorspace(), Some(ColorSpace::RGB));
        assert_eq!(decoder.get_version(), Some(PPMVersions::P6));
    }

    #[test]
    fn test_p6_pixels_starting_with_whitespace() {
        let data = b"P6 1 1 255\n\n \t";
        let mut decoder = PPMDecoder::new(data);

        assert_eq!(decoder.decode().unwrap(), b"\n \t");
    }

    #[test]
    fn test_p7_rgba() {
        let data = b"P7\nWIDTH 1\nHEIGHT 1\nDEPTH 4\nMAXVAL 255\nTUPLTYPE RGB_ALPHA\nENDHDR\n\x0a\x20\x30\xff";
        let mut decoder = PPMDecoder::new(data);

        assert_eq!(decoder.decode().unwrap(), [10, 32, 48, 255]);
        assert_eq!(decoder.get_colorspace(), Some(ColorSpace::RGBA));
        assert_eq!(decoder.get_version(), Some(PPMVersions::P7));
    }

    #[test]
    fn test_p7_missing_headers() {
        let data = b"P7\nWIDTH 1\nHEIGHT 1\nMAXVAL 255\nTUPLTYPE RGB\nENDHDR\n\0\0\0";
        let result = PPMDecoder::new(data).decode();

        assert!(matches!(result, Err(PPMDecodeErrors::GenericStatic(_))));
    }

    #[test]
    fn test_p7_depth_mismatch() {
        let data = b"P7\nWIDTH 1\nHEIGHT 1\nDEPTH 4\nMAXVAL 255\nTUPLTYPE RGB\nENDHDR\n\0\0\0";
        let result = PPMDecoder::new(data).decode();

        assert!(matches!(result, Err(PPMDecodeErrors::InvalidHeader(_))));
    }

    #[test]
    fn test_unsupported_versions() {
        for data in [&b"P5 1 1 255\n\0"[..], b"P3 1 1 255\n0 0 0", b"Q6 1 1 255\n\0\0\0"] {
            assert!(PPMDecoder::new(data).decode().is_err());
        }
    }

    #[test]
    fn test_sixteen_bit_rejected() {
        let result = PPMDecoder::new(b"P6 1 1 65535\n\0\0\0\0\0\0").decode();

        assert!(matches!(result, Err(PPMDecodeErrors::UnsupportedImpl(_))));
    }

    #[test]
    fn test_large_dimensions() {
        let options = DecoderOptions::default().set_max_height(10);
        let result = PPMDecoder::new_with_options(options, b"P6 1 11 255\n").decode();

        assert!(matches!(result, Err(PPMDecodeErrors::LargeDimensions(10, 11))));
    }

    #[test]
    fn test_truncated_data() {
        let result = PPMDecoder::new(b"P6 2 1 255\n\0\0\0\0").decode();

        assert!(matches!(result, Err(PPMDecodeErrors::InsufficientData(6, 4))));
    }

    #[test]
    fn test_trailing_data() {
        let data = b"P6 1 1 255\n\x01\x02\x03\x04";

        assert_eq!(PPMDecoder::new(data).decode().unwrap(), [1, 2, 3]);

        let options = DecoderOptions::default().set_strict_mode(true);
        let result = PPMDecoder::new_with_options(options, data).decode();

        assert!(matches!(result, Err(PPMDecodeErrors::TrailingData(3, 4))));
    }

    #[test]
    fn test_missing_number() {
        let result = PPMDecoder::new(b"P6 x 1 255\n\0\0\0").decode();

        assert!(matches!(result, Err(PPMDecodeErrors::InvalidHeader(_))));
    }

    #[test]
    fn test_empty_image() {
        let mut decoder = PPMDecoder::new(b"P6\n0\n0\n255\n");

        assert!(decoder.decode().unwrap().is_empty());
        assert_eq!(decoder.get_dimensions(), Some((0, 0)));
    }
}
