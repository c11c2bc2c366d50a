/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};
use std::io;
use std::io::Write;

use textpix_core::colorspace::ColorSpace;
use textpix_core::log::trace;
use textpix_core::options::EncoderOptions;

/// Errors occurring during encoding
pub enum PPMErrors {
    Static(&'static str),
    /// Expected length and the length of the data given
    WrongInputLength(usize, usize),
    UnsupportedColorspace(ColorSpace),
    IOErrors(io::Error)
}

impl From<io::Error> for PPMErrors {
    fn from(err: io::Error) -> Self {
        PPMErrors::IOErrors(err)
    }
}

impl Debug for PPMErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PPMErrors::Static(errors) => {
                writeln!(f, "{errors}")
            }
            PPMErrors::WrongInputLength(expected, found) => {
                writeln!(f, "Expected input of length {expected} but found {found}")
            }
            PPMErrors::UnsupportedColorspace(colorspace) => {
                writeln!(f, "Unsupported colorspace {colorspace:?} for ppm")
            }
            PPMErrors::IOErrors(err) => {
                writeln!(f, "{err}")
            }
        }
    }
}

impl Display for PPMErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for PPMErrors {}

/// Netpbm formats this crate reads and writes
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PPMVersions {
    /// Binary portable pixmap, RGB
    P6,
    /// Portable arbitrary map, RGB or RGB_ALPHA
    P7
}

impl Display for PPMVersions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::P6 => write!(f, "P6"),
            Self::P7 => write!(f, "P7")
        }
    }
}

/// The format an image in `colorspace` is stored as, or `None` if it
/// cannot be stored
pub const fn version_for_colorspace(colorspace: ColorSpace) -> Option<PPMVersions> {
    match colorspace {
        ColorSpace::RGB => Some(PPMVersions::P6),
        ColorSpace::RGBA => Some(PPMVersions::P7),
        _ => None
    }
}

/// File extension conventionally used for `colorspace`
pub const fn extension_for_colorspace(colorspace: ColorSpace) -> Option<&'static str> {
    match version_for_colorspace(colorspace) {
        Some(PPMVersions::P6) => Some("ppm"),
        Some(PPMVersions::P7) => Some("pam"),
        None => None
    }
}

fn convert_tuple_type_to_pam(colorspace: ColorSpace) -> Result<&'static str, PPMErrors> {
    match colorspace {
        ColorSpace::RGB => Ok("RGB"),
        ColorSpace::RGBA => Ok("RGB_ALPHA"),
        _ => Err(PPMErrors::UnsupportedColorspace(colorspace))
    }
}

const MAX_VAL: usize = 255;

/// A PPM encoder
///
/// The format is picked from the colorspace, see [`version_for_colorspace`]
pub struct PPMEncoder<'a> {
    data:    &'a [u8],
    options: EncoderOptions
}

impl<'a> PPMEncoder<'a> {
    /// Create a new encoder which will encode the specified
    /// data whose format is contained in the options.
    pub fn new(data: &'a [u8], options: EncoderOptions) -> PPMEncoder<'a> {
        PPMEncoder { data, options }
    }

    fn encode_headers(&self) -> Result<String, PPMErrors> {
        let colorspace = self.options.colorspace();
        let version = version_for_colorspace(colorspace)
            .ok_or(PPMErrors::UnsupportedColorspace(colorspace))?;

        let width = self.options.width();
        let height = self.options.height();
        let components = colorspace.num_components();

        let header = match version {
            PPMVersions::P6 => {
                format!("{version}\n{width}\n{height}\n{MAX_VAL}\n")
            }
            PPMVersions::P7 => {
                let tuple_type = convert_tuple_type_to_pam(colorspace)?;

                format!(
                    "P7\nWIDTH {width}\nHEIGHT {height}\nDEPTH {components}\nMAXVAL {MAX_VAL}\nTUPLTYPE {tuple_type}\nENDHDR\n",
                )
            }
        };
        trace!("Writing {version} header for {width}x{height} {colorspace:?} image");

        Ok(header)
    }

    fn check_length(&self) -> Result<(), PPMErrors> {
        let expected = self
            .options
            .expected_len()
            .ok_or(PPMErrors::Static("Image dimensions overflow"))?;
        let found = self.data.len();

        if expected != found {
            return Err(PPMErrors::WrongInputLength(expected, found));
        }
        Ok(())
    }

    /// Encode the image into a new buffer
    pub fn encode(&self) -> Result<Vec<u8>, PPMErrors> {
        self.check_length()?;

        let header = self.encode_headers()?;

        let mut out = Vec::with_capacity(header.len() + self.data.len());

        out.extend_from_slice(header.as_bytes());
        out.extend_from_slice(self.data);

        Ok(out)
    }

    /// Encode the image and write it to `writer`
    pub fn encode_to<W: Write>(&self, writer: &mut W) -> Result<(), PPMErrors> {
        self.check_length()?;

        let header = self.encode_headers()?;

        writer.write_all(header.as_bytes())?;
        writer.write_all(self.data)?;

        Ok(())
    }
}
