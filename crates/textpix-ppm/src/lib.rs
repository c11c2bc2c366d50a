/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A PPM and PAM encoder and decoder
//!
//! Only the subset textpix images need is supported, 8 bit `RGB` images
//! stored as `P6` and 8 bit `RGBA` images stored as `P7` with a
//! `RGB_ALPHA` tuple type.
//!
//! # Example
//! ```
//! use textpix_core::colorspace::ColorSpace;
//! use textpix_core::options::EncoderOptions;
//! use textpix_ppm::{PPMDecoder, PPMEncoder};
//!
//! let pixels = [255, 0, 0, 0, 255, 0];
//! let options = EncoderOptions::new(2, 1, ColorSpace::RGB);
//! let encoded = PPMEncoder::new(&pixels, options).encode().unwrap();
//!
//! let mut decoder = PPMDecoder::new(&encoded);
//! assert_eq!(decoder.decode().unwrap(), pixels);
//! assert_eq!(decoder.get_dimensions(), Some((2, 1)));
//! ```
pub use crate::decoder::*;
pub use crate::encoder::*;

mod decoder;
mod encoder;
