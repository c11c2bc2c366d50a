/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoder and encoder options
//!
//! The same options are shared by every image container the
//! textpix crates read and write.

use crate::colorspace::ColorSpace;

/// Decoder options
///
/// To remove the annoyance of getters and setters
/// all exposed options are declared public.
#[derive(Debug, Copy, Clone)]
pub struct DecoderOptions {
    /// Maximum width for which decoders will
    /// not try to decode images larger than
    /// the specified width.
    ///
    /// - Default value: 16384
    pub max_width:   usize,
    /// Maximum height for which decoders will not
    /// try to decode images larger than the
    /// specified height
    ///
    /// - Default value: 16384
    pub max_height:  usize,
    /// Treat some warnings as errors
    ///
    /// When set to false, recoverable problems (e.g. trailing bytes
    /// after the pixel data) are logged and ignored.
    ///
    /// When set to true, they are returned as errors.
    ///
    /// - Default value: false
    pub strict_mode: bool
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_width:   1 << 14,
            max_height:  1 << 14,
            strict_mode: false
        }
    }
}

impl DecoderOptions {
    /// Options used by the command line front end, which lifts the
    /// dimension limits since the user explicitly asked for the file
    pub fn new_cmd() -> DecoderOptions {
        DecoderOptions::default()
            .set_max_width(1 << 20)
            .set_max_height(1 << 20)
    }

    pub const fn get_max_width(&self) -> usize {
        self.max_width
    }

    pub const fn get_max_height(&self) -> usize {
        self.max_height
    }

    pub const fn get_strict_mode(&self) -> bool {
        self.strict_mode
    }

    /// Set maximum width for which the decoder should not try
    /// decoding images greater than that width
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set maximum height for which the decoder should not try
    /// decoding images greater than that height
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    pub fn set_strict_mode(mut self, yes: bool) -> Self {
        self.strict_mode = yes;
        self
    }
}

/// Options shared by the encoders
#[derive(Debug, Copy, Clone)]
pub struct EncoderOptions {
    width:      usize,
    height:     usize,
    colorspace: ColorSpace
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            width:      0,
            height:     0,
            colorspace: ColorSpace::RGBA
        }
    }
}

impl EncoderOptions {
    /// Create new encode options
    ///
    /// # Arguments
    ///
    /// * `width`: Image width
    /// * `height`: Image height
    /// * `colorspace`: Image colorspace
    pub const fn new(width: usize, height: usize, colorspace: ColorSpace) -> EncoderOptions {
        EncoderOptions {
            width,
            height,
            colorspace
        }
    }

    /// Get the width for which the image will be encoded in
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Get height for which the image will be encoded in
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Get the colorspace for which the image will be encoded in
    pub const fn colorspace(&self) -> ColorSpace {
        self.colorspace
    }

    /// Number of bytes the pixel data of an image with these options occupies
    ///
    /// Returns `None` if the product overflows a `usize`
    pub const fn expected_len(&self) -> Option<usize> {
        match self.width.checked_mul(self.height) {
            Some(pixels) => pixels.checked_mul(self.colorspace.num_components()),
            None => None
        }
    }
}
