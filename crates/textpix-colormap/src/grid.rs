/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Laying text out as a square image
//!
//! A text of `n` characters becomes a `s x s` image with
//! `s = ceil(sqrt(n))`, written row-major. Cells past the end of the text
//! hold the color of [`PADDING_CHAR`].
use textpix_core::charset::{is_printable, PADDING_CHAR};
use textpix_core::colorspace::ColorSpace;
/// Colorspaces text can be encoded to and decoded from
pub use textpix_core::colorspace::ALL_COLORSPACES as SUPPORTED_COLORSPACES;
use textpix_core::log::{debug, trace};

use crate::algorithms::Algorithm;
use crate::errors::ColorMapErrors;

/// Alpha value written for every pixel of an `RGBA` image
pub const OPAQUE: u8 = 255;

/// Side length of the square image holding `text_len` characters,
/// `ceil(sqrt(text_len))`
///
/// Computed in integers, so it is exact for every `usize`.
pub fn grid_size_for(text_len: usize) -> usize {
    if text_len == 0 {
        return 0;
    }
    // floating point gets us within one of the answer
    let mut side = (text_len as f64).sqrt() as usize;

    while side.saturating_mul(side) < text_len {
        side += 1;
    }
    while side > 1 && (side - 1).saturating_mul(side - 1) >= text_len {
        side -= 1;
    }
    side
}

/// A text rendered as pixels
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EncodedImage {
    width:      usize,
    height:     usize,
    colorspace: ColorSpace,
    char_count: usize,
    pixels:     Vec<u8>
}

impl EncodedImage {
    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn colorspace(&self) -> ColorSpace {
        self.colorspace
    }

    /// Number of characters of the source text, excluding padding
    pub const fn char_count(&self) -> usize {
        self.char_count
    }

    /// Interleaved pixel data, row-major
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Whether the image has no pixels, which is the case for an empty text
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}

/// Render `text` as a square image
///
/// Characters are taken as Unicode scalar values, anything outside the
/// printable ASCII range is clamped. An empty text gives an empty image.
///
/// # Errors
/// If `colorspace` is not one of [`SUPPORTED_COLORSPACES`]
pub fn encode_text(
    algorithm: Algorithm, text: &str, colorspace: ColorSpace
) -> Result<EncodedImage, ColorMapErrors> {
    if !SUPPORTED_COLORSPACES.contains(&colorspace) {
        return Err(ColorMapErrors::UnsupportedColorspace(
            colorspace,
            &SUPPORTED_COLORSPACES
        ));
    }
    let char_count = text.chars().count();
    let side = grid_size_for(char_count);
    let cells = side * side;
    let components = colorspace.num_components();

    debug!("Encoding {char_count} characters into a {side}x{side} image using {algorithm}");

    let clamped = text.chars().filter(|c| !is_printable(*c)).count();

    if clamped > 0 {
        debug!("{clamped} characters outside printable ASCII will be clamped");
    }
    trace!("{} padding cells", cells - char_count);

    let padding = algorithm.forward(PADDING_CHAR);
    let mut pixels = Vec::with_capacity(cells * components);

    let colors = text
        .chars()
        .map(|c| algorithm.forward(c))
        .chain(core::iter::repeat(padding))
        .take(cells);

    for color in colors {
        match colorspace {
            ColorSpace::RGBA => pixels.extend_from_slice(&color.to_rgba(OPAQUE)),
            _ => pixels.extend_from_slice(&color.to_array())
        }
    }

    Ok(EncodedImage {
        width: side,
        height: side,
        colorspace,
        char_count,
        pixels
    })
}

#[cfg(test)]
mod tests {
    use textpix_core::colorspace::ColorSpace;

    use crate::algorithms::Algorithm;
    use crate::errors::ColorMapErrors;
    use crate::grid::{encode_text, grid_size_for};

    #[test]
    fn test_grid_size_law() {
        assert_eq!(grid_size_for(0), 0);
        assert_eq!(grid_size_for(1), 1);
        assert_eq!(grid_size_for(2), 2);
        assert_eq!(grid_size_for(4), 2);
        assert_eq!(grid_size_for(10), 4);
        assert_eq!(grid_size_for(16), 4);
        assert_eq!(grid_size_for(17), 5);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_grid_size_exact_for_large_values() {
        for side in [1_000_usize, 65_535, 65_536, 3_037_000_499] {
            let square = side * side;
            assert_eq!(grid_size_for(square), side);
            assert_eq!(grid_size_for(square - 1), side);
            assert_eq!(grid_size_for(square + 1), side + 1);
        }
        assert_eq!(grid_size_for(usize::MAX), 4_294_967_296);
    }

    #[test]
    fn test_empty_text() {
        let image = encode_text(Algorithm::Hsl, "", ColorSpace::RGBA).unwrap();

        assert!(image.is_empty());
        assert_eq!(image.dimensions(), (0, 0));
        assert_eq!(image.char_count(), 0);
    }

    #[test]
    fn test_padding_and_alpha() {
        let image = encode_text(Algorithm::Semantic, "Hi!", ColorSpace::RGBA).unwrap();

        assert_eq!(image.dimensions(), (2, 2));
        assert_eq!(image.pixels().len(), 2 * 2 * 4);
        // last cell is padding, a space, which is gray in this mapping
        assert_eq!(&image.pixels()[12..], &[200, 200, 200, 255]);
        assert!(image.pixels().chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn test_rgb_layout() {
        let image = encode_text(Algorithm::Hsl, "H", ColorSpace::RGB).unwrap();

        assert_eq!(image.pixels(), &[38, 217, 137]);
    }

    #[test]
    fn test_unsupported_colorspace() {
        let result = encode_text(Algorithm::Hsl, "abc", ColorSpace::Unknown);

        assert!(matches!(
            result,
            Err(ColorMapErrors::UnsupportedColorspace(ColorSpace::Unknown, _))
        ));
    }
}
