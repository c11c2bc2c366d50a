/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Turning a pixel buffer back into text
use textpix_core::color::Rgb;
use textpix_core::colorspace::ColorSpace;
use textpix_core::log::{debug, info, trace};

use crate::algorithms::Algorithm;
use crate::engine::ColorMapper;
use crate::errors::ColorMapErrors;
use crate::grid::SUPPORTED_COLORSPACES;
use crate::matcher::NearestMatcher;
use crate::table::ReverseTable;

/// Below this many pixels decoding stays on the calling thread
#[cfg(feature = "threads")]
const MIN_PIXELS_PER_THREAD: usize = 1 << 15;

/// Coarse grading of a decode's confidence
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ConfidenceLevel {
    /// At least 99% of pixels matched exactly
    High,
    /// At least 90% of pixels matched exactly
    Medium,
    /// Fewer than 90% of pixels matched exactly
    Low
}

impl ConfidenceLevel {
    pub fn from_confidence(confidence: f64) -> ConfidenceLevel {
        if confidence >= 0.99 {
            ConfidenceLevel::High
        } else if confidence >= 0.90 {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ConfidenceLevel::High => "High",
            ConfidenceLevel::Medium => "Medium",
            ConfidenceLevel::Low => "Low"
        }
    }
}

/// Text recovered from an image along with how much of it was exact
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedText {
    raw:           String,
    exact_matches: usize
}

impl DecodedText {
    /// The decoded text with padding removed
    ///
    /// Padding cannot be told apart from spaces at the end of the original
    /// text, so all trailing whitespace is dropped. Use
    /// [`text_with_len`](Self::text_with_len) when the character count is known.
    pub fn text(&self) -> &str {
        self.raw.trim_end()
    }

    /// The first `char_count` decoded characters
    ///
    /// Returns the whole decode if it is shorter than `char_count`.
    pub fn text_with_len(&self, char_count: usize) -> &str {
        // every decoded character is ASCII, so chars and bytes line up
        &self.raw[..char_count.min(self.raw.len())]
    }

    /// One character per pixel, padding included
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Number of pixels decoded
    pub fn total_pixels(&self) -> usize {
        self.raw.len()
    }

    /// Number of pixels whose color was found verbatim
    pub const fn exact_matches(&self) -> usize {
        self.exact_matches
    }

    /// Number of pixels resolved through a nearest color search
    pub fn inexact_matches(&self) -> usize {
        self.total_pixels() - self.exact_matches
    }

    /// Fraction of pixels that matched exactly, in `[0, 1]`
    ///
    /// An image without pixels has a confidence of 1, nothing in it was
    /// degraded.
    pub fn confidence(&self) -> f64 {
        let total = self.total_pixels();

        if total == 0 {
            return 1.0;
        }
        self.exact_matches as f64 / total as f64
    }

    pub fn confidence_level(&self) -> ConfidenceLevel {
        ConfidenceLevel::from_confidence(self.confidence())
    }
}

/// Decode an interleaved pixel buffer
///
/// Every pixel becomes one character. Alpha, if present, is ignored.
///
/// # Errors
/// - If `colorspace` is not `RGB` or `RGBA`
/// - If `pixels` does not hold a whole number of pixels
pub fn decode_pixels<M: NearestMatcher>(
    mapper: &ColorMapper<M>, algorithm: Algorithm, pixels: &[u8], colorspace: ColorSpace
) -> Result<DecodedText, ColorMapErrors> {
    if !SUPPORTED_COLORSPACES.contains(&colorspace) {
        return Err(ColorMapErrors::UnsupportedColorspace(
            colorspace,
            &SUPPORTED_COLORSPACES
        ));
    }
    let components = colorspace.num_components();

    if pixels.len() % components != 0 {
        return Err(ColorMapErrors::IncompletePixel(pixels.len(), components));
    }
    let table = mapper.table(algorithm);
    let num_pixels = pixels.len() / components;

    debug!("Decoding {num_pixels} pixels using {algorithm}");

    let (raw, exact_matches) = decode_all(table, pixels, components);

    let decoded = DecodedText { raw, exact_matches };

    info!(
        "Decoded {} pixels, {} exact, confidence {:.1}% ({})",
        decoded.total_pixels(),
        decoded.exact_matches(),
        decoded.confidence() * 100.0,
        decoded.confidence_level().as_str()
    );
    Ok(decoded)
}

/// Decode an image, checking the buffer against its dimensions first
///
/// # Errors
/// Everything [`decode_pixels`] errors on, and if the buffer does not
/// hold exactly `width * height` pixels
pub fn decode_image<M: NearestMatcher>(
    mapper: &ColorMapper<M>, algorithm: Algorithm, pixels: &[u8], width: usize, height: usize,
    colorspace: ColorSpace
) -> Result<DecodedText, ColorMapErrors> {
    if !SUPPORTED_COLORSPACES.contains(&colorspace) {
        return Err(ColorMapErrors::UnsupportedColorspace(
            colorspace,
            &SUPPORTED_COLORSPACES
        ));
    }
    let components = colorspace.num_components();
    let expected = width.saturating_mul(height);
    let found = pixels.len() / components;

    if expected != found {
        return Err(ColorMapErrors::DimensionsMismatch(expected, found));
    }
    decode_pixels(mapper, algorithm, pixels, colorspace)
}

fn decode_chunk<M: NearestMatcher>(
    table: &ReverseTable<M>, pixels: &[u8], components: usize
) -> (String, usize) {
    let mut text = String::with_capacity(pixels.len() / components);
    let mut exact = 0;

    for pixel in pixels.chunks_exact(components) {
        // chunks are at least 3 wide, checked by the caller
        let color = Rgb::from_pixel(pixel).unwrap_or_default();
        let decoded = table.decode(color);

        text.push(decoded.character);
        exact += usize::from(decoded.exact);
    }
    (text, exact)
}

#[cfg(not(feature = "threads"))]
fn decode_all<M: NearestMatcher>(
    table: &ReverseTable<M>, pixels: &[u8], components: usize
) -> (String, usize) {
    trace!("Decoding in single threaded mode");
    decode_chunk(table, pixels, components)
}

#[cfg(feature = "threads")]
fn decode_all<M: NearestMatcher>(
    table: &ReverseTable<M>, pixels: &[u8], components: usize
) -> (String, usize) {
    let num_pixels = pixels.len() / components;
    let threads = std::thread::available_parallelism()
        .map(|x| x.get())
        .unwrap_or(1)
        .min(num_pixels / MIN_PIXELS_PER_THREAD);

    if threads <= 1 {
        trace!("Decoding in single threaded mode");
        return decode_chunk(table, pixels, components);
    }
    trace!("Decoding in multithreaded mode with {threads} threads");

    let pixels_per_thread = num_pixels.div_ceil(threads);

    std::thread::scope(|s| {
        let handles = pixels
            .chunks(pixels_per_thread * components)
            .map(|chunk| s.spawn(move || decode_chunk(table, chunk, components)))
            .collect::<Vec<_>>();

        let mut text = String::with_capacity(num_pixels);
        let mut exact = 0;

        for handle in handles {
            // decode_chunk cannot panic on well formed chunks
            let (chunk_text, chunk_exact) = handle.join().unwrap();
            text.push_str(&chunk_text);
            exact += chunk_exact;
        }
        (text, exact)
    })
}
