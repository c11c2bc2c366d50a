/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible when selecting an algorithm or handing pixel
//! buffers to the engine
use core::fmt::{Debug, Display, Formatter};

use textpix_core::colorspace::ColorSpace;

/// Errors returned by the color map engine
///
/// Looking up a color never fails, a color that is not in the table
/// is resolved to its nearest neighbour instead.
pub enum ColorMapErrors {
    /// An algorithm identifier that is not one of
    /// [`ALL_ALGORITHMS`](crate::ALL_ALGORITHMS)
    ///
    /// This is a configuration problem in the caller, ids should come
    /// from [`list_algorithms`](crate::list_algorithms)
    UnknownAlgorithm(String),
    /// A pixel buffer in a colorspace the engine cannot read
    ///
    /// The first argument is the colorspace encountered
    /// The second argument is list of supported colorspaces
    UnsupportedColorspace(ColorSpace, &'static [ColorSpace]),
    /// The pixel buffer length is not a whole number of pixels
    ///
    /// # Arguments
    /// - 1st argument is the buffer length
    /// - 2nd argument is the number of components per pixel
    IncompletePixel(usize, usize),
    /// The pixel buffer does not contain `width * height` pixels
    ///
    /// # Arguments
    /// - 1st argument is the number of pixels expected
    /// - 2nd argument is the number of pixels found
    DimensionsMismatch(usize, usize)
}

impl Debug for ColorMapErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ColorMapErrors::UnknownAlgorithm(id) => {
                let known = crate::ALL_ALGORITHMS
                    .iter()
                    .map(|x| x.id())
                    .collect::<Vec<_>>()
                    .join(", ");

                writeln!(f, "Unknown algorithm `{id}`, expected one of {known}")
            }
            ColorMapErrors::UnsupportedColorspace(found, supported) => {
                writeln!(
                    f,
                    "Cannot map pixels in colorspace {found:?}, supported ones are {supported:?}"
                )
            }
            ColorMapErrors::IncompletePixel(len, components) => {
                writeln!(
                    f,
                    "Pixel buffer of {len} bytes is not a multiple of {components} components"
                )
            }
            ColorMapErrors::DimensionsMismatch(expected, found) => {
                writeln!(f, "Expected {expected} pixels but found {found}")
            }
        }
    }
}

impl Display for ColorMapErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for ColorMapErrors {}
