/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Printable ASCII to color mappings
//!
//! This crate maps each of the 95 printable ASCII characters to a color,
//! lays text out as a square image of such colors and turns images back
//! into text.
//!
//! Decoding is exact for colors produced by the mapping. Colors altered
//! on the way (e.g. by a lossy format) are resolved to the nearest
//! color in the mapping and reported as inexact, so callers can tell
//! how much of a decode to trust.
//!
//! # Example
//! ```
//! use textpix_colormap::{decode_pixels, encode_text, Algorithm, ColorMapper};
//! use textpix_colormap::textpix_core::colorspace::ColorSpace;
//!
//! let mapper = ColorMapper::new();
//! let image = encode_text(Algorithm::Hsl, "Hello World!", ColorSpace::RGBA).unwrap();
//!
//! assert_eq!(image.dimensions(), (4, 4));
//!
//! let decoded = decode_pixels(&mapper, Algorithm::Hsl, image.pixels(), ColorSpace::RGBA).unwrap();
//!
//! assert_eq!(decoded.text(), "Hello World!");
//! assert_eq!(decoded.confidence(), 1.0);
//! ```
//!
//! # Features
//! - `threads`: Decode large images on multiple threads
//! - `log`: Log through the `log` crate
//! - `serde-support`: Serialize legends and decode summaries
pub use algorithms::{Algorithm, ALL_ALGORITHMS, FREQUENCY_ORDER};
pub use decode::{decode_image, decode_pixels, ConfidenceLevel, DecodedText};
pub use engine::ColorMapper;
pub use errors::ColorMapErrors;
pub use grid::{encode_text, grid_size_for, EncodedImage, SUPPORTED_COLORSPACES};
pub use legend::{legend, list_algorithms, AlgorithmInfo, LegendEntry};
pub use matcher::{LinearScan, NearestMatcher, RedAxisScan};
pub use table::{Collision, Decoded, ReverseTable};
pub use textpix_core;

mod algorithms;
pub mod cache;
mod decode;
mod engine;
mod errors;
mod grid;
mod legend;
mod matcher;
mod serde;
mod table;
