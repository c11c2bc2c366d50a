/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Character to color mapping functions
//!
//! Each algorithm is a pure, total function from a character to an
//! [`Rgb`] color. Characters outside of the printable ASCII range are
//! clamped into it first, so every input has a color.
//!
//! All arithmetic is done in `f64`, so any other implementation (e.g. a
//! shader) evaluating the same formulas in the same order produces the
//! same colors bit for bit.
use core::fmt::{Display, Formatter};
use core::str::FromStr;

use textpix_core::charset::{clamp_code, CHAR_COUNT, MIN_ASCII};
use textpix_core::color::Rgb;

use crate::errors::ColorMapErrors;

/// Characters ranked by approximate frequency in English text,
/// used by [`Algorithm::Frequency`]
pub const FREQUENCY_ORDER: &str =
    " etaoinshrdlcumwfgypbvkjxqz0123456789ETAOINSHRDLCUMWFGYPBVKJXQZ.,!?;:'\"()-";

/// Extra hue slots reserved after the ranked characters so that
/// unranked characters do not wrap onto the start of the ordering
const FREQUENCY_SLACK: usize = 20;

/// The color of a space in [`Algorithm::Semantic`]
const SEMANTIC_SPACE: Rgb = Rgb::new(200, 200, 200);

/// A character to color mapping strategy
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Algorithm {
    /// Spread the domain evenly over the hue wheel
    Hsl,
    /// Scale the character code by a different factor per channel
    DirectRgb,
    /// Give each character class (upper, lower, digit, symbol) its own hue band
    Semantic,
    /// Hand out hues by how common a character is in English text
    Frequency
}

pub(crate) const NUM_ALGORITHMS: usize = 4;

/// Every algorithm, in definition order
pub static ALL_ALGORITHMS: [Algorithm; NUM_ALGORITHMS] = [
    Algorithm::Hsl,
    Algorithm::DirectRgb,
    Algorithm::Semantic,
    Algorithm::Frequency
];

impl Algorithm {
    /// The identifier used to select this algorithm, e.g. on the command line
    /// or in image metadata
    pub const fn id(self) -> &'static str {
        match self {
            Algorithm::Hsl => "hsl",
            Algorithm::DirectRgb => "rgb",
            Algorithm::Semantic => "semantic",
            Algorithm::Frequency => "frequency"
        }
    }

    /// Human readable name
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Hsl => "Distributed Hue (HSL)",
            Algorithm::DirectRgb => "Direct RGB",
            Algorithm::Semantic => "Semantic Grouping",
            Algorithm::Frequency => "Frequency Optimized"
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Algorithm::Hsl => "Maps characters across the color spectrum using HSL",
            Algorithm::DirectRgb => "Maps ASCII directly to RGB channels",
            Algorithm::Semantic => "Similar characters get similar colors",
            Algorithm::Frequency => "Common characters get more distinct colors"
        }
    }

    /// Position of the algorithm in [`ALL_ALGORITHMS`]
    pub const fn index(self) -> usize {
        match self {
            Algorithm::Hsl => 0,
            Algorithm::DirectRgb => 1,
            Algorithm::Semantic => 2,
            Algorithm::Frequency => 3
        }
    }

    /// Map a character to its color
    ///
    /// Characters outside `' '..='~'` are clamped into that range.
    pub fn forward(self, c: char) -> Rgb {
        self.forward_code(u32::from(c))
    }

    /// Map a character code to its color, clamping it into the printable range
    pub fn forward_code(self, code: u32) -> Rgb {
        let code = clamp_code(code);

        match self {
            Algorithm::Hsl => hsl_distributed(code),
            Algorithm::DirectRgb => direct_rgb(code),
            Algorithm::Semantic => semantic(code),
            Algorithm::Frequency => frequency(code)
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Algorithm {
    type Err = ColorMapErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_ALGORITHMS
            .iter()
            .find(|algorithm| algorithm.id() == s)
            .copied()
            .ok_or_else(|| ColorMapErrors::UnknownAlgorithm(s.to_string()))
    }
}

fn hsl_distributed(code: u8) -> Rgb {
    let hue = (f64::from(code - MIN_ASCII) / 94.0) * 360.0;

    hsl_to_rgb(hue, 70.0, 50.0)
}

fn direct_rgb(code: u8) -> Rgb {
    let normalized = f64::from(code - MIN_ASCII);

    Rgb::new(
        spread_channel(normalized, 2.7),
        spread_channel(normalized, 7.3),
        spread_channel(normalized, 13.1)
    )
}

#[inline]
fn spread_channel(normalized: f64, factor: f64) -> u8 {
    // (n * factor) % 256 can round up to 256, which a pixel stores as 255
    ((normalized * factor) % 256.0).round().min(255.0) as u8
}

fn semantic(code: u8) -> Rgb {
    let code_f = f64::from(code);

    let (hue, saturation) = match code {
        b'A'..=b'Z' => (((code_f - 65.0) / 26.0) * 60.0, 80.0),
        b'a'..=b'z' => (180.0 + ((code_f - 97.0) / 26.0) * 60.0, 80.0),
        b'0'..=b'9' => (270.0 + ((code_f - 48.0) / 10.0) * 30.0, 75.0),
        b' ' => return SEMANTIC_SPACE,
        _ => (
            60.0 + ((code_f - f64::from(MIN_ASCII)) / CHAR_COUNT as f64) * 120.0,
            60.0
        )
    };

    hsl_to_rgb(hue, saturation, 50.0)
}

fn frequency(code: u8) -> Rgb {
    let ordering_len = FREQUENCY_ORDER.len();

    let position = FREQUENCY_ORDER
        .bytes()
        .position(|b| b == code)
        .unwrap_or(ordering_len + usize::from(code - MIN_ASCII));

    let hue = (position as f64 / (ordering_len + FREQUENCY_SLACK) as f64) * 360.0;

    hsl_to_rgb(hue, 75.0, 50.0)
}

/// Convert a hue in degrees and saturation, lightness in percent
/// to an 8-bit color.
///
/// Hues at or above 300 all land in the last sextant, the hue is
/// never wrapped.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let s = s / 100.0;
    let l = l / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    Rgb::new(to_channel(r + m), to_channel(g + m), to_channel(b + m))
}

#[inline]
fn to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}
