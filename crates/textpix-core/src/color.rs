/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! An 8-bit RGB color

use core::fmt::{Display, Formatter};

/// A single 8-bit per channel color.
///
/// Channels are `u8`, so a color is always inside `[0, 255]`
/// and nothing downstream has to range check it.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Rgb {
        Rgb { r, g, b }
    }

    /// Read a color from the first three components of `pixel`
    ///
    /// Returns `None` if the pixel has fewer than three components,
    /// any extra component (e.g. alpha) is ignored.
    pub fn from_pixel(pixel: &[u8]) -> Option<Rgb> {
        match pixel {
            [r, g, b, ..] => Some(Rgb::new(*r, *g, *b)),
            _ => None
        }
    }

    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Return the color with an alpha channel appended
    pub const fn to_rgba(self, alpha: u8) -> [u8; 4] {
        [self.r, self.g, self.b, alpha]
    }

    /// Squared euclidean distance between two colors
    ///
    /// The largest possible value is `3 * 255^2`, which fits in a `u32`.
    pub const fn distance_squared(self, other: Rgb) -> u32 {
        let dr = self.r.abs_diff(other.r) as u32;
        let dg = self.g.abs_diff(other.g) as u32;
        let db = self.b.abs_diff(other.b) as u32;

        dr * dr + dg * dg + db * db
    }

    /// Offset each channel by the given amount, saturating at the channel bounds
    pub const fn offset(self, dr: i16, dg: i16, db: i16) -> Rgb {
        Rgb::new(
            saturate(self.r as i16 + dr),
            saturate(self.g as i16 + dg),
            saturate(self.b as i16 + db)
        )
    }
}

const fn saturate(value: i16) -> u8 {
    if value < 0 {
        0
    } else if value > 255 {
        255
    } else {
        value as u8
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Rgb::new(value[0], value[1], value[2])
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(value: Rgb) -> Self {
        value.to_array()
    }
}

/// Formats as a CSS style hex string, e.g. `#d92626`
impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
