/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Pixel layout information for encoded text images.

/// Pixel layouts a text image can be stored in
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ColorSpace {
    /// Red, Green, Blue
    RGB,
    /// Red, Green, Blue, Alpha
    ///
    /// Encoders always write an opaque alpha of 255, decoders ignore it.
    RGBA,
    /// The colorspace is unknown
    Unknown
}

impl ColorSpace {
    /// Number of color channels present for a certain colorspace
    ///
    /// E.g. RGB returns 3 since it contains R,G and B colors to make up a pixel
    pub const fn num_components(&self) -> usize {
        match self {
            Self::RGB => 3,
            Self::RGBA => 4,
            Self::Unknown => 0
        }
    }
}

/// Colorspaces pixel buffers can be encoded to and decoded from
pub static ALL_COLORSPACES: [ColorSpace; 2] = [ColorSpace::RGB, ColorSpace::RGBA];

#[cfg(test)]
mod tests {
    use crate::colorspace::{ColorSpace, ALL_COLORSPACES};

    #[test]
    fn test_components() {
        assert_eq!(ColorSpace::RGB.num_components(), 3);
        assert_eq!(ColorSpace::RGBA.num_components(), 4);
        assert_eq!(ColorSpace::Unknown.num_components(), 0);
    }

    #[test]
    fn test_all_colorspaces_hold_a_color() {
        for colorspace in ALL_COLORSPACES {
            assert!(colorspace.num_components() >= 3);
        }
        assert!(!ALL_COLORSPACES.contains(&ColorSpace::Unknown));
    }
}
