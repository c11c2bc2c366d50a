/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The color map engine
use textpix_core::color::Rgb;

use crate::algorithms::Algorithm;
use crate::cache::LookupCache;
use crate::legend::{legend, LegendEntry};
use crate::matcher::{LinearScan, NearestMatcher};
use crate::table::{Collision, Decoded, ReverseTable};

/// Encodes characters to colors and decodes colors back to characters
///
/// The engine holds no notion of a current algorithm, every call names
/// the algorithm it wants. The only state is the cache of reverse
/// tables, so one engine can serve several threads and several
/// algorithms at the same time.
///
/// # Example
/// ```
/// use textpix_colormap::{Algorithm, ColorMapper};
///
/// let mapper = ColorMapper::new();
/// let color = mapper.encode_char(Algorithm::Hsl, 'H');
/// let decoded = mapper.decode_color(Algorithm::Hsl, color.r, color.g, color.b);
///
/// assert_eq!(decoded.character, 'H');
/// assert!(decoded.exact);
/// ```
pub struct ColorMapper<M: NearestMatcher = LinearScan> {
    cache: LookupCache<M>
}

impl ColorMapper<LinearScan> {
    /// Create an engine using a linear nearest color search
    pub fn new() -> ColorMapper<LinearScan> {
        ColorMapper {
            cache: LookupCache::new()
        }
    }
}

impl<M: NearestMatcher> ColorMapper<M> {
    /// Create an engine with a different nearest color search
    pub fn with_matcher() -> ColorMapper<M> {
        ColorMapper {
            cache: LookupCache::new()
        }
    }

    /// The color `c` is encoded as
    pub fn encode_char(&self, algorithm: Algorithm, c: char) -> Rgb {
        algorithm.forward(c)
    }

    /// Decode a single pixel
    pub fn decode_color(&self, algorithm: Algorithm, r: u8, g: u8, b: u8) -> Decoded {
        self.decode_rgb(algorithm, Rgb::new(r, g, b))
    }

    pub fn decode_rgb(&self, algorithm: Algorithm, color: Rgb) -> Decoded {
        self.table(algorithm).decode(color)
    }

    /// The reverse table for `algorithm`, built on first use
    pub fn table(&self, algorithm: Algorithm) -> &ReverseTable<M> {
        self.cache.get(algorithm)
    }

    /// Forward mapping of every character, ascending by code
    pub fn legend(&self, algorithm: Algorithm) -> Vec<LegendEntry> {
        legend(algorithm)
    }

    /// Characters `algorithm` cannot tell apart
    pub fn collisions(&self, algorithm: Algorithm) -> &[Collision] {
        self.table(algorithm).collisions()
    }
}

impl Default for ColorMapper<LinearScan> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use textpix_core::color::Rgb;

    use crate::algorithms::{Algorithm, ALL_ALGORITHMS};
    use crate::engine::ColorMapper;
    use crate::matcher::RedAxisScan;

    #[test]
    fn test_exact_and_nearest() {
        let mapper = ColorMapper::new();

        let exact = mapper.decode_color(Algorithm::Hsl, 38, 217, 137);
        assert_eq!(exact.character, 'H');
        assert!(exact.exact);

        let nearest = mapper.decode_color(Algorithm::Hsl, 39, 216, 138);
        assert_eq!(nearest.character, 'H');
        assert!(!nearest.exact);
    }

    #[test]
    fn test_algorithms_are_independent() {
        let mapper = ColorMapper::new();
        let color = Rgb::new(200, 200, 200);

        assert_eq!(mapper.decode_rgb(Algorithm::Semantic, color).character, ' ');
        assert!(mapper.decode_rgb(Algorithm::Semantic, color).exact);
        assert!(!mapper.decode_rgb(Algorithm::Hsl, color).exact);
    }

    #[test]
    fn test_custom_matcher_agrees() {
        let linear = ColorMapper::new();
        let red_axis: ColorMapper<RedAxisScan> = ColorMapper::with_matcher();

        for algorithm in ALL_ALGORITHMS {
            for r in (0..=255).step_by(17) {
                for g in (0..=255).step_by(17) {
                    for b in (0..=255).step_by(17) {
                        assert_eq!(
                            linear.decode_color(algorithm, r, g, b),
                            red_axis.decode_color(algorithm, r, g, b)
                        );
                    }
                }
            }
        }
    }
}
