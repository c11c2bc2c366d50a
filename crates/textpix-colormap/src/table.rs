/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Color to character reverse tables
use std::collections::HashMap;

use textpix_core::charset::printable_chars;
use textpix_core::color::Rgb;
use textpix_core::log::{debug, trace};

use crate::algorithms::Algorithm;
use crate::matcher::{LinearScan, NearestMatcher};

/// The result of looking up a single color
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Decoded {
    /// The decoded character
    pub character: char,
    /// `true` if the color was found verbatim in the table, `false` if it
    /// was resolved to its nearest neighbour
    pub exact:     bool
}

/// Two characters an algorithm maps to the same color
///
/// The table keeps the character with the lower code, the other one can
/// never be decoded under that algorithm.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Collision {
    /// The character the table decodes `color` to
    pub kept:     char,
    /// The character that loses the color
    pub shadowed: char,
    /// The shared color
    pub color:    Rgb
}

/// A color to character lookup for one algorithm
///
/// Built by mapping every printable character in ascending code order.
/// When two characters share a color the first one, i.e. the one with
/// the lower code, keeps it and the collision is recorded.
pub struct ReverseTable<M: NearestMatcher = LinearScan> {
    algorithm:  Algorithm,
    lookup:     HashMap<Rgb, char>,
    entries:    Vec<(Rgb, char)>,
    collisions: Vec<Collision>,
    matcher:    M
}

impl<M: NearestMatcher> ReverseTable<M> {
    /// Evaluate `algorithm` over the whole domain and index the result
    pub fn build(algorithm: Algorithm) -> ReverseTable<M> {
        let mut lookup = HashMap::with_capacity(textpix_core::charset::CHAR_COUNT);
        let mut entries = Vec::with_capacity(textpix_core::charset::CHAR_COUNT);
        let mut collisions = Vec::new();

        for c in printable_chars() {
            let color = algorithm.forward(c);

            match lookup.get(&color) {
                Some(&kept) => {
                    trace!("{algorithm}: '{c}' collides with '{kept}' on {color}");
                    collisions.push(Collision {
                        kept,
                        shadowed: c,
                        color
                    });
                }
                None => {
                    lookup.insert(color, c);
                    entries.push((color, c));
                }
            }
        }
        let matcher = M::from_entries(&entries);

        debug!(
            "Built reverse table for {algorithm} with {} colors, {} collisions, using {}",
            entries.len(),
            collisions.len(),
            matcher.name()
        );

        ReverseTable {
            algorithm,
            lookup,
            entries,
            collisions,
            matcher
        }
    }

    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Exact lookup of a color
    pub fn get(&self, color: Rgb) -> Option<char> {
        self.lookup.get(&color).copied()
    }

    /// Look up a color, falling back to its nearest neighbour
    pub fn decode(&self, color: Rgb) -> Decoded {
        match self.get(color) {
            Some(character) => Decoded {
                character,
                exact: true
            },
            None => Decoded {
                character: self.matcher.nearest(color),
                exact:     false
            }
        }
    }

    /// Distinct colors in the table with the character each decodes to,
    /// in ascending character order
    pub fn entries(&self) -> &[(Rgb, char)] {
        &self.entries
    }

    /// Characters that lost their color to a lower coded character
    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }

    /// Whether every character of the domain has its own color
    pub fn is_injective(&self) -> bool {
        self.collisions.is_empty()
    }

    /// Number of distinct colors
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use textpix_core::charset::CHAR_COUNT;
    use textpix_core::color::Rgb;

    use crate::algorithms::{Algorithm, ALL_ALGORITHMS};
    use crate::matcher::RedAxisScan;
    use crate::table::ReverseTable;

    #[test]
    fn test_collisions_keep_lower_code() {
        let table: ReverseTable = ReverseTable::build(Algorithm::Hsl);
        let shared = Algorithm::Hsl.forward(' ');

        assert_eq!(table.get(shared), Some(' '));
        assert_eq!(table.collisions().len(), 1);
        assert_eq!(table.collisions()[0].kept, ' ');
        assert_eq!(table.collisions()[0].shadowed, '~');
        assert_eq!(table.collisions()[0].color, Rgb::new(217, 38, 38));
    }

    #[test]
    fn test_entries_account_for_domain() {
        for algorithm in ALL_ALGORITHMS {
            let table: ReverseTable = ReverseTable::build(algorithm);

            assert_eq!(table.len() + table.collisions().len(), CHAR_COUNT);
            assert!(table
                .entries()
                .windows(2)
                .all(|pair| pair[0].1 < pair[1].1));
        }
    }

    #[test]
    fn test_matchers_build_same_table() {
        let linear: ReverseTable = ReverseTable::build(Algorithm::Semantic);
        let red_axis: ReverseTable<RedAxisScan> = ReverseTable::build(Algorithm::Semantic);

        assert_eq!(linear.entries(), red_axis.entries());

        let off_table = Rgb::new(100, 100, 100);
        assert_eq!(linear.decode(off_table), red_axis.decode(off_table));
        assert!(!linear.decode(off_table).exact);
    }
}
