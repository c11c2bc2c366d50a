/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Checks on the reverse tables of every algorithm
use nanorand::Rng;
use textpix_colormap::textpix_core::charset::printable_chars;
use textpix_colormap::textpix_core::color::Rgb;
use textpix_colormap::{
    legend, Algorithm, ColorMapper, LinearScan, NearestMatcher, RedAxisScan, ReverseTable,
    ALL_ALGORITHMS
};

fn shadowed(table: &ReverseTable) -> Vec<char> {
    table.collisions().iter().map(|c| c.shadowed).collect()
}

#[test]
fn collisions_per_algorithm() {
    let mapper = ColorMapper::new();

    let hsl = mapper.collisions(Algorithm::Hsl);
    assert_eq!(hsl.len(), 1);
    assert_eq!((hsl[0].kept, hsl[0].shadowed), (' ', '~'));
    assert_eq!(hsl[0].color, Rgb::new(217, 38, 38));

    let frequency = mapper.collisions(Algorithm::Frequency);
    let mut pairs = frequency
        .iter()
        .map(|c| (c.kept, c.shadowed))
        .collect::<Vec<_>>();
    pairs.sort();
    assert_eq!(pairs, vec![('*', '>'), ('+', '=')]);

    assert!(mapper.table(Algorithm::DirectRgb).is_injective());
    assert!(mapper.table(Algorithm::Semantic).is_injective());
}

#[test]
fn table_sizes_account_for_collisions() {
    let mapper = ColorMapper::new();

    for algorithm in ALL_ALGORITHMS {
        let table = mapper.table(algorithm);

        assert_eq!(table.len() + table.collisions().len(), 95, "{algorithm}");
    }
}

#[test]
fn every_unshadowed_char_roundtrips() {
    let mapper = ColorMapper::new();

    for algorithm in ALL_ALGORITHMS {
        let table = mapper.table(algorithm);
        let shadowed = shadowed(table);

        for c in printable_chars() {
            let decoded = mapper.decode_rgb(algorithm, mapper.encode_char(algorithm, c));

            assert!(decoded.exact, "{algorithm} {c:?}");

            if shadowed.contains(&c) {
                assert_ne!(decoded.character, c, "{algorithm} {c:?}");
            } else {
                assert_eq!(decoded.character, c, "{algorithm} {c:?}");
            }
        }
    }
}

#[test]
fn shadowed_chars_decode_to_the_kept_char() {
    let mapper = ColorMapper::new();

    let tilde = mapper.encode_char(Algorithm::Hsl, '~');
    assert_eq!(mapper.decode_rgb(Algorithm::Hsl, tilde).character, ' ');

    let greater = mapper.encode_char(Algorithm::Frequency, '>');
    assert_eq!(mapper.decode_rgb(Algorithm::Frequency, greater).character, '*');

    let equals = mapper.encode_char(Algorithm::Frequency, '=');
    assert_eq!(mapper.decode_rgb(Algorithm::Frequency, equals).character, '+');
}

#[test]
fn legends_are_complete_and_ordered() {
    for algorithm in ALL_ALGORITHMS {
        let entries = legend(algorithm);

        assert_eq!(entries.len(), 95);
        assert_eq!(entries.first().map(|e| e.character), Some(' '));
        assert_eq!(entries.last().map(|e| e.character), Some('~'));

        for (entry, code) in entries.iter().zip(32_u8..=126) {
            assert_eq!(entry.code, code);
            assert_eq!(entry.character, char::from(code));
            assert_eq!(entry.color, algorithm.forward(entry.character));
        }
    }
}

#[test]
fn nearest_matchers_agree_on_random_colors() {
    let mut rand = nanorand::WyRand::new();

    for algorithm in ALL_ALGORITHMS {
        let table = ReverseTable::<LinearScan>::build(algorithm);
        let linear = LinearScan::from_entries(table.entries());
        let red_axis = RedAxisScan::from_entries(table.entries());

        for _ in 0..2000 {
            let color = Rgb::new(rand.generate(), rand.generate(), rand.generate());

            assert_eq!(
                linear.nearest(color),
                red_axis.nearest(color),
                "{algorithm} {color}"
            );
        }
    }
}

#[test]
fn mappers_with_different_matchers_decode_alike() {
    let linear = ColorMapper::new();
    let red_axis = ColorMapper::<RedAxisScan>::with_matcher();
    let mut rand = nanorand::WyRand::new();

    for algorithm in ALL_ALGORITHMS {
        for _ in 0..500 {
            let (r, g, b) = (rand.generate(), rand.generate(), rand.generate());

            assert_eq!(
                linear.decode_color(algorithm, r, g, b),
                red_axis.decode_color(algorithm, r, g, b)
            );
        }
    }
}
