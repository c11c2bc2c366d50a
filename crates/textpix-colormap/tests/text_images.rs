/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Encoding texts to images and back
use textpix_colormap::textpix_core::color::Rgb;
use textpix_colormap::textpix_core::colorspace::ColorSpace;
use textpix_colormap::{
    decode_image, decode_pixels, encode_text, Algorithm, ColorMapper, ConfidenceLevel,
    ALL_ALGORITHMS
};

const PANGRAM: &str = "The quick brown fox jumps over the lazy dog. 0123456789 !@#$%^&*()";
const REPEATS: &str = "aaabbbccc   111222333!!!@@@###";

/// Every combination of a one step shift on all three channels
const SHIFTS: [(i16, i16, i16); 8] = [
    (1, 1, 1),
    (1, 1, -1),
    (1, -1, 1),
    (1, -1, -1),
    (-1, 1, 1),
    (-1, 1, -1),
    (-1, -1, 1),
    (-1, -1, -1)
];

fn perturb(pixels: &mut [u8], components: usize, count: usize, shift: (i16, i16, i16)) {
    for pixel in pixels.chunks_exact_mut(components).take(count) {
        let color = Rgb::new(pixel[0], pixel[1], pixel[2]).offset(shift.0, shift.1, shift.2);

        pixel[..3].copy_from_slice(&color.to_array());
    }
}

#[test]
fn hello_world_hsl() {
    let mapper = ColorMapper::new();
    let image = encode_text(Algorithm::Hsl, "Hello World!", ColorSpace::RGBA).unwrap();

    assert_eq!(image.dimensions(), (4, 4));
    assert_eq!(image.pixels().len(), 64);
    assert_eq!(image.char_count(), 12);
    assert_eq!(&image.pixels()[..4], &[38, 217, 137, 255]);

    let decoded = decode_pixels(&mapper, Algorithm::Hsl, image.pixels(), ColorSpace::RGBA).unwrap();

    assert_eq!(decoded.text(), "Hello World!");
    assert_eq!(decoded.total_pixels(), 16);
    assert_eq!(decoded.exact_matches(), 16);
    assert_eq!(decoded.confidence(), 1.0);
    assert_eq!(decoded.confidence_level(), ConfidenceLevel::High);
}

#[test]
fn sample_texts_roundtrip_where_injective() {
    let mapper = ColorMapper::new();

    for text in [PANGRAM, REPEATS] {
        for algorithm in [Algorithm::DirectRgb, Algorithm::Semantic] {
            for colorspace in [ColorSpace::RGB, ColorSpace::RGBA] {
                let image = encode_text(algorithm, text, colorspace).unwrap();
                let (width, height) = image.dimensions();

                let decoded =
                    decode_image(&mapper, algorithm, image.pixels(), width, height, colorspace)
                        .unwrap();

                assert_eq!(decoded.text(), text, "{algorithm}");
                assert_eq!(decoded.confidence(), 1.0);
            }
        }
    }
}

#[test]
fn sample_texts_survive_collisions_that_they_avoid() {
    // neither text uses '~', '>' or '='
    let mapper = ColorMapper::new();

    for text in [PANGRAM, REPEATS] {
        for algorithm in ALL_ALGORITHMS {
            let image = encode_text(algorithm, text, ColorSpace::RGB).unwrap();
            let decoded = decode_pixels(&mapper, algorithm, image.pixels(), ColorSpace::RGB).unwrap();

            assert_eq!(decoded.text(), text, "{algorithm}");
        }
    }
}

#[test]
fn shadowed_chars_are_lost() {
    let mapper = ColorMapper::new();
    let image = encode_text(Algorithm::Frequency, "a>b=c", ColorSpace::RGB).unwrap();
    let decoded = decode_pixels(&mapper, Algorithm::Frequency, image.pixels(), ColorSpace::RGB).unwrap();

    assert_eq!(decoded.text(), "a*b+c");
    // the colors are still in the table, so the loss is silent
    assert_eq!(decoded.confidence(), 1.0);
}

#[test]
fn degraded_pixels_still_decode() {
    let mapper = ColorMapper::new();
    let mut image = encode_text(Algorithm::Hsl, PANGRAM, ColorSpace::RGBA)
        .unwrap()
        .into_pixels();

    let total = image.len() / 4;
    perturb(&mut image, 4, total, (1, 0, 0));

    let decoded = decode_pixels(&mapper, Algorithm::Hsl, &image, ColorSpace::RGBA).unwrap();

    assert_eq!(decoded.text(), PANGRAM);
    assert_eq!(decoded.exact_matches(), 0);
    assert_eq!(decoded.inexact_matches(), total);
    assert_eq!(decoded.confidence(), 0.0);
    assert_eq!(decoded.confidence_level(), ConfidenceLevel::Low);
}

#[test]
fn every_color_survives_a_one_step_shift() {
    let mapper = ColorMapper::new();

    for algorithm in ALL_ALGORITHMS {
        for &(color, c) in mapper.table(algorithm).entries() {
            for (dr, dg, db) in SHIFTS {
                let shifted = color.offset(dr, dg, db);

                if shifted == color {
                    // every channel already sits at the bound it was pushed towards
                    continue;
                }
                let decoded = mapper.decode_rgb(algorithm, shifted);

                assert_eq!(decoded.character, c, "{algorithm} {color} shifted to {shifted}");
                assert!(!decoded.exact, "{algorithm} {color} shifted to {shifted}");
            }
        }
    }
}

#[test]
fn texts_survive_shifts_on_all_channels() {
    let mapper = ColorMapper::new();

    for algorithm in ALL_ALGORITHMS {
        for shift in [(1, 1, 1), (1, -1, 1), (-1, 1, -1)] {
            let mut image = encode_text(algorithm, PANGRAM, ColorSpace::RGB)
                .unwrap()
                .into_pixels();

            let total = image.len() / 3;
            perturb(&mut image, 3, total, shift);

            let decoded = decode_pixels(&mapper, algorithm, &image, ColorSpace::RGB).unwrap();

            assert_eq!(decoded.text(), PANGRAM, "{algorithm} {shift:?}");
            assert_eq!(decoded.exact_matches(), 0, "{algorithm} {shift:?}");
            assert_eq!(decoded.confidence_level(), ConfidenceLevel::Low);
        }
    }
}

#[test]
fn partially_degraded_confidence() {
    let mapper = ColorMapper::new();
    // 100 characters, a 10x10 grid without padding
    let text = "abcdefghij".repeat(10);
    let mut image = encode_text(Algorithm::Hsl, &text, ColorSpace::RGB)
        .unwrap()
        .into_pixels();

    perturb(&mut image, 3, 5, (-1, 1, -1));

    let decoded = decode_pixels(&mapper, Algorithm::Hsl, &image, ColorSpace::RGB).unwrap();

    assert_eq!(decoded.text(), text);
    assert_eq!(decoded.exact_matches(), 95);
    assert!((decoded.confidence() - 0.95).abs() < 1e-9);
    assert_eq!(decoded.confidence_level(), ConfidenceLevel::Medium);
}

#[test]
fn large_texts_decode_like_small_ones() {
    // big enough to be split across threads when that is enabled
    let mapper = ColorMapper::new();
    let text = REPEATS.repeat(5000);
    let image = encode_text(Algorithm::Semantic, &text, ColorSpace::RGBA).unwrap();

    assert_eq!(image.dimensions(), (388, 388));

    let decoded = decode_pixels(&mapper, Algorithm::Semantic, image.pixels(), ColorSpace::RGBA).unwrap();

    assert_eq!(decoded.total_pixels(), 388 * 388);
    assert_eq!(decoded.text(), text);
    assert_eq!(decoded.text_with_len(text.len()), text);
    assert_eq!(decoded.confidence(), 1.0);
}
