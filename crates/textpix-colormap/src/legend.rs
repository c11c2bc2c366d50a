/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Introspection of the forward mappings
use textpix_core::charset::printable_chars;
use textpix_core::color::Rgb;

use crate::algorithms::{Algorithm, ALL_ALGORITHMS};

/// Description of an algorithm, for populating selectors and help text
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct AlgorithmInfo {
    pub id:          &'static str,
    pub name:        &'static str,
    pub description: &'static str
}

impl From<Algorithm> for AlgorithmInfo {
    fn from(algorithm: Algorithm) -> Self {
        AlgorithmInfo {
            id:          algorithm.id(),
            name:        algorithm.name(),
            description: algorithm.description()
        }
    }
}

/// One character of the domain with the color it is encoded as
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LegendEntry {
    pub character: char,
    pub code:      u8,
    pub color:     Rgb
}

/// All algorithms in definition order
pub fn list_algorithms() -> Vec<AlgorithmInfo> {
    ALL_ALGORITHMS.iter().copied().map(AlgorithmInfo::from).collect()
}

/// The forward mapping of `algorithm` over the whole domain,
/// ascending by character code
pub fn legend(algorithm: Algorithm) -> Vec<LegendEntry> {
    printable_chars()
        .map(|character| LegendEntry {
            character,
            code: character as u8,
            color: algorithm.forward(character)
        })
        .collect()
}
