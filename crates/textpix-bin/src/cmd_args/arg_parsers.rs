/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::builder::PossibleValue;
use clap::ValueEnum;
use textpix_colormap::Algorithm;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum IAlgorithm {
    Hsl,
    Rgb,
    Semantic,
    Frequency
}

impl IAlgorithm {
    pub const fn to_algorithm(self) -> Algorithm {
        match self {
            IAlgorithm::Hsl => Algorithm::Hsl,
            IAlgorithm::Rgb => Algorithm::DirectRgb,
            IAlgorithm::Semantic => Algorithm::Semantic,
            IAlgorithm::Frequency => Algorithm::Frequency
        }
    }
}

impl ValueEnum for IAlgorithm {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Hsl, Self::Rgb, Self::Semantic, Self::Frequency]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        let algorithm = self.to_algorithm();

        Some(PossibleValue::new(algorithm.id()).help(algorithm.name()))
    }
}
