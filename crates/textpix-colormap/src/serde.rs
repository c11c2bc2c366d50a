/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(feature = "serde-support")]
//! Serialization of the engine's introspection types

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::decode::DecodedText;
use crate::legend::{AlgorithmInfo, LegendEntry};
use crate::table::Collision;

impl Serialize for AlgorithmInfo {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("AlgorithmInfo", 3)?;

        state.serialize_field("id", self.id)?;
        state.serialize_field("name", self.name)?;
        state.serialize_field("description", self.description)?;

        state.end()
    }
}

impl Serialize for LegendEntry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("LegendEntry", 3)?;

        state.serialize_field("char", &self.character)?;
        state.serialize_field("code", &self.code)?;
        state.serialize_field("color", &self.color)?;

        state.end()
    }
}

impl Serialize for Collision {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Collision", 3)?;

        state.serialize_field("kept", &self.kept)?;
        state.serialize_field("shadowed", &self.shadowed)?;
        state.serialize_field("color", &self.color)?;

        state.end()
    }
}

/// Serializes the summary of a decode, not the text itself
impl Serialize for DecodedText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("DecodedText", 5)?;

        state.serialize_field("characters", &self.text().len())?;
        state.serialize_field("total_pixels", &self.total_pixels())?;
        state.serialize_field("exact_matches", &self.exact_matches())?;
        state.serialize_field("confidence", &self.confidence())?;
        state.serialize_field("level", self.confidence_level().as_str())?;

        state.end()
    }
}
