/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

pub static ALGORITHM_HELP: &str = "Color mapping algorithm

hsl:       hues spread evenly around the color wheel
rgb:       channels derived directly from the character code
semantic:  letters warm, lowercase cool, digits purple, punctuation muted
frequency: hue follows English letter frequency

The same algorithm has to be used to decode an image";

pub static METADATA_HELP: &str = "Metadata file

A JSON file holding the algorithm, the number of characters and the
image dimensions. When given to decode it overrides --algorithm and
keeps trailing whitespace of the original text.";

pub static DECODE_HELP: &str = "Decode an image back into text

Colors not produced by the algorithm, e.g. after lossy compression,
are matched to the nearest known color. The share of exactly matched
pixels is printed as the confidence of the decode.

Without metadata trailing whitespace is removed from the text, since
it cannot be told apart from padding.";
