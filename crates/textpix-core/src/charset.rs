/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The printable ASCII domain.
//!
//! Every color mapping is defined over the 95 characters from
//! `' '` (32) to `'~'` (126). Anything outside that range is clamped
//! into it before mapping, so a newline maps like a space and every
//! code point above `'~'` maps like `'~'`.

/// Smallest printable ASCII code, the space character
pub const MIN_ASCII: u8 = 32;
/// Largest printable ASCII code, the tilde
pub const MAX_ASCII: u8 = 126;
/// Number of characters in the domain
pub const CHAR_COUNT: usize = (MAX_ASCII - MIN_ASCII + 1) as usize;

/// Character used to fill grid cells past the end of the text
pub const PADDING_CHAR: char = ' ';

/// Clamp a code point into `[MIN_ASCII, MAX_ASCII]`
pub const fn clamp_code(code: u32) -> u8 {
    if code < MIN_ASCII as u32 {
        MIN_ASCII
    } else if code > MAX_ASCII as u32 {
        MAX_ASCII
    } else {
        code as u8
    }
}

/// Whether `c` is part of the domain without clamping
pub const fn is_printable(c: char) -> bool {
    let code = c as u32;
    code >= MIN_ASCII as u32 && code <= MAX_ASCII as u32
}

/// All codes of the domain in ascending order
pub fn printable_codes() -> impl DoubleEndedIterator<Item = u8> + ExactSizeIterator {
    MIN_ASCII..=MAX_ASCII
}

/// All characters of the domain in ascending code order
pub fn printable_chars() -> impl DoubleEndedIterator<Item = char> + ExactSizeIterator {
    printable_codes().map(char::from)
}
