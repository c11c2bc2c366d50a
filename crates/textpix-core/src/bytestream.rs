/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple in-memory byte reader
//!
//! Image container headers are text based and parsed byte by byte,
//! with the occasional need to step back one byte, which is what
//! this reader provides.

static ERROR_MSG: &str = "No more bytes";

/// An encapsulation of a byte stream
///
/// The lifetime parameter is from the stream which we read from
pub struct ZByteReader<'a> {
    /// Data stream
    stream:   &'a [u8],
    position: usize
}

impl<'a> ZByteReader<'a> {
    pub const fn new(buf: &'a [u8]) -> ZByteReader<'a> {
        ZByteReader {
            stream:   buf,
            position: 0
        }
    }

    /// Move the position back by `n` bytes, stopping at the start
    pub fn rewind(&mut self, bytes: usize) {
        self.position = self.position.saturating_sub(bytes);
    }

    /// Number of bytes left between the current position and the end
    pub const fn remaining(&self) -> usize {
        // Must be saturating to prevent underflow
        self.stream.len().saturating_sub(self.position)
    }

    /// Whether there are at least `bytes` bytes left
    pub const fn has(&self, bytes: usize) -> bool {
        self.remaining() >= bytes
    }

    pub const fn eof(&self) -> bool {
        self.position >= self.stream.len()
    }

    pub const fn get_position(&self) -> usize {
        self.position
    }

    /// Read a single byte, returning `0` once the stream is exhausted
    pub fn get_u8(&mut self) -> u8 {
        match self.stream.get(self.position) {
            Some(byte) => {
                self.position += 1;
                *byte
            }
            None => 0
        }
    }

    /// Read a single byte or error out if the stream is exhausted
    pub fn get_u8_err(&mut self) -> Result<u8, &'static str> {
        match self.stream.get(self.position) {
            Some(byte) => {
                self.position += 1;
                Ok(*byte)
            }
            None => Err(ERROR_MSG)
        }
    }

    /// Look at `num_bytes` bytes starting `position` bytes after the current
    /// position, without moving the stream
    pub fn peek_at(&self, position: usize, num_bytes: usize) -> Result<&'a [u8], &'static str> {
        let start = self.position.saturating_add(position);
        let end = start.saturating_add(num_bytes);

        self.stream.get(start..end).ok_or(ERROR_MSG)
    }

    /// Return the next `num_bytes` bytes and move past them
    pub fn get_as_ref(&mut self, num_bytes: usize) -> Result<&'a [u8], &'static str> {
        let bytes = self.peek_at(0, num_bytes)?;
        self.position += num_bytes;

        Ok(bytes)
    }
}
