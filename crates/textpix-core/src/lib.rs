/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by all textpix libraries
//!
//! It currently contains
//!
//! - The printable ASCII domain the color mappings operate on
//! - An 8-bit RGB color type
//! - Colorspace information for pixel buffers
//! - Image decoder and encoder options
//! - A small byte reader used by the image container parsers
//! - Logging macros which compile to nothing unless the `log` feature is on
//!
//! # Features
//!  - `std`: Implement `std::error::Error` and friends for error types.
//!
//!  - `log`: Forward logging macros to the [log](https://docs.rs/log) crate.
//!
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub mod bytestream;
pub mod charset;
pub mod color;
pub mod colorspace;
pub mod log;
pub mod options;
pub mod serde;
