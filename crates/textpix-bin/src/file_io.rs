/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use log::{debug, info};

use crate::errors::CliErrors;

/// Make sure `input` can be read and is not also the output
pub fn verify_file_paths(input: &Path, output: Option<&Path>) -> Result<(), CliErrors> {
    if output == Some(input) {
        return Err(CliErrors::GenericString(format!(
            "Cannot use {input:?} as both input and output"
        )));
    }
    if !input.exists() {
        return Err(CliErrors::GenericString(format!(
            "Path {input:?}, does not exist"
        )));
    }
    if !input.is_file() {
        return Err(CliErrors::GenericString(format!(
            "Path {input:?} is not a file"
        )));
    }
    if let Some(output) = output {
        if output.exists() {
            info!("Overwriting path {output:?}");
        }
    }
    Ok(())
}

pub fn read_file(path: &Path) -> Result<Vec<u8>, CliErrors> {
    let mut file = File::open(path)?;
    let mut buf = Vec::with_capacity(file.metadata().map_or(0, |x| x.len() as usize));

    file.read_to_end(&mut buf)?;
    debug!("Read {} bytes from {path:?}", buf.len());

    Ok(buf)
}

pub fn read_text_file(path: &Path) -> Result<String, CliErrors> {
    let bytes = read_file(path)?;

    String::from_utf8(bytes)
        .map_err(|err| CliErrors::GenericString(format!("{path:?} is not valid UTF-8: {err}")))
}

pub fn write_file(path: &Path, data: &[u8]) -> Result<(), CliErrors> {
    let file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(path)?;

    let mut writer = BufWriter::new(file);

    writer.write_all(data)?;
    writer.flush()?;
    debug!("Wrote {} bytes to {path:?}", data.len());

    Ok(())
}
