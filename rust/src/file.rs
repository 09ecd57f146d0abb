//! File backed variants of the entropy measurements.
//!
//! Files are read whole, in binary, and handed unmodified to the buffer
//! functions in [`crate::math`] and [`crate::blocks`].

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{blocks, math, EntropyError};

pub fn read_whole_file(path: impl AsRef<Path>) -> Result<Vec<u8>, EntropyError> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;

    log::debug!("Read file for entropy measurement; path={:?}, size={}", path, data.len());

    Ok(data)
}

/// Writes `values` to `path`, one per line, replacing any existing
/// file. Every value keeps a fractional part (`1.0`, not `1`) so the
/// output reads back unambiguously as floating point.
pub fn write_float_lines(path: impl AsRef<Path>, values: &[f64]) -> Result<(), EntropyError> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);

    for value in values {
        writeln!(writer, "{value:?}")?;
    }
    writer.flush()?;

    log::debug!("Saved entropy values; path={:?}, count={}", path, values.len());

    Ok(())
}

pub fn file_entropy(path: impl AsRef<Path>) -> Result<f64, EntropyError> {
    math::shannon_entropy(&read_whole_file(path)?)
}

pub fn file_bit_entropy(path: impl AsRef<Path>) -> Result<f64, EntropyError> {
    math::bit_entropy(&read_whole_file(path)?)
}

pub fn file_block_entropy(
    path: impl AsRef<Path>,
    block_size: usize,
) -> Result<Option<Vec<f64>>, EntropyError> {
    blocks::block_entropy(&read_whole_file(path)?, block_size)
}

pub fn file_block_bit_entropy(
    path: impl AsRef<Path>,
    block_size: usize,
) -> Result<Option<Vec<f64>>, EntropyError> {
    blocks::block_bit_entropy(&read_whole_file(path)?, block_size)
}
