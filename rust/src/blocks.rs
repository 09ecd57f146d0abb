//! Entropy of consecutive, non-overlapping fixed size blocks.
//!
//! A buffer is split into `len / block_size` blocks in buffer order;
//! a trailing remainder shorter than `block_size` is not measured.
//! Buffers holding no complete block yield `None` rather than an
//! empty sequence.

use crate::math::Scale;
use crate::EntropyError;

/// Per-block entropy on the probability scale, `[0, 1]`.
pub fn block_entropy(data: &[u8], block_size: usize) -> Result<Option<Vec<f64>>, EntropyError> {
    measure_blocks(data, block_size, Scale::Normalized)
}

/// Per-block entropy in bits per byte, `[0, 8]`.
pub fn block_bit_entropy(
    data: &[u8],
    block_size: usize,
) -> Result<Option<Vec<f64>>, EntropyError> {
    measure_blocks(data, block_size, Scale::Bits)
}

pub fn measure_blocks(
    data: &[u8],
    block_size: usize,
    scale: Scale,
) -> Result<Option<Vec<f64>>, EntropyError> {
    if block_size == 0 {
        return Err(EntropyError::InvalidArgument("block size must be positive"));
    }

    let chunks = data.chunks_exact(block_size);
    if chunks.len() == 0 {
        log::trace!(
            "Buffer shorter than a single block; len={}, block_size={}",
            data.len(),
            block_size
        );
        return Ok(None);
    }

    if !chunks.remainder().is_empty() {
        log::trace!(
            "Ignoring trailing partial block; remainder={}, block_size={}",
            chunks.remainder().len(),
            block_size
        );
    }

    chunks
        .map(|block| scale.measure(block))
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}
