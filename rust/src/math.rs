use crate::EntropyError;

/// Which normalization an entropy value is reported in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scale {
    /// Probability scale, `[0, 1]`
    Normalized,
    /// Bits per byte, `[0, 8]`
    Bits,
}

impl Scale {
    pub fn measure(self, data: &[u8]) -> Result<f64, EntropyError> {
        match self {
            Self::Normalized => shannon_entropy(data),
            Self::Bits => bit_entropy(data),
        }
    }

    pub fn max(self) -> f64 {
        match self {
            Self::Normalized => 1.0,
            Self::Bits => 8.0,
        }
    }
}

/// Shannon entropy of `data` normalized by the 256 possible byte
/// values, so the result lies within `[0, 1]`.
///
/// A buffer of a single repeated byte measures `0.0`, a buffer where
/// every byte value occurs equally often measures `1.0`. Empty input
/// has no defined distribution and is rejected.
pub fn shannon_entropy(data: &[u8]) -> Result<f64, EntropyError> {
    if data.is_empty() {
        return Err(EntropyError::InvalidArgument(
            "cannot measure entropy of an empty buffer",
        ));
    }

    let logbase = 256f64.ln();
    let mut entropy = 0.0;
    let mut counts = [0usize; 256];

    for &b in data {
        counts[b as usize] += 1;
    }

    for &count in &counts {
        if count == 0 {
            continue;
        }

        let p = count as f64 / data.len() as f64;
        // log base 256 via natural logarithms, normalized per term
        entropy -= p * p.ln() / logbase;
    }

    // clamp rounding overshoot to the normalized bound
    Ok(entropy.min(Scale::Normalized.max()))
}

/// Shannon entropy of `data` in bits per byte, within `[0, 8]`.
pub fn bit_entropy(data: &[u8]) -> Result<f64, EntropyError> {
    Ok(shannon_entropy(data)? * 8.0)
}
