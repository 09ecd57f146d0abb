pub mod blocks;
mod error;
pub mod file;
pub mod math;

pub use error::EntropyError;

use pyo3::{exceptions::PyOverflowError, prelude::*};
use std::path::PathBuf;

/// Python integers are signed; anything below one is not a block size.
fn block_size(value: i64) -> Result<usize, EntropyError> {
    match usize::try_from(value) {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(EntropyError::InvalidArgument("block size must be positive")),
    }
}

/// Extracts a block size from an arbitrary Python integer. Integers
/// beyond the `i64` range are accepted when positive, as no buffer can
/// hold a block that large.
fn block_size_arg(value: &Bound<'_, PyAny>) -> PyResult<usize> {
    match value.extract::<i64>() {
        Ok(value) => Ok(block_size(value)?),
        Err(err) if err.is_instance_of::<PyOverflowError>(value.py()) => {
            if value.gt(0)? {
                Ok(usize::MAX)
            } else {
                Err(EntropyError::InvalidArgument("block size must be positive").into())
            }
        }
        Err(err) => Err(err),
    }
}

/// Calculates normalized Shannon entropy of data, between 0 and 1
#[pyfunction(name = "shannon_entropy", text_signature = "(data)")]
fn py_shannon_entropy(py: Python, data: &[u8]) -> PyResult<f64> {
    Ok(py.allow_threads(|| math::shannon_entropy(data))?)
}

/// Calculates Shannon entropy of data in bits per byte, between 0 and 8
#[pyfunction(name = "bit_entropy", text_signature = "(data)")]
fn py_bit_entropy(py: Python, data: &[u8]) -> PyResult<f64> {
    Ok(py.allow_threads(|| math::bit_entropy(data))?)
}

/// Calculates normalized entropy of each full block of data
#[pyfunction(name = "block_entropy", text_signature = "(data, block_size)")]
fn py_block_entropy(
    py: Python,
    data: &[u8],
    block_size: &Bound<'_, PyAny>,
) -> PyResult<Option<Vec<f64>>> {
    let block_size = block_size_arg(block_size)?;
    Ok(py.allow_threads(|| blocks::block_entropy(data, block_size))?)
}

/// Calculates entropy in bits per byte of each full block of data
#[pyfunction(name = "block_bit_entropy", text_signature = "(data, block_size)")]
fn py_block_bit_entropy(
    py: Python,
    data: &[u8],
    block_size: &Bound<'_, PyAny>,
) -> PyResult<Option<Vec<f64>>> {
    let block_size = block_size_arg(block_size)?;
    Ok(py.allow_threads(|| blocks::block_bit_entropy(data, block_size))?)
}

/// Calculates normalized Shannon entropy of a file's contents
#[pyfunction(name = "file_entropy", text_signature = "(path)")]
fn py_file_entropy(py: Python, path: PathBuf) -> PyResult<f64> {
    Ok(py.allow_threads(|| file::file_entropy(path))?)
}

/// Calculates Shannon entropy of a file's contents in bits per byte
#[pyfunction(name = "file_bit_entropy", text_signature = "(path)")]
fn py_file_bit_entropy(py: Python, path: PathBuf) -> PyResult<f64> {
    Ok(py.allow_threads(|| file::file_bit_entropy(path))?)
}

/// Calculates normalized entropy of each full block of a file
#[pyfunction(name = "file_block_entropy", text_signature = "(path, block_size)")]
fn py_file_block_entropy(
    py: Python,
    path: PathBuf,
    block_size: &Bound<'_, PyAny>,
) -> PyResult<Option<Vec<f64>>> {
    let block_size = block_size_arg(block_size)?;
    Ok(py.allow_threads(|| file::file_block_entropy(path, block_size))?)
}

/// Calculates entropy in bits per byte of each full block of a file
#[pyfunction(name = "file_block_bit_entropy", text_signature = "(path, block_size)")]
fn py_file_block_bit_entropy(
    py: Python,
    path: PathBuf,
    block_size: &Bound<'_, PyAny>,
) -> PyResult<Option<Vec<f64>>> {
    let block_size = block_size_arg(block_size)?;
    Ok(py.allow_threads(|| file::file_block_bit_entropy(path, block_size))?)
}

/// Writes entropy values to a text file, one value per line
#[pyfunction(name = "save_entropy_list", text_signature = "(path, values)")]
fn py_save_entropy_list(py: Python, path: PathBuf, values: Vec<f64>) -> PyResult<()> {
    Ok(py.allow_threads(|| file::write_float_lines(path, &values))?)
}

/// Byte entropy measurements
#[pymodule]
fn _rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_shannon_entropy, m)?)?;
    m.add_function(wrap_pyfunction!(py_bit_entropy, m)?)?;
    m.add_function(wrap_pyfunction!(py_block_entropy, m)?)?;
    m.add_function(wrap_pyfunction!(py_block_bit_entropy, m)?)?;
    m.add_function(wrap_pyfunction!(py_file_entropy, m)?)?;
    m.add_function(wrap_pyfunction!(py_file_bit_entropy, m)?)?;
    m.add_function(wrap_pyfunction!(py_file_block_entropy, m)?)?;
    m.add_function(wrap_pyfunction!(py_file_block_bit_entropy, m)?)?;
    m.add_function(wrap_pyfunction!(py_save_entropy_list, m)?)?;

    pyo3_log::init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use pyo3::exceptions::{PyTypeError, PyValueError};

    use super::*;

    #[test]
    fn test_block_size_positive() {
        assert_eq!(block_size(1).unwrap(), 1);
        assert_eq!(block_size(4096).unwrap(), 4096);
    }

    #[test]
    fn test_block_size_non_positive() {
        for value in [0, -1, i64::MIN] {
            assert!(matches!(
                block_size(value),
                Err(EntropyError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn test_block_size_arg_beyond_i64() -> PyResult<()> {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| -> PyResult<()> {
            let huge = u128::MAX.into_pyobject(py)?;
            assert_eq!(block_size_arg(huge.as_any())?, usize::MAX);

            let huge_negative = i128::MIN.into_pyobject(py)?;
            let err = block_size_arg(huge_negative.as_any()).unwrap_err();
            assert!(err.is_instance_of::<PyValueError>(py));

            Ok(())
        })
    }

    #[test]
    fn test_block_size_arg_in_range() -> PyResult<()> {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| -> PyResult<()> {
            let size = 512i64.into_pyobject(py)?;
            assert_eq!(block_size_arg(size.as_any())?, 512);

            let negative = (-1i64).into_pyobject(py)?;
            let err = block_size_arg(negative.as_any()).unwrap_err();
            assert!(err.is_instance_of::<PyValueError>(py));

            let not_an_int = "16".into_pyobject(py)?;
            let err = block_size_arg(not_an_int.as_any()).unwrap_err();
            assert!(err.is_instance_of::<PyTypeError>(py));

            Ok(())
        })
    }
}
