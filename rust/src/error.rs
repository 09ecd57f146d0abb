use pyo3::{exceptions::PyValueError, PyErr};
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EntropyError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<EntropyError> for PyErr {
    fn from(err: EntropyError) -> Self {
        match err {
            EntropyError::Io(err) => err.into(),
            err @ EntropyError::InvalidArgument(_) => PyValueError::new_err(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = EntropyError::InvalidArgument("block size must be positive");

        assert_eq!(err.to_string(), "Invalid argument: block size must be positive");
    }

    #[test]
    fn test_io_error_is_transparent() {
        let err = EntropyError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such file",
        ));

        assert!(matches!(err, EntropyError::Io(_)));
        assert_eq!(err.to_string(), "no such file");
    }
}
