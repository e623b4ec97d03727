use thiserror::Error;

/// Errors the engine can raise. All of them signal a caller bug in the shape
/// or range of an argument; every function either returns a value or fails
/// synchronously with one of these. Missing configuration is never an error:
/// the engine falls back to documented defaults instead (see `crate::config`).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("mismatched argument lengths: {left_name} has {left_len} entries, {right_name} has {right_len}")]
    MismatchedLengths {
        left_name: &'static str,
        left_len: usize,
        right_name: &'static str,
        right_len: usize,
    },

    #[error("{field} out of range: {value} not in [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<String> for EngineError {
    fn from(message: String) -> Self {
        EngineError::InvalidArgument(message)
    }
}

impl From<&str> for EngineError {
    fn from(message: &str) -> Self {
        EngineError::InvalidArgument(message.to_string())
    }
}
