//! Error types for the tdl library.
//!
//! All failures are represented by the [`TdlError`] enum. A distance is never
//! encoded as a sentinel value: the only runtime failure of a distance
//! computation is [`TdlError::CapacityExceeded`].
//!
//! # Examples
//!
//! ```
//! use tdl::DamerauLevenshtein;
//!
//! let mut engine = DamerauLevenshtein::new(4).unwrap();
//! match engine.distance("short", "longer") {
//!     Ok(d) => println!("distance: {d}"),
//!     Err(e) if e.is_capacity_exceeded() => eprintln!("input too long: {e}"),
//!     Err(e) => eprintln!("error: {e}"),
//! }
//! ```

use thiserror::Error;

/// The main error type for tdl operations.
#[derive(Error, Debug)]
pub enum TdlError {
    /// An input is longer than the engine's workspace can hold.
    #[error("Capacity exceeded: input length {len} is greater than max size {max_size}")]
    CapacityExceeded { len: usize, max_size: usize },

    /// Invalid construction parameter.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with TdlError.
pub type Result<T> = std::result::Result<T, TdlError>;

impl TdlError {
    /// Create a new capacity error.
    pub fn capacity_exceeded(len: usize, max_size: usize) -> Self {
        TdlError::CapacityExceeded { len, max_size }
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        TdlError::InvalidArgument(msg.into())
    }

    /// Create a new config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        TdlError::Config(msg.into())
    }

    /// Whether this error reports an input longer than the engine capacity.
    pub fn is_capacity_exceeded(&self) -> bool {
        matches!(self, TdlError::CapacityExceeded { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = TdlError::capacity_exceeded(12, 10);
        assert_eq!(
            error.to_string(),
            "Capacity exceeded: input length 12 is greater than max size 10"
        );
        assert!(error.is_capacity_exceeded());

        let error = TdlError::invalid_argument("max_size must be positive");
        assert_eq!(
            error.to_string(),
            "Invalid argument: max_size must be positive"
        );
        assert!(!error.is_capacity_exceeded());

        let error = TdlError::config("bad value");
        assert_eq!(error.to_string(), "Config error: bad value");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<u32>("not json").unwrap_err();
        let tdl_error = TdlError::from(json_error);

        match tdl_error {
            TdlError::Json(_) => {} // Expected
            _ => panic!("Expected JSON error variant"),
        }
    }
}
