//! Error types for the Basket plugin.
//!
//! The list core itself is infallible; [`BasketError`] covers the ambient
//! concerns around it: theme loading, configuration parsing and trace file
//! I/O.

use thiserror::Error;

/// The main error type for Basket plugin operations.
///
/// # Examples
///
/// ```
/// use basket::domain::BasketError;
///
/// fn validate_title(title: &str) -> Result<(), BasketError> {
///     if title.is_empty() {
///         return Err(BasketError::Config("title must not be empty".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(validate_title("").is_err());
/// ```
#[derive(Debug, Error)]
pub enum BasketError {
    /// Filesystem or I/O operation failed.
    ///
    /// Automatically converts from `std::io::Error` using `#[from]`.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme file could not be read or parsed, or the theme name is unknown.
    #[error("Theme error: {0}")]
    Theme(String),

    /// A configuration value is present but malformed.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Basket operations.
pub type Result<T> = std::result::Result<T, BasketError>;
