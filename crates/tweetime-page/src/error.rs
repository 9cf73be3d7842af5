//! Error types for page assembly.

use thiserror::Error;
use tweetime_data::DataError;

/// Errors that can occur while assembling a page.
#[derive(Error, Debug)]
pub enum PageError {
    /// A component contract was violated by its caller.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Loading a static artifact failed.
    #[error(transparent)]
    Data(#[from] DataError),
}

/// Result type alias for page assembly.
pub type Result<T> = std::result::Result<T, PageError>;
