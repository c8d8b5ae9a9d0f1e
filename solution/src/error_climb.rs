//! Error type shared by all parts of the solution.

use climb_api::error_given::APIError;
use thiserror::Error;

/// Errors raised by the tables, trails and organisers of this crate.
/// Errors coming from the given data structures are wrapped, so the `?` operator can be used on them directly.
#[derive(Error, Debug)]
pub enum ClimbError {
    /// Error raised by one of the given data structures
    #[error("{0}")]
    Given(#[from] APIError),
    /// A lookup or removal was performed for a key that is not stored
    #[error("Key not found: {0}")]
    KeyNotFound(String),
    /// Two distinct keys hash to the same slot on every level of an infinite hash table
    #[error("Keys {0:?} and {1:?} cannot be told apart by the table")]
    KeyCollision(String, String),
    /// A trail file could not be read or written
    #[error("Invalid trail file: {0}")]
    TrailFile(String),
}

impl ClimbError {
    /// True iff this error means that a key was missing, regardless of the layer that noticed it
    pub fn is_key_not_found(&self) -> bool {
        matches!(
            self,
            ClimbError::KeyNotFound(_) | ClimbError::Given(APIError::KeyNotFound(_))
        )
    }
}

/// Shorthand for results carrying a [`ClimbError`]
pub type Result<T> = std::result::Result<T, ClimbError>;
