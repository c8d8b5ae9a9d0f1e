//! The errors used in the given code. You can use this file as an inspiration to write down your own error types.
//!
//! All given data structures (the referential array, the linear probe table, the linked stack and the sorting and searching helpers) report failures through the [`APIError`] type below.
//! A missing key or a table without room is reported as an `Err`, so that callers can propagate it with the `?` operator.
//!
//! # Writing your own error types
//! Say you now want to implement your own error type, let's call it `MyError`, and use it in your solution.
//! You then have the option of embedding the below error type, allowing for easy interoperability using the `?` operator, by adding e.g. the following variant to your custom error type ;
//! ```ignore
//! #[error(<some_format_string_here>)]
//!  GivenError(#[from] error_given::APIError)
//! ```
//!
//! The [`thiserror`](https://docs.rs/thiserror/1.0.21/thiserror/) package takes care of the `Display` and `Error` boilerplate for us:
//! each `#[error]` tag generates one case of the derived `Display` implementation, and each `#[from]` tag generates a `From` implementation.

use std::io;
use thiserror::Error;

///Error type used in the provided code
/// The `#[from]` tag allows us to wrap a different type error in this error, e.g. to convert `io::Error`s to `APIO`-errors when using the `?` operator.
#[derive(Error, Debug)]
pub enum APIError {
    /// Error caused when performing IO in the API
    #[error("Issue using IO in the given code")]
    APIO(#[from] io::Error),
    /// Error caused when (de)serializing given types
    #[error("Issue with serialization in the given code")]
    APISerialize(#[from] bincode::Error),
    /// A lookup or removal was performed for a key that is not stored
    /// Note: the key is kept as a `String` so the message can name it
    #[error("Key not found: {0}")]
    KeyNotFound(String),
    /// Probing visited every slot of a table without finding room
    #[error("Table is full: {0}")]
    TableFull(&'static str),
    /// Invalid input when constructing or configuring a table
    #[error("Invalid table input: {0}")]
    TableInput(&'static str),
}

/// Define a generic alias for a `Result` with the error type `APIError`.
/// This shorthand is what the given code uses for its return types
pub type Result<T> = std::result::Result<T, APIError>;
