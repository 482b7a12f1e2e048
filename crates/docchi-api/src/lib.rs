//! Client library for the Docchi anime catalog API.
//!
//! Every remote endpoint is a single GET request whose JSON body is
//! returned to the caller as-is. Nothing is cached or retried.

/// Docchi API client.
pub mod docchi;

/// Error types shared by every client operation.
pub mod error;

pub use error::{DocchiError, Result};
