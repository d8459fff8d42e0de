//! Core types and error definitions for Codebook.
//!
//! This crate provides:
//! - [`Connector`] - The typed joint between two words of a dictionary phrase
//! - [`Error`] - Rich error types with dictionary line context
//! - [`LoadWarning`] - Non-fatal issues found while loading a dictionary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod connector;
pub mod error;

pub use connector::Connector;
pub use error::{Error, ErrorContext, ErrorKind, LoadWarning, MalformedReason};

/// Result type alias using Codebook's Error type.
pub type Result<T> = std::result::Result<T, Error>;
