// ABOUTME: Error types for RSS model construction, loading, and serialization.
// ABOUTME: Provides SyndicationError with argument, parse, write, and config variants.

use std::fmt;
use thiserror::Error;

/// Errors raised by the RSS object model.
///
/// Content-level problems found while loading a document are never reported
/// through this type: the loaders skip the offending field and keep going.
/// Only programmer errors (invalid setter arguments) and whole-document
/// failures surface here.
#[derive(Debug, Error)]
pub enum SyndicationError {
    /// A required text property was set to an empty or whitespace-only value.
    #[error("{field} must not be empty")]
    EmptyValue { field: &'static str },

    /// A bounded numeric property was set above its maximum.
    #[error("{field} value {value} exceeds the maximum of {max}")]
    OutOfRange {
        field: &'static str,
        value: u64,
        max: u64,
    },

    /// Attempted to set a cloud protocol to the `None` sentinel.
    #[error("cloud protocol must be soap, xml-rpc or http-post")]
    InvalidProtocol,

    /// A value could not be interpreted as a URI reference.
    #[error("invalid uri {value:?}: {reason}")]
    InvalidUri { value: String, reason: String },

    /// The document is not well-formed XML or has no usable root.
    #[error("failed to parse document: {0}")]
    Parse(String),

    /// The XML writer failed.
    #[error("failed to write document: {0}")]
    Write(String),

    /// Settings could not be read.
    #[error("invalid settings: {0}")]
    Config(String),
}

impl SyndicationError {
    /// Creates a Parse error from an underlying reader error.
    pub fn parse(err: impl fmt::Display) -> Self {
        SyndicationError::Parse(err.to_string())
    }

    /// Creates a Write error from an underlying writer error.
    pub fn write(err: impl fmt::Display) -> Self {
        SyndicationError::Write(err.to_string())
    }

    /// Creates an EmptyValue error for the named field.
    pub fn empty(field: &'static str) -> Self {
        SyndicationError::EmptyValue { field }
    }

    /// True for errors caused by an invalid argument rather than by document content.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            SyndicationError::EmptyValue { .. }
                | SyndicationError::OutOfRange { .. }
                | SyndicationError::InvalidProtocol
                | SyndicationError::InvalidUri { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, SyndicationError>;
