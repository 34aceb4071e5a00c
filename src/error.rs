//! Error types and result type for the oidmap crate.
//!
//! This module defines all error variants that can occur while decoding a
//! schema LDIF file and resolving attribute OIDs. It uses the `snafu` library
//! for ergonomic error handling with automatic backtrace capture.
//!
//! Every failure here is fatal: the generated mapping table is meant to be an
//! exhaustive, trustworthy source artifact, so the pipeline aborts on the
//! first malformed entry instead of skipping it.
//!
//! # Error Variants
//!
//! - [`SchemaError::Io`]: I/O errors from file operations
//! - [`SchemaError::LdifFormat`]: Malformed LDIF record structure
//! - [`SchemaError::MacroNotFound`]: An OID macro reference with no definition
//! - [`SchemaError::DefinitionSyntax`]: An attribute definition that does not
//!   match the expected `( OID NAME ... )` shape
//! - [`SchemaError::InvalidOid`]: A resolved OID with non-numeric components

use std::io;

use snafu::{Backtrace, Snafu};

// Re-export snafu for context providers
pub use snafu;

/// Main error type for the oidmap crate.
///
/// All errors include automatic backtrace capture for debugging purposes.
/// Use the helper methods on `SchemaError` for convenient error construction.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum SchemaError {
    /// I/O error occurred while reading the schema file.
    #[snafu(display("IO error: {source}"))]
    Io {
        source: io::Error,
        backtrace: Backtrace,
    },

    /// The LDIF stream is structurally malformed.
    #[snafu(display("Invalid LDIF: {message}"))]
    LdifFormat {
        message: String,
        backtrace: Backtrace,
    },

    /// An OID macro reference points at a name that was never defined.
    #[snafu(display("Undefined OID macro: {name}"))]
    MacroNotFound {
        name: String,
        backtrace: Backtrace,
    },

    /// A schema definition does not match the expected shape.
    #[snafu(display("Schema definition doesn't match expected shape: {entry}"))]
    DefinitionSyntax {
        entry: String,
        backtrace: Backtrace,
    },

    /// A resolved OID contains a component that is not a decimal integer.
    #[snafu(display("Invalid OID: {oid}"))]
    InvalidOid {
        oid: String,
        backtrace: Backtrace,
    },
}

// For automatic conversions from standard error types
impl From<io::Error> for SchemaError {
    fn from(source: io::Error) -> Self {
        Self::Io { source, backtrace: Backtrace::capture() }
    }
}

impl From<std::string::FromUtf8Error> for SchemaError {
    fn from(source: std::string::FromUtf8Error) -> Self {
        Self::LdifFormat { message: format!("Invalid UTF-8 value: {}", source), backtrace: Backtrace::capture() }
    }
}

/// Helper methods for creating errors without context providers.
impl SchemaError {
    /// Creates an `LdifFormat` error with the given message.
    pub fn ldif_format<S: Into<String>>(message: S) -> Self {
        Self::LdifFormat {
            message: message.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates a `MacroNotFound` error for the given macro name.
    pub fn macro_not_found<S: Into<String>>(name: S) -> Self {
        Self::MacroNotFound {
            name: name.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates a `DefinitionSyntax` error quoting the offending entry text.
    pub fn definition_syntax<S: Into<String>>(entry: S) -> Self {
        Self::DefinitionSyntax {
            entry: entry.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates an `InvalidOid` error for the given OID text.
    pub fn invalid_oid<S: Into<String>>(oid: S) -> Self {
        Self::InvalidOid {
            oid: oid.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Checks if this error is a `MacroNotFound` variant.
    pub fn is_macro_not_found(&self) -> bool {
        if let SchemaError::MacroNotFound { .. } = self {
            return true;
        }
        false
    }
}

/// A specialized `Result` type for oidmap operations.
///
/// This is a convenience type alias that uses [`SchemaError`] as the error type.
pub type Result<T> = std::result::Result<T, SchemaError>;
