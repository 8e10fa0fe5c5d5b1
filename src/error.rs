//! Typed errors for the legal code parsers and the scraped-content validators.
//!
//! The binary converts these into `anyhow::Error` at the command boundary.

use thiserror::Error;

/// Failure while turning a legal code filename into a [`LicenseIdentifier`](crate::models::LicenseIdentifier).
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    /// The filename has no `_<version>` segment after the license token.
    #[error("no version segment in legal code filename {filename:?}")]
    MissingVersion { filename: String },

    /// The version had to be compared against 4.0 but is not a number.
    #[error("could not convert version {version:?} to a number")]
    InvalidVersion { version: String },
}

/// Failure while mapping a legal code URL back to its license URL.
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("regex did not match {url}")]
    NoLegalcodeSuffix { url: String },

    #[error("invalid legal code pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// A scraped value held something other than text, a list, or a map.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("not a string, list, or map: {kind}: {value}")]
    NotTextInList { kind: String, value: String },

    #[error("not a string: k={key} {kind}: {value}")]
    NotTextInMap {
        key: String,
        kind: String,
        value: String,
    },
}
