//! Error types for tablegen
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Every variant is fatal: the run either completes and prints one
//! statement, or aborts having printed nothing. Per-record JSON parse
//! failures are not errors at all; the classifier logs and skips them.

use thiserror::Error;

/// The main error type for tablegen
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Location Errors
    // ============================================================================
    #[error("not a storage URL: {url}")]
    MalformedLocation { url: String },

    // ============================================================================
    // Storage Errors
    // ============================================================================
    #[error("storage request failed: {0}")]
    Storage(#[from] object_store::Error),

    #[error("failed to decompress '{key}': {source}")]
    Decompress {
        key: String,
        source: std::io::Error,
    },

    // ============================================================================
    // Sampling Errors
    // ============================================================================
    #[error("listing has {available} objects, need at least {requested} to sample")]
    InsufficientData { available: usize, requested: usize },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a malformed-location error
    pub fn malformed_location(url: impl Into<String>) -> Self {
        Self::MalformedLocation { url: url.into() }
    }

    /// Create a decompression error
    pub fn decompress(key: impl Into<String>, source: std::io::Error) -> Self {
        Self::Decompress {
            key: key.into(),
            source,
        }
    }

    /// Create an insufficient-data error
    pub fn insufficient_data(available: usize, requested: usize) -> Self {
        Self::InsufficientData {
            available,
            requested,
        }
    }
}

/// Result type alias for tablegen
pub type Result<T> = std::result::Result<T, Error>;
