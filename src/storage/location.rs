//! Storage URL parsing

use crate::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Regex for a storage URL: `scheme://container/prefix`.
///
/// The prefix may be empty, but the slash after the container is required.
static LOCATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<scheme>s3|r2|gs|az)://(?P<container>[^/]+)/(?P<prefix>.*)$").unwrap()
});

/// Storage backend selected by the URL scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageScheme {
    /// AWS S3 (`s3://`)
    S3,
    /// Cloudflare R2, S3-compatible (`r2://`)
    R2,
    /// Google Cloud Storage (`gs://`)
    Gcs,
    /// Azure Blob Storage (`az://`)
    Azure,
}

/// A parsed storage URL: scheme, container, and key prefix.
///
/// Parsing is pure string work; no storage client is constructed and no
/// network call happens here. The original URL is kept verbatim so it can
/// be rendered into the generated statement's `LOCATION` clause.
#[derive(Debug, Clone)]
pub struct StorageLocation {
    scheme: StorageScheme,
    container: String,
    prefix: String,
    url: String,
}

impl StorageLocation {
    /// Parse a storage URL of the shape `scheme://container/prefix`.
    ///
    /// Fails with [`Error::MalformedLocation`] for any other shape,
    /// including unknown schemes and URLs missing the container/prefix
    /// separator (`s3://bucket` alone is rejected).
    pub fn parse(url: &str) -> Result<StorageLocation> {
        let captures = LOCATION_REGEX
            .captures(url)
            .ok_or_else(|| Error::malformed_location(url))?;

        let scheme = match &captures["scheme"] {
            "s3" => StorageScheme::S3,
            "r2" => StorageScheme::R2,
            "gs" => StorageScheme::Gcs,
            "az" => StorageScheme::Azure,
            // Unreachable: the regex only admits the four schemes above
            _ => return Err(Error::malformed_location(url)),
        };

        Ok(StorageLocation {
            scheme,
            container: captures["container"].to_string(),
            prefix: captures["prefix"].to_string(),
            url: url.to_string(),
        })
    }

    /// Storage backend the URL points at
    pub fn scheme(&self) -> StorageScheme {
        self.scheme
    }

    /// Bucket or container name
    pub fn container(&self) -> &str {
        &self.container
    }

    /// Key prefix under the container, possibly empty
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The original URL, verbatim
    pub fn url(&self) -> &str {
        &self.url
    }
}
