//! Storage access module
//!
//! Resolves a storage URL into a container and key prefix, and provides
//! listing and fetching of the objects underneath it.
//!
//! # Supported URL schemes
//!
//! - `s3://bucket/prefix` - AWS S3
//! - `r2://bucket/prefix` - Cloudflare R2 (S3-compatible)
//! - `gs://bucket/prefix` - Google Cloud Storage
//! - `az://container/prefix` - Azure Blob Storage

mod location;
mod source;

pub use location::{StorageLocation, StorageScheme};
pub use source::ObjectSource;
