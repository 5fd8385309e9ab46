//! Object listing and fetching

use crate::error::{Error, Result};
use crate::storage::{StorageLocation, StorageScheme};
use bytes::Bytes;
use futures::TryStreamExt;
use object_store::aws::AmazonS3Builder;
use object_store::azure::MicrosoftAzureBuilder;
use object_store::gcp::GoogleCloudStorageBuilder;
use object_store::path::Path as ObjectPath;
use object_store::{ObjectMeta, ObjectStore};
use std::io::Read;
use std::sync::Arc;
use tracing::debug;

/// Suffix marking gzip-compressed objects
const GZIP_SUFFIX: &str = ".gz";

/// Read access to the objects under one storage prefix.
///
/// Credentials come from the environment through the `object_store`
/// builders; nothing is read from disk and no temp files are created,
/// so repeated runs leave no residual local state.
pub struct ObjectSource {
    store: Arc<dyn ObjectStore>,
    prefix: Option<ObjectPath>,
}

impl ObjectSource {
    /// Build the scheme-appropriate store client for a parsed location.
    pub fn connect(location: &StorageLocation) -> Result<ObjectSource> {
        let store: Arc<dyn ObjectStore> = match location.scheme() {
            StorageScheme::S3 => {
                let builder = AmazonS3Builder::from_env().with_bucket_name(location.container());
                Arc::new(builder.build()?)
            }
            StorageScheme::R2 => {
                let mut builder =
                    AmazonS3Builder::from_env().with_bucket_name(location.container());
                // R2 endpoint: https://<account_id>.r2.cloudflarestorage.com
                // AWS_ENDPOINT is read automatically by from_env()
                if let Ok(endpoint) = std::env::var("R2_ENDPOINT_URL") {
                    builder = builder.with_endpoint(endpoint);
                }
                Arc::new(builder.build()?)
            }
            StorageScheme::Gcs => {
                let builder =
                    GoogleCloudStorageBuilder::from_env().with_bucket_name(location.container());
                Arc::new(builder.build()?)
            }
            StorageScheme::Azure => {
                let builder =
                    MicrosoftAzureBuilder::from_env().with_container_name(location.container());
                Arc::new(builder.build()?)
            }
        };

        Ok(Self::with_store(store, location.prefix()))
    }

    /// Wrap an existing store. Used by tests to inject an in-memory store.
    pub fn with_store(store: Arc<dyn ObjectStore>, prefix: &str) -> ObjectSource {
        let prefix = if prefix.is_empty() {
            None
        } else {
            Some(ObjectPath::from(prefix))
        };
        ObjectSource { store, prefix }
    }

    /// List all object keys under the prefix.
    ///
    /// An empty listing is valid and yields zero keys; only a failed
    /// listing call is an error.
    pub async fn list(&self) -> Result<Vec<String>> {
        let objects: Vec<ObjectMeta> = self.store.list(self.prefix.as_ref()).try_collect().await?;

        let keys: Vec<String> = objects
            .into_iter()
            .map(|meta| meta.location.to_string())
            .collect();
        debug!("listed {} objects under {:?}", keys.len(), self.prefix);
        Ok(keys)
    }

    /// Fetch one object's bytes, inflating gzip when the key ends in `.gz`.
    pub async fn fetch(&self, key: &str) -> Result<Bytes> {
        let path = ObjectPath::from(key);
        let raw = self.store.get(&path).await?.bytes().await?;

        if !key.ends_with(GZIP_SUFFIX) {
            return Ok(raw);
        }

        let mut decoder = flate2::read::GzDecoder::new(&raw[..]);
        let mut inflated = Vec::new();
        decoder
            .read_to_end(&mut inflated)
            .map_err(|source| Error::decompress(key, source))?;
        debug!("decompressed {} -> {} bytes for {key}", raw.len(), inflated.len());
        Ok(Bytes::from(inflated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use object_store::memory::InMemory;
    use std::io::Write;

    async fn put(store: &InMemory, key: &str, body: &[u8]) {
        store
            .put(&ObjectPath::from(key), Bytes::copy_from_slice(body).into())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_list_respects_prefix() {
        let store = InMemory::new();
        put(&store, "logs/a.json", b"{}").await;
        put(&store, "logs/b.json", b"{}").await;
        put(&store, "other/c.json", b"{}").await;

        let source = ObjectSource::with_store(Arc::new(store), "logs");
        let mut keys = source.list().await.unwrap();
        keys.sort();

        assert_eq!(keys, vec!["logs/a.json", "logs/b.json"]);
    }

    #[tokio::test]
    async fn test_empty_listing_is_valid() {
        let source = ObjectSource::with_store(Arc::new(InMemory::new()), "logs");
        assert!(source.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_plain_object() {
        let store = InMemory::new();
        put(&store, "logs/a.json", b"{\"id\": 1}\n").await;

        let source = ObjectSource::with_store(Arc::new(store), "logs");
        let bytes = source.fetch("logs/a.json").await.unwrap();

        assert_eq!(&bytes[..], b"{\"id\": 1}\n");
    }

    #[tokio::test]
    async fn test_fetch_inflates_gzip() {
        let mut encoder =
            flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(b"{\"id\": 1}\n").unwrap();
        let compressed = encoder.finish().unwrap();

        let store = InMemory::new();
        put(&store, "logs/a.json.gz", &compressed).await;

        let source = ObjectSource::with_store(Arc::new(store), "logs");
        let bytes = source.fetch("logs/a.json.gz").await.unwrap();

        assert_eq!(&bytes[..], b"{\"id\": 1}\n");
    }

    #[tokio::test]
    async fn test_fetch_corrupt_gzip_fails() {
        let store = InMemory::new();
        put(&store, "logs/a.json.gz", b"definitely not gzip").await;

        let source = ObjectSource::with_store(Arc::new(store), "logs");
        let err = source.fetch("logs/a.json.gz").await.unwrap_err();

        assert!(matches!(err, Error::Decompress { .. }));
    }

    #[tokio::test]
    async fn test_fetch_missing_object_fails() {
        let source = ObjectSource::with_store(Arc::new(InMemory::new()), "logs");
        let err = source.fetch("logs/missing.json").await.unwrap_err();

        assert!(matches!(err, Error::Storage(_)));
    }
}
