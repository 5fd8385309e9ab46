//! Sampling and schema accumulation
//!
//! The run's middle stage: pick a small random probe of the listed keys,
//! then fold every record of every sampled object through the classifier
//! and the schema merge.

use crate::error::{Error, Result};
use crate::schema::{classify_record, Schema};
use crate::storage::ObjectSource;
use rand::seq::IndexedRandom;
use tracing::debug;

/// Choose `count` distinct keys uniformly at random, without replacement.
///
/// The probe is deliberately small (the CLI defaults to 3): it trades
/// schema confidence for cheap downloads. Callers wanting stronger
/// confidence raise the count.
pub fn sample_keys(keys: &[String], count: usize) -> Result<Vec<String>> {
    if keys.len() < count {
        return Err(Error::insufficient_data(keys.len(), count));
    }
    Ok(keys
        .choose_multiple(&mut rand::rng(), count)
        .cloned()
        .collect())
}

/// Accumulate one schema over every record of the sampled objects.
///
/// A strict left-fold starting from the empty schema: fetch each object,
/// split its text into lines, classify each line, merge into the running
/// result. Merge is commutative and associative, so the outcome does not
/// depend on object or record order.
pub async fn scan_sample(source: &ObjectSource, keys: &[String]) -> Result<Schema> {
    let mut schema = Schema::new();

    for key in keys {
        let bytes = source.fetch(key).await?;
        let text = String::from_utf8_lossy(&bytes);

        let mut records = 0usize;
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            records += 1;
            schema = schema.merge(classify_record(line));
        }
        debug!("classified {records} records from {key}");
    }

    Ok(schema)
}
