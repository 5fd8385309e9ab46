//! CLI runner - executes the run

use crate::cli::commands::Cli;
use crate::ddl::{render, PartitionSpec};
use crate::engine::{sample_keys, scan_sample};
use crate::error::Result;
use crate::storage::{ObjectSource, StorageLocation};
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the whole pipeline: locate, list, sample, scan, render.
    ///
    /// Prints the statement to stdout on success; any failure propagates
    /// to the process boundary with nothing printed.
    pub async fn run(&self) -> Result<()> {
        let location = StorageLocation::parse(&self.cli.url)?;
        debug!(
            "resolved container '{}', prefix '{}'",
            location.container(),
            location.prefix()
        );

        let source = ObjectSource::connect(&location)?;
        let keys = source.list().await?;
        info!("found {} objects under {}", keys.len(), self.cli.url);

        let sample = sample_keys(&keys, self.cli.sample_size)?;
        debug!("sampled keys: {sample:?}");

        let schema = scan_sample(&source, &sample).await?;
        info!("inferred {} columns", schema.len());

        let statement = render(
            &schema,
            &PartitionSpec::default(),
            location.url(),
            &self.cli.table_name,
        );
        println!("{statement}");
        Ok(())
    }
}
