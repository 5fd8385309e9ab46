//! CLI arguments

use clap::Parser;

/// Generate Hive external table DDL from an NDJSON data set in cloud storage
#[derive(Parser, Debug)]
#[command(name = "tablegen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Storage URL of the data set root (e.g. s3://bucket/prefix/)
    pub url: String,

    /// Number of objects to sample from the listing
    #[arg(short = 'n', long, default_value_t = 3)]
    pub sample_size: usize,

    /// Table name to emit in the statement (edit after generation)
    #[arg(long, default_value = crate::ddl::TABLE_NAME_PLACEHOLDER)]
    pub table_name: String,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
