//! # tablegen
//!
//! Infers a tabular schema from a random sample of newline-delimited
//! JSON objects in cloud storage, and emits a Hive/Presto
//! `CREATE EXTERNAL TABLE` statement describing that schema.
//!
//! ## How a run works
//!
//! ```text
//! url ─▶ locate ─▶ list keys ─▶ sample ─▶ fetch + gunzip ─▶ classify
//!                                                              │
//!        printed statement ◀─ render DDL ◀─ merged schema ◀── fold
//! ```
//!
//! Each record's fields classify into one of three column types
//! (`bigint`, `double`, `string`); conflicting observations widen
//! through the lattice `Integer < Float < Text`. One corrupt record
//! never aborts a run; a failed listing or download always does.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

/// Error types for the crate
pub mod error;

/// Schema inference: classification and the widening merge
pub mod schema;

/// Storage URL parsing, listing, and fetching
pub mod storage;

/// Sampling and schema accumulation
pub mod engine;

/// DDL rendering
pub mod ddl;

/// Command-line interface
pub mod cli;

pub use error::{Error, Result};
pub use schema::{classify_record, ScalarType, Schema};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
