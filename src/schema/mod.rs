//! Schema inference module
//!
//! Infers a flat tabular schema from newline-delimited JSON records.
//!
//! # Overview
//!
//! Each record classifies into a field -> type mapping over the three
//! column types `bigint`, `double`, `string`. Mappings from different
//! records merge through a widening lattice (`Integer < Float < Text`),
//! so conflicting observations of a field settle on the most general
//! type ever seen for it.

mod inference;
mod types;

pub use inference::classify_record;
pub use types::{ScalarType, Schema};

#[cfg(test)]
mod tests;
