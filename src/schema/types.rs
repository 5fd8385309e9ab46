//! Schema types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Column type inferred for a JSON field.
///
/// The derived `Ord` is the widening order: `Integer < Float < Text`.
/// Widening two observations of the same field takes the supremum, so a
/// field seen as `Text` once stays `Text`, and `Float` subsumes `Integer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarType {
    Integer,
    Float,
    Text,
}

impl ScalarType {
    /// Classify a parsed JSON value.
    ///
    /// Integral numbers map to `Integer`; any other number (including a
    /// whole number written as `3.0`) maps to `Float`; everything else
    /// (string, boolean, null, array, object) degrades to `Text`.
    pub fn of_value(value: &serde_json::Value) -> ScalarType {
        use serde_json::Value;
        match value {
            Value::Number(n) if n.is_i64() || n.is_u64() => ScalarType::Integer,
            Value::Number(_) => ScalarType::Float,
            Value::String(_) | Value::Bool(_) | Value::Null | Value::Array(_) | Value::Object(_) => {
                ScalarType::Text
            }
        }
    }

    /// Combine two observations of the same field, returning the wider type.
    pub fn widen(self, other: ScalarType) -> ScalarType {
        self.max(other)
    }
}

impl std::fmt::Display for ScalarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScalarType::Integer => write!(f, "bigint"),
            ScalarType::Float => write!(f, "double"),
            ScalarType::Text => write!(f, "string"),
        }
    }
}

/// Mapping from JSON field name to its inferred column type.
///
/// Field names are case-sensitive, exactly as they appear in the records.
/// Columns enumerate in alphabetical order; that ordering is cosmetic
/// (it pins golden output) and carries no schema meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    fields: BTreeMap<String, ScalarType>,
}

impl Schema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a field observation, widening any previous one.
    pub fn observe(&mut self, field: impl Into<String>, scalar_type: ScalarType) {
        self.fields
            .entry(field.into())
            .and_modify(|current| *current = current.widen(scalar_type))
            .or_insert(scalar_type);
    }

    /// Merge another schema into this one, field by field.
    ///
    /// Commutative and associative, with the empty schema as identity.
    /// A field present in both sides widens to the supremum; a field
    /// present in one side carries over unchanged. Absence is treated as
    /// "no information", never as a conflicting observation.
    #[must_use]
    pub fn merge(mut self, other: Schema) -> Schema {
        for (field, scalar_type) in other.fields {
            self.observe(field, scalar_type);
        }
        self
    }

    /// Look up the inferred type of a field
    pub fn get(&self, field: &str) -> Option<ScalarType> {
        self.fields.get(field).copied()
    }

    /// Iterate columns in alphabetical order
    pub fn columns(&self) -> impl Iterator<Item = (&str, ScalarType)> {
        self.fields.iter().map(|(name, ty)| (name.as_str(), *ty))
    }

    /// Number of inferred columns
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no field has been observed yet
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
