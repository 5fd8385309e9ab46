//! Schema inference tests

use super::*;
use test_case::test_case;

fn schema(entries: &[(&str, ScalarType)]) -> Schema {
    let mut schema = Schema::new();
    for (field, ty) in entries {
        schema.observe(*field, *ty);
    }
    schema
}

#[test_case(ScalarType::Integer, ScalarType::Integer => ScalarType::Integer)]
#[test_case(ScalarType::Integer, ScalarType::Float => ScalarType::Float)]
#[test_case(ScalarType::Integer, ScalarType::Text => ScalarType::Text)]
#[test_case(ScalarType::Float, ScalarType::Integer => ScalarType::Float)]
#[test_case(ScalarType::Float, ScalarType::Float => ScalarType::Float)]
#[test_case(ScalarType::Float, ScalarType::Text => ScalarType::Text)]
#[test_case(ScalarType::Text, ScalarType::Integer => ScalarType::Text)]
#[test_case(ScalarType::Text, ScalarType::Float => ScalarType::Text)]
#[test_case(ScalarType::Text, ScalarType::Text => ScalarType::Text)]
fn test_widen_is_supremum(a: ScalarType, b: ScalarType) -> ScalarType {
    a.widen(b)
}

#[test]
fn test_widen_respected_under_merge() {
    let types = [ScalarType::Integer, ScalarType::Float, ScalarType::Text];
    for a in types {
        for b in types {
            let merged = schema(&[("f", a)]).merge(schema(&[("f", b)]));
            assert_eq!(merged.get("f"), Some(a.max(b)));
        }
    }
}

#[test]
fn test_merge_commutative() {
    let a = schema(&[("id", ScalarType::Integer), ("name", ScalarType::Text)]);
    let b = schema(&[("id", ScalarType::Float), ("score", ScalarType::Float)]);

    assert_eq!(a.clone().merge(b.clone()), b.merge(a));
}

#[test]
fn test_merge_associative() {
    let a = schema(&[("id", ScalarType::Integer)]);
    let b = schema(&[("id", ScalarType::Float), ("name", ScalarType::Text)]);
    let c = schema(&[("id", ScalarType::Text), ("score", ScalarType::Float)]);

    let left = a.clone().merge(b.clone()).merge(c.clone());
    let right = a.merge(b.merge(c));
    assert_eq!(left, right);
}

#[test]
fn test_merge_empty_identity() {
    let a = schema(&[("id", ScalarType::Integer), ("name", ScalarType::Text)]);

    assert_eq!(a.clone().merge(Schema::new()), a);
    assert_eq!(Schema::new().merge(a.clone()), a);
}

#[test]
fn test_missing_field_neutrality() {
    // A field absent from one side never downgrades the other side's type
    let merged = schema(&[("f", ScalarType::Integer)]).merge(Schema::new());
    assert_eq!(merged.get("f"), Some(ScalarType::Integer));
    assert_eq!(merged.len(), 1);
}

#[test]
fn test_classify_simple_record() {
    let schema = classify_record(r#"{"id": 1, "name": "x", "score": 1.5}"#);

    assert_eq!(schema.get("id"), Some(ScalarType::Integer));
    assert_eq!(schema.get("name"), Some(ScalarType::Text));
    assert_eq!(schema.get("score"), Some(ScalarType::Float));
}

#[test_case(r#"{"a": 3}"# => Some(ScalarType::Integer); "integral number")]
#[test_case(r#"{"a": 3.0}"# => Some(ScalarType::Float); "float-syntax whole number")]
#[test_case(r#"{"a": -7}"# => Some(ScalarType::Integer); "negative integer")]
#[test_case(r#"{"a": 1.5e3}"# => Some(ScalarType::Float); "exponent notation")]
#[test_case(r#"{"a": "3"}"# => Some(ScalarType::Text); "numeric string")]
#[test_case(r#"{"a": true}"# => Some(ScalarType::Text); "boolean")]
#[test_case(r#"{"a": null}"# => Some(ScalarType::Text); "null")]
#[test_case(r#"{"a": [1, 2]}"# => Some(ScalarType::Text); "array value")]
#[test_case(r#"{"a": {"b": 1}}"# => Some(ScalarType::Text); "nested object")]
fn test_classify_value_kinds(raw: &str) -> Option<ScalarType> {
    classify_record(raw).get("a")
}

#[test_case(""; "empty string")]
#[test_case("not json at all"; "garbage")]
#[test_case("[1, 2, 3]"; "top-level array")]
#[test_case("42"; "top-level scalar")]
#[test_case("\"hello\""; "top-level string")]
#[test_case("null"; "top-level null")]
#[test_case(r#"{"unterminated": "#; "truncated object")]
fn test_classify_is_total(raw: &str) {
    // Anything that is not a JSON object yields an empty schema, never a panic
    assert!(classify_record(raw).is_empty());
}

#[test]
fn test_classify_empty_object() {
    assert!(classify_record("{}").is_empty());
}

#[test]
fn test_field_names_are_case_sensitive() {
    let schema = classify_record(r#"{"Id": 1, "id": "x"}"#);

    assert_eq!(schema.len(), 2);
    assert_eq!(schema.get("Id"), Some(ScalarType::Integer));
    assert_eq!(schema.get("id"), Some(ScalarType::Text));
}

#[test]
fn test_columns_enumerate_alphabetically() {
    // Rendering order is pinned: alphabetical by field name
    let schema = classify_record(r#"{"zeta": 1, "alpha": "x", "mid": 2.5}"#);
    let names: Vec<&str> = schema.columns().map(|(name, _)| name).collect();

    assert_eq!(names, vec!["alpha", "mid", "zeta"]);
}

#[test]
fn test_fold_over_records_widens() {
    let records = [
        r#"{"id": 1, "name": "x"}"#,
        r#"{"id": 2.5, "active": true}"#,
        r#"{"id": 3, "name": "y"}"#,
    ];

    let folded = records
        .iter()
        .fold(Schema::new(), |acc, raw| acc.merge(classify_record(raw)));

    assert_eq!(folded.get("id"), Some(ScalarType::Float));
    assert_eq!(folded.get("name"), Some(ScalarType::Text));
    assert_eq!(folded.get("active"), Some(ScalarType::Text));
}

#[test]
fn test_ddl_tokens() {
    assert_eq!(ScalarType::Integer.to_string(), "bigint");
    assert_eq!(ScalarType::Float.to_string(), "double");
    assert_eq!(ScalarType::Text.to_string(), "string");
}
