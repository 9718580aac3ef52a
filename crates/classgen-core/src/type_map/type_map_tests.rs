#![allow(non_snake_case)]

use super::*;
use crate::resource::EmbeddedResources;
use std::cell::Cell;
use std::collections::HashMap;

fn mapping(source: &str, target: &str) -> TypeMapping {
    TypeMapping {
        source_type: source.into(),
        target_type: target.into(),
    }
}

#[test]
fn TypeMapper___resolve___matches_case_insensitively() {
    let mapper = TypeMapper::with_mappings(vec![mapping("NVarChar", "string")]);

    assert_eq!(mapper.resolve("nvarchar"), "string");
    assert_eq!(mapper.resolve("NVARCHAR"), "string");
}

#[test]
fn TypeMapper___resolve___unknown_type_returns_fallback() {
    let mapper = TypeMapper::with_mappings(vec![mapping("int", "int")]);

    assert_eq!(mapper.resolve("geography"), FALLBACK_TYPE);
}

#[test]
fn TypeMapper___resolve___first_match_wins() {
    let mapper = TypeMapper::with_mappings(vec![mapping("date", "DateOnly"), mapping("date", "DateTime")]);

    assert_eq!(mapper.resolve("date"), "DateOnly");
}

#[test]
fn TypeMapper___empty___resolves_everything_to_fallback() {
    let mapper = TypeMapper::new();

    assert_eq!(mapper.resolve("int"), FALLBACK_TYPE);
    assert!(!mapper.is_loaded());
}

#[test]
fn TypeMapper___load___reads_embedded_table() {
    let mut mapper = TypeMapper::new();

    mapper.load(&EmbeddedResources);

    assert!(mapper.is_loaded());
    assert_eq!(mapper.resolve("int"), "int");
    assert_eq!(mapper.resolve("uniqueidentifier"), "Guid");
}

#[test]
fn TypeMapper___load___missing_resource_leaves_mapper_empty() {
    let mut mapper = TypeMapper::new();

    mapper.load(&HashMap::<String, String>::new());

    assert!(mapper.is_empty());
    assert_eq!(mapper.resolve("int"), FALLBACK_TYPE);
}

#[test]
fn TypeMapper___load___malformed_resource_leaves_mapper_empty() {
    let mut resources = HashMap::new();
    resources.insert(TYPE_CONVERSION.to_string(), "{ not json".to_string());
    let mut mapper = TypeMapper::new();

    mapper.load(&resources);

    assert!(mapper.is_empty());
}

struct CountingLoader {
    calls: Cell<usize>,
}

impl ResourceLoader for CountingLoader {
    fn load_text(&self, name: &str) -> crate::GenerateResult<Option<String>> {
        self.calls.set(self.calls.get() + 1);
        EmbeddedResources.load_text(name)
    }
}

#[test]
fn TypeMapper___load_twice___reads_resource_once() {
    let loader = CountingLoader {
        calls: Cell::new(0),
    };
    let mut mapper = TypeMapper::new();

    mapper.load(&loader);
    mapper.load(&loader);

    assert_eq!(loader.calls.get(), 1);
}

#[test]
fn is_string_type___ignores_case() {
    assert!(is_string_type("string"));
    assert!(is_string_type("String"));
    assert!(!is_string_type("int"));
}

#[test]
fn is_date_only___only_matches_date() {
    assert!(is_date_only("date"));
    assert!(is_date_only("DATE"));
    assert!(!is_date_only("datetime"));
}
