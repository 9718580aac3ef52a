#![allow(non_snake_case)]

use super::*;
use crate::resource::EmbeddedResources;

fn template(lines: &[&str]) -> Template {
    Template::new("test", lines.iter().map(|l| l.to_string()).collect())
}

// ============================================================================
// Binding
// ============================================================================

#[test]
fn Binding___placeholder___upper_cases_key() {
    assert_eq!(Binding::new("name", "x").placeholder(), "$NAME$");
    assert_eq!(Binding::new("Name2", "x").placeholder(), "$NAME2$");
}

// ============================================================================
// render
// ============================================================================

#[test]
fn render___line_without_delimiter___copied_verbatim() {
    let tpl = template(&["{", "    // body", "}"]);

    let text = tpl.render(&[], false);

    assert_eq!(text, "{\n    // body\n}");
}

#[test]
fn render___bound_placeholders___substituted() {
    let tpl = template(&["public $TYPE$$NULLABLE$ $NAME$ { get; set; }"]);

    let text = tpl.render(
        &[
            Binding::new("type", "int"),
            Binding::new("nullable", "?"),
            Binding::new("name", "Id"),
        ],
        false,
    );

    assert_eq!(text, "public int? Id { get; set; }");
}

#[test]
fn render___name_binding___does_not_touch_name2() {
    let tpl = template(&["$NAME$ $NAME2$"]);

    let text = tpl.render(&[Binding::new("name", "Id"), Binding::new("name2", "_id")], false);

    assert_eq!(text, "Id _id");
}

#[test]
fn render___placeholder_bound_to_empty___line_dropped() {
    let tpl = template(&["$ADDITION$", "public int Id { get; set; }"]);

    let text = tpl.render(&[Binding::new("addition", "")], false);

    assert_eq!(text, "public int Id { get; set; }");
}

#[test]
fn render___whitespace_only_result___line_dropped() {
    let tpl = template(&["first", "   $ADDITION$  ", "last"]);

    let text = tpl.render(&[Binding::new("addition", "")], false);

    assert_eq!(text, "first\nlast");
}

#[test]
fn render___blank_template_line___kept() {
    let tpl = template(&["a", "", "b"]);

    assert_eq!(tpl.render(&[], false), "a\n\nb");
}

#[test]
fn render___indented_binding___splits_and_prefixes_each_segment() {
    let tpl = template(&["{", "$PROPERTIES$", "}"]);

    let text = tpl.render(&[Binding::indented("properties", "int A;\nint B;")], false);

    assert_eq!(text, "{\n    int A;\n    int B;\n}");
}

#[test]
fn render___trailing_blank_line___appends_line_break() {
    let tpl = template(&["a", "b"]);

    assert_eq!(tpl.render(&[], true), "a\nb\n");
}

#[test]
fn render___unbound_placeholder___left_in_place() {
    let tpl = template(&["$UNKNOWN$"]);

    assert_eq!(tpl.render(&[], false), "$UNKNOWN$");
}

#[test]
fn render___does_not_mutate_template() {
    let tpl = template(&["$NAME$"]);
    let before = tpl.clone();

    let first = tpl.render(&[Binding::new("name", "A")], false);
    let second = tpl.render(&[Binding::new("name", "B")], false);

    assert_eq!(first, "A");
    assert_eq!(second, "B");
    assert_eq!(tpl, before);
}

// ============================================================================
// Template editing
// ============================================================================

#[test]
fn Template___insert_line___prepends_at_zero() {
    let mut tpl = template(&["b"]);

    tpl.insert_line(0, "a");
    tpl.insert_line(99, "c");

    assert_eq!(tpl.lines(), ["a", "b", "c"]);
}

#[test]
fn Template___line_index___finds_first_match() {
    let tpl = template(&["x", "$NAME$ 1", "$NAME$ 2"]);

    assert_eq!(tpl.line_index("$NAME$"), Some(1));
    assert_eq!(tpl.line_index("$NAME2$"), None);
}

// ============================================================================
// PropertyVariant / TemplateStore
// ============================================================================

#[test]
fn PropertyVariant___for_options___selects_by_flags() {
    let mut options = GenerationOptions::default();
    assert_eq!(PropertyVariant::for_options(&options), PropertyVariant::Default);

    options.with_backing_field = true;
    assert_eq!(PropertyVariant::for_options(&options), PropertyVariant::BackingField);

    options.add_settable_property = true;
    assert_eq!(PropertyVariant::for_options(&options), PropertyVariant::SetProperty);

    options.with_backing_field = false;
    assert_eq!(PropertyVariant::for_options(&options), PropertyVariant::SetProperty);
}

#[test]
fn TemplateStore___class_template___picks_namespace_variant() {
    let mut store = TemplateStore::new();

    let with_ns = store.class_template(&EmbeddedResources, true).unwrap().clone();
    let without_ns = store.class_template(&EmbeddedResources, false).unwrap().clone();

    assert!(with_ns.contains("$NAMESPACE$"));
    assert!(!without_ns.contains("$NAMESPACE$"));
    assert_eq!(store.len(), 2);
}

#[test]
fn TemplateStore___missing_resource___returns_template_missing() {
    let mut store = TemplateStore::new();
    let empty = HashMap::<String, String>::new();

    let err = store.class_template(&empty, false).unwrap_err();

    assert!(matches!(err, GenerateError::TemplateMissing(name) if name == CLASS_TEMPLATE));
}

#[test]
fn TemplateStore___load___caches_template() {
    let mut resources = HashMap::new();
    resources.insert(PROPERTY_TEMPLATE.to_string(), "$NAME$".to_string());
    let mut store = TemplateStore::new();

    store.load(&resources, PROPERTY_TEMPLATE).unwrap();
    resources.clear();
    let cached = store.load(&resources, PROPERTY_TEMPLATE).unwrap();

    assert_eq!(cached.lines(), ["$NAME$"]);
}
