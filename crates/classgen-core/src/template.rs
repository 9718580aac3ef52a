//! Line templates and placeholder rendering.
//!
//! A template is an ordered list of text lines. Placeholders are upper-case
//! keys wrapped in `$`, e.g. `$NAME$`. Rendering rules:
//!
//! - lines without a `$` are copied verbatim
//! - every bound placeholder in a line is replaced; an indented binding is split
//!   on line breaks and each piece is prefixed with [`INDENT`]
//! - a line that ends up empty or whitespace-only is dropped, which is how
//!   optional sections bound to `""` disappear
//! - no line break follows the last line unless a trailing blank line is asked for
//!
//! Rendering never mutates the template. Callers that need to adjust a
//! template for one table or column work on a clone.

use crate::error::{GenerateError, GenerateResult};
use crate::options::GenerationOptions;
use crate::resource::{
    CLASS_TEMPLATE, CLASS_TEMPLATE_WITH_NAMESPACE, PROPERTY_TEMPLATE,
    PROPERTY_TEMPLATE_BACKING_FIELD, PROPERTY_TEMPLATE_SET_PROPERTY, ResourceLoader, split_lines,
};
use std::collections::HashMap;

/// Character wrapping placeholder keys.
pub const DELIMITER: char = '$';

/// One level of indentation inside a class body.
pub const INDENT: &str = "    ";

/// Separator between lines of rendered text and of multi-line binding values.
pub const LINE_BREAK: &str = "\n";

/// A value bound to a placeholder key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub key: String,
    pub value: String,
    pub indent: bool,
}

impl Binding {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            indent: false,
        }
    }

    /// A binding whose value is split into lines and indented.
    pub fn indented(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            indent: true,
            ..Self::new(key, value)
        }
    }

    /// The token this binding replaces, e.g. `$NAME$` for key `name`.
    pub fn placeholder(&self) -> String {
        placeholder(&self.key)
    }

    fn replacement(&self) -> String {
        if !self.indent {
            return self.value.clone();
        }

        self.value
            .split(LINE_BREAK)
            .map(|segment| format!("{INDENT}{segment}"))
            .collect::<Vec<_>>()
            .join(LINE_BREAK)
    }
}

/// Build the placeholder token for a key.
pub fn placeholder(key: &str) -> String {
    format!("{DELIMITER}{}{DELIMITER}", key.to_uppercase())
}

/// A named, ordered list of template lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    lines: Vec<String>,
}

impl Template {
    pub fn new(name: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            name: name.into(),
            lines,
        }
    }

    /// Build a template from resource text.
    pub fn from_text(name: impl Into<String>, text: &str) -> Self {
        Self::new(name, split_lines(text))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Index of the first line containing `needle`.
    pub fn line_index(&self, needle: &str) -> Option<usize> {
        self.lines.iter().position(|line| line.contains(needle))
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.line_index(needle).is_some()
    }

    /// Insert a line before `index`; an index past the end appends.
    pub fn insert_line(&mut self, index: usize, line: impl Into<String>) {
        let index = index.min(self.lines.len());
        self.lines.insert(index, line.into());
    }

    /// Mutable access to one line.
    pub fn line_mut(&mut self, index: usize) -> Option<&mut String> {
        self.lines.get_mut(index)
    }

    /// Render the template with the given bindings.
    pub fn render(&self, bindings: &[Binding], trailing_blank_line: bool) -> String {
        render(&self.lines, bindings, trailing_blank_line)
    }
}

/// Render template lines with the given bindings.
pub fn render(lines: &[String], bindings: &[Binding], trailing_blank_line: bool) -> String {
    let mut output = String::new();
    let last = lines.len().saturating_sub(1);

    for (i, line) in lines.iter().enumerate() {
        let rendered = if line.contains(DELIMITER) {
            let substituted = bindings.iter().fold(line.clone(), |acc, binding| {
                acc.replace(&binding.placeholder(), &binding.replacement())
            });

            if substituted.trim().is_empty() {
                continue;
            }
            substituted
        } else {
            line.clone()
        };

        output.push_str(&rendered);
        if i != last {
            output.push_str(LINE_BREAK);
        }
    }

    if trailing_blank_line {
        output.push_str(LINE_BREAK);
    }

    output
}

/// Property template flavour, selected from the options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyVariant {
    /// Auto-property
    Default,
    /// Private field plus property
    BackingField,
    /// Private field plus property whose setter raises change notification
    SetProperty,
}

impl PropertyVariant {
    pub fn for_options(options: &GenerationOptions) -> Self {
        if options.add_settable_property {
            PropertyVariant::SetProperty
        } else if options.with_backing_field {
            PropertyVariant::BackingField
        } else {
            PropertyVariant::Default
        }
    }

    pub fn resource_name(self) -> &'static str {
        match self {
            PropertyVariant::Default => PROPERTY_TEMPLATE,
            PropertyVariant::BackingField => PROPERTY_TEMPLATE_BACKING_FIELD,
            PropertyVariant::SetProperty => PROPERTY_TEMPLATE_SET_PROPERTY,
        }
    }
}

/// Resource name of the class template.
pub fn class_template_name(with_namespace: bool) -> &'static str {
    if with_namespace {
        CLASS_TEMPLATE_WITH_NAMESPACE
    } else {
        CLASS_TEMPLATE
    }
}

/// Loads templates by name and keeps the master copies.
///
/// Each template is read from the loader once; later requests are served from
/// the cache.
#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    templates: HashMap<String, Template>,
}

impl TemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a template, failing when the resource does not exist.
    pub fn load(&mut self, loader: &dyn ResourceLoader, name: &str) -> GenerateResult<&Template> {
        if !self.templates.contains_key(name) {
            let text = loader
                .load_text(name)?
                .ok_or_else(|| GenerateError::TemplateMissing(name.to_string()))?;
            tracing::debug!("Loaded template {}", name);
            self.templates
                .insert(name.to_string(), Template::from_text(name, &text));
        }

        self.templates
            .get(name)
            .ok_or_else(|| GenerateError::TemplateMissing(name.to_string()))
    }

    /// Load the class template for the namespace mode.
    pub fn class_template(
        &mut self,
        loader: &dyn ResourceLoader,
        with_namespace: bool,
    ) -> GenerateResult<&Template> {
        self.load(loader, class_template_name(with_namespace))
    }

    /// Load the property template for the options.
    pub fn property_template(
        &mut self,
        loader: &dyn ResourceLoader,
        options: &GenerationOptions,
    ) -> GenerateResult<&Template> {
        self.load(loader, PropertyVariant::for_options(options).resource_name())
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
#[path = "template/template_tests.rs"]
mod template_tests;
