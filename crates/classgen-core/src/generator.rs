//! Class generation pipeline.
//!
//! [`ClassGenerator`] drives one batch of tables through the components:
//!
//! ```text
//! tables ─┬─ per table: annotation lookup ─ class block
//!         │    └─ per column (in order): type mapping, naming, property block
//!         │         └─ property template ─┐
//!         │                               └─ class template ─→ ClassArtifact
//!         └─ after all tables (db model): composite keys ─→ GenerationResult
//! ```
//!
//! Type mappings, annotations and templates are loaded lazily into a
//! [`GenerationSession`] owned by the generator, so separate generators never
//! share state.

use crate::annotation::{self, AnnotationBlock};
use crate::error::GenerateResult;
use crate::keys;
use crate::model::{AnnotationEntry, ClassArtifact, ColumnDescriptor, GenerationResult, TableDescriptor};
use crate::naming::{NameKind, backing_field_name, normalize};
use crate::options::GenerationOptions;
use crate::resource::{EmbeddedResources, ResourceLoader};
use crate::template::{Binding, LINE_BREAK, Template, TemplateStore, placeholder};
use crate::type_map::{TypeMapper, is_string_type};

/// Default value appended to string properties and fields.
pub const STRING_DEFAULT: &str = " = string.Empty;";

/// Header line added to class templates in settable-property mode.
pub const OBSERVABLE_USING: &str = "using CommunityToolkit.Mvvm.ComponentModel;";

/// Base-type clause added in settable-property mode.
pub const OBSERVABLE_BASE: &str = " : ObservableObject";

/// Progress notification sent after each generated class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress<'a> {
    /// 1-based position of the table in the batch
    pub index: usize,
    pub total: usize,
    pub table_name: &'a str,
}

impl std::fmt::Display for Progress<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} of {} > Generate class for table '{}'.",
            self.index, self.total, self.table_name
        )
    }
}

/// Data loaded on first use and kept for the lifetime of one generator.
#[derive(Debug, Clone, Default)]
pub struct GenerationSession {
    type_mapper: TypeMapper,
    annotations: Vec<AnnotationEntry>,
    annotation_source: Option<String>,
    templates: TemplateStore,
}

impl GenerationSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn type_mapper(&self) -> &TypeMapper {
        &self.type_mapper
    }

    pub fn annotations(&self) -> &[AnnotationEntry] {
        &self.annotations
    }

    pub fn templates(&self) -> &TemplateStore {
        &self.templates
    }

    /// Load the annotation resource at `path`.
    ///
    /// Reloads only when the path changes. A blank path, a missing resource or
    /// unparsable content all leave the session without annotations.
    pub fn load_annotations(&mut self, loader: &dyn ResourceLoader, path: &str) {
        let path = path.trim();
        if self.annotation_source.as_deref() == Some(path) {
            return;
        }

        self.annotation_source = Some(path.to_string());
        self.annotations = if path.is_empty() {
            Vec::new()
        } else {
            read_annotations(loader, path)
        };
    }
}

fn read_annotations(loader: &dyn ResourceLoader, path: &str) -> Vec<AnnotationEntry> {
    match loader.load_text(path) {
        Ok(Some(text)) => match serde_json::from_str::<Vec<AnnotationEntry>>(&text) {
            Ok(entries) => {
                tracing::debug!("Loaded {} annotation entries from {}", entries.len(), path);
                entries
            }
            Err(e) => {
                tracing::debug!("Ignoring malformed annotation resource {}: {}", path, e);
                Vec::new()
            }
        },
        Ok(None) => {
            tracing::debug!("Annotation resource {} not found", path);
            Vec::new()
        }
        Err(e) => {
            tracing::debug!("Failed to read annotation resource {}: {}", path, e);
            Vec::new()
        }
    }
}

/// Generates model classes for a batch of tables.
///
/// # Example
///
/// ```
/// use classgen_core::{ClassGenerator, ColumnDescriptor, GenerationOptions, TableDescriptor};
///
/// let table = TableDescriptor::new("Customer", "dbo")
///     .with_column(ColumnDescriptor::new("Id", "int", 1).primary_key());
/// let options = GenerationOptions { namespace: "Demo".into(), ..Default::default() };
///
/// let mut generator = ClassGenerator::embedded();
/// let result = generator.generate(&[table], &options)?;
///
/// assert_eq!(result.classes[0].name, "Customer");
/// assert!(result.classes[0].code.contains("public int Id { get; set; }"));
/// # Ok::<(), classgen_core::GenerateError>(())
/// ```
#[derive(Debug)]
pub struct ClassGenerator<L> {
    loader: L,
    session: GenerationSession,
}

impl ClassGenerator<EmbeddedResources> {
    /// A generator using only the built-in templates and type table.
    pub fn embedded() -> Self {
        Self::new(EmbeddedResources)
    }
}

impl<L: ResourceLoader> ClassGenerator<L> {
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            session: GenerationSession::new(),
        }
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    pub fn session(&self) -> &GenerationSession {
        &self.session
    }

    /// Generate classes for `tables`.
    pub fn generate(
        &mut self,
        tables: &[TableDescriptor],
        options: &GenerationOptions,
    ) -> GenerateResult<GenerationResult> {
        self.generate_with_progress(tables, options, |_| {})
    }

    /// Generate classes for `tables`, reporting each finished class to `on_progress`.
    pub fn generate_with_progress<F>(
        &mut self,
        tables: &[TableDescriptor],
        options: &GenerationOptions,
        mut on_progress: F,
    ) -> GenerateResult<GenerationResult>
    where
        F: FnMut(&Progress<'_>),
    {
        options.validate()?;

        if tables.is_empty() {
            return Ok(GenerationResult::default());
        }

        self.session.type_mapper.load(&self.loader);
        self.session
            .load_annotations(&self.loader, &options.annotation_resource_path);

        let mut options = options.clone();
        if !self.session.annotations.is_empty() {
            options.add_summary = true;
        }

        let class_template = self
            .session
            .templates
            .class_template(&self.loader, options.has_namespace())?
            .clone();
        let property_template = self
            .session
            .templates
            .property_template(&self.loader, &options)?
            .clone();

        let renderer = ClassRenderer {
            types: &self.session.type_mapper,
            annotations: &self.session.annotations,
            options: &options,
            class_template: &class_template,
            property_template: &property_template,
        };

        let total = tables.len();
        let mut result = GenerationResult::default();

        for (i, table) in tables.iter().enumerate() {
            let artifact = renderer.render_class(table);

            let progress = Progress {
                index: i + 1,
                total,
                table_name: &table.name,
            };
            tracing::info!("{}", progress);
            on_progress(&progress);

            result.classes.push(artifact);
        }

        if options.db_model {
            result.composite_key_code = keys::generate(tables);
        }

        Ok(result)
    }
}

/// Renders classes from master templates that are never modified.
struct ClassRenderer<'a> {
    types: &'a TypeMapper,
    annotations: &'a [AnnotationEntry],
    options: &'a GenerationOptions,
    class_template: &'a Template,
    property_template: &'a Template,
}

impl ClassRenderer<'_> {
    fn render_class(&self, table: &TableDescriptor) -> ClassArtifact {
        let mut template = self.class_template.clone();

        let table_annotation = annotation::find_table_annotation(self.annotations, &table.name);
        let column_annotations = annotation::column_annotations(self.annotations, &table.name);

        let columns = table.ordered_columns();
        let properties: Vec<String> = columns
            .iter()
            .enumerate()
            .map(|(i, column)| self.render_property(column, &column_annotations, i + 1 != columns.len()))
            .collect();

        let class_name = normalize(table.class_name(), NameKind::ClassName);

        let namespace = if self.options.has_namespace() {
            normalize(&self.options.namespace, NameKind::Namespace)
        } else {
            String::new()
        };

        let inherits = if self.options.add_settable_property {
            template.insert_line(0, OBSERVABLE_USING);
            OBSERVABLE_BASE
        } else {
            ""
        };

        let sealed = if self.options.sealed_class { " sealed" } else { "" };
        let addition = annotation::compose_class(table, table_annotation, self.options);

        let bindings = [
            Binding::indented("properties", properties.join(LINE_BREAK)),
            Binding::new("namespace", namespace),
            Binding::new("modifier", self.options.access_modifier.keyword()),
            Binding::new("sealed", sealed),
            Binding::new("name", class_name.as_str()),
            Binding::new("inherits", inherits),
            Binding::new("addition", addition.into_text()),
        ];

        ClassArtifact {
            code: template.render(&bindings, false),
            name: class_name,
            table_name: table.name.clone(),
        }
    }

    fn render_property(
        &self,
        column: &ColumnDescriptor,
        column_annotations: &[&AnnotationEntry],
        add_empty_line: bool,
    ) -> String {
        let mut template = self.property_template.clone();

        let data_type = self.types.resolve(&column.source_type);
        if is_string_type(data_type) {
            apply_string_default(&mut template);
        }

        let property_name = normalize(column.property_name(), NameKind::Property);
        let addition: AnnotationBlock =
            annotation::compose_property(column, data_type, column_annotations, self.options);

        let bindings = [
            Binding::new("type", data_type),
            Binding::new("nullable", if column.is_nullable { "?" } else { "" }),
            Binding::new("name2", backing_field_name(&property_name)),
            Binding::new("name", property_name),
            Binding::new("addition", addition.into_text()),
        ];

        template.render(&bindings, add_empty_line)
    }
}

/// Give string members an empty default value.
///
/// The backing field receives the default when the template has one, otherwise
/// the property line does.
fn apply_string_default(template: &mut Template) {
    let field = placeholder("name2");
    let property = placeholder("name");

    if let Some(index) = template.line_index(&field) {
        if let Some(line) = template.line_mut(index) {
            *line = line.replace(';', STRING_DEFAULT);
        }
    } else if let Some(index) = template.line_index(&property)
        && let Some(line) = template.line_mut(index)
    {
        line.push_str(STRING_DEFAULT);
    }
}
