//! Documentation comments and attributes placed above classes and properties.

use crate::model::{
    AnnotationEntry, ColumnDescriptor, TableDescriptor, UNBOUNDED_LENGTH, eq_ignore_case, non_blank,
};
use crate::options::GenerationOptions;
use crate::template::LINE_BREAK;
use crate::type_map::{is_date_only, is_string_type};

pub const SUMMARY_START: &str = "/// <summary>";
pub const SUMMARY_END: &str = "/// </summary>";
pub const REMARKS_START: &str = "/// <remarks>";
pub const REMARKS_END: &str = "/// </remarks>";
pub const PARAGRAPH: &str = "/// <para />";
pub const TODO_TEXT: &str = "TODO";

pub const KEY_ATTRIBUTE: &str = "[Key]";
pub const DATE_ATTRIBUTE: &str = "[DataType(DataType.Date)]";
pub const UNBOUNDED_MAX_LENGTH: &str = "int.MaxValue";

/// Ordered lines of one annotation block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationBlock {
    lines: Vec<String>,
}

impl AnnotationBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Push a `///` documentation line.
    pub fn push_doc(&mut self, text: &str) {
        self.lines.push(format!("/// {text}"));
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Join the lines, empty text for an empty block.
    pub fn into_text(self) -> String {
        self.lines.join(LINE_BREAK)
    }

    fn push_summary(&mut self, summary: Option<&str>) {
        self.push(SUMMARY_START);
        self.push_doc(summary.unwrap_or(TODO_TEXT));
        self.push(SUMMARY_END);
    }
}

/// Build the block placed above a class.
pub fn compose_class(
    table: &TableDescriptor,
    annotation: Option<&AnnotationEntry>,
    options: &GenerationOptions,
) -> AnnotationBlock {
    let mut block = AnnotationBlock::new();
    let summary = annotation.and_then(AnnotationEntry::summary);
    let remarks = annotation.and_then(AnnotationEntry::remarks);

    if options.add_summary || options.add_table_name_to_summary {
        block.push_summary(summary);
    }

    if remarks.is_some() || options.add_table_name_to_summary {
        block.push(REMARKS_START);

        if let Some(remarks) = remarks {
            block.push_doc(remarks);
        }

        if options.add_table_name_to_summary {
            if remarks.is_some() {
                block.push(PARAGRAPH);
            }
            block.push_doc(&format!("Table <c>[{}].[{}]</c>", table.schema, table.name));
        }

        block.push(REMARKS_END);
    }

    if options.db_model {
        block.push(table_attribute(table));
    }

    block
}

/// Build the block placed above a property.
///
/// `column_annotations` are the entries of the column's table; the one whose
/// column matches (case-insensitive) is used.
pub fn compose_property(
    column: &ColumnDescriptor,
    resolved_type: &str,
    column_annotations: &[&AnnotationEntry],
    options: &GenerationOptions,
) -> AnnotationBlock {
    let mut block = AnnotationBlock::new();
    let annotation = find_column_annotation(column_annotations, &column.name);

    if options.add_summary {
        block.push_summary(annotation.and_then(AnnotationEntry::summary));

        if let Some(remarks) = annotation.and_then(AnnotationEntry::remarks) {
            block.push(REMARKS_START);
            block.push_doc(remarks);
            block.push(REMARKS_END);
        }
    }

    if options.db_model && column.is_primary_key {
        block.push(KEY_ATTRIBUTE);
    }

    if options.add_column_attribute || column.has_different_alias() {
        block.push(format!("[Column(\"{}\")]", column.name));
    }

    if is_date_only(&column.source_type) {
        block.push(DATE_ATTRIBUTE);
    }

    if is_string_type(resolved_type) {
        block.push(max_length_attribute(column.max_length));
    }

    block
}

/// The table-mapping attribute, with a schema clause when a schema is known.
pub fn table_attribute(table: &TableDescriptor) -> String {
    match non_blank(Some(&table.schema)) {
        Some(schema) => format!("[Table(\"{}\", Schema = \"{}\")]", table.name, schema),
        None => format!("[Table(\"{}\")]", table.name),
    }
}

/// The max-length attribute for a string column.
pub fn max_length_attribute(max_length: i32) -> String {
    if max_length == UNBOUNDED_LENGTH {
        format!("[MaxLength({UNBOUNDED_MAX_LENGTH})]")
    } else {
        format!("[MaxLength({max_length})]")
    }
}

/// The table-level entry for a table, matched case-insensitively.
pub fn find_table_annotation<'a>(
    entries: &'a [AnnotationEntry],
    table_name: &str,
) -> Option<&'a AnnotationEntry> {
    entries
        .iter()
        .find(|e| e.is_table_level() && eq_ignore_case(&e.table, table_name))
}

/// All column-level entries of a table, matched case-insensitively.
pub fn column_annotations<'a>(
    entries: &'a [AnnotationEntry],
    table_name: &str,
) -> Vec<&'a AnnotationEntry> {
    entries
        .iter()
        .filter(|e| !e.is_table_level() && eq_ignore_case(&e.table, table_name))
        .collect()
}

fn find_column_annotation<'a>(
    entries: &[&'a AnnotationEntry],
    column_name: &str,
) -> Option<&'a AnnotationEntry> {
    entries.iter().copied().find(|e| {
        non_blank(e.column.as_deref()).is_some_and(|c| eq_ignore_case(c, column_name))
    })
}
