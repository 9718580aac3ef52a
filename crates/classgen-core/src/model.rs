//! Table, column and result types

use serde::{Deserialize, Serialize};

/// `max_length` value reported for unbounded columns such as `NVARCHAR(MAX)`.
pub const UNBOUNDED_LENGTH: i32 = -1;

/// A relational table supplied by the metadata collaborator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableDescriptor {
    #[serde(alias = "Id")]
    pub id: i32,

    #[serde(alias = "Name")]
    pub name: String,

    /// Overrides `name` as the source of the class name when non-blank.
    #[serde(alias = "Alias")]
    pub alias: Option<String>,

    #[serde(alias = "Schema")]
    pub schema: String,

    #[serde(alias = "Columns")]
    pub columns: Vec<ColumnDescriptor>,
}

impl TableDescriptor {
    /// Create a table without columns.
    pub fn new(name: impl Into<String>, schema: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: schema.into(),
            ..Self::default()
        }
    }

    /// Add a column, builder style.
    pub fn with_column(mut self, column: ColumnDescriptor) -> Self {
        self.columns.push(column);
        self
    }

    /// The raw class name: the alias when set, otherwise the table name.
    pub fn class_name(&self) -> &str {
        non_blank(self.alias.as_deref()).unwrap_or(&self.name)
    }

    /// Columns sorted by declaration order.
    pub fn ordered_columns(&self) -> Vec<&ColumnDescriptor> {
        let mut columns: Vec<&ColumnDescriptor> = self.columns.iter().collect();
        columns.sort_by_key(|c| c.order);
        columns
    }

    /// Primary-key columns sorted by declaration order.
    pub fn primary_keys(&self) -> Vec<&ColumnDescriptor> {
        self.ordered_columns()
            .into_iter()
            .filter(|c| c.is_primary_key)
            .collect()
    }
}

/// A single column of a [`TableDescriptor`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnDescriptor {
    #[serde(alias = "TableId")]
    pub table_id: i32,

    #[serde(alias = "Name")]
    pub name: String,

    #[serde(alias = "Alias")]
    pub alias: Option<String>,

    #[serde(alias = "Order")]
    pub order: i32,

    /// SQL type name, e.g. `nvarchar`.
    #[serde(alias = "DataType", alias = "SourceType")]
    pub source_type: String,

    /// Maximum length, [`UNBOUNDED_LENGTH`] for unbounded types.
    #[serde(alias = "MaxLength")]
    pub max_length: i32,

    #[serde(alias = "IsNullable")]
    pub is_nullable: bool,

    #[serde(alias = "IsPrimaryKey")]
    pub is_primary_key: bool,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, source_type: impl Into<String>, order: i32) -> Self {
        Self {
            name: name.into(),
            source_type: source_type.into(),
            order,
            ..Self::default()
        }
    }

    pub fn nullable(mut self) -> Self {
        self.is_nullable = true;
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.is_primary_key = true;
        self
    }

    pub fn with_max_length(mut self, max_length: i32) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// The raw property name: the alias when set, otherwise the column name.
    pub fn property_name(&self) -> &str {
        non_blank(self.alias.as_deref()).unwrap_or(&self.name)
    }

    /// Whether an alias is set and differs from the column name.
    pub fn has_different_alias(&self) -> bool {
        non_blank(self.alias.as_deref()).is_some_and(|alias| alias != self.name)
    }
}

/// Externally supplied documentation for a table or one of its columns.
///
/// A blank `column` marks a table-level entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotationEntry {
    #[serde(alias = "Table")]
    pub table: String,

    #[serde(alias = "Column")]
    pub column: Option<String>,

    #[serde(alias = "Summary")]
    pub summary: String,

    #[serde(alias = "Remarks")]
    pub remarks: String,
}

impl AnnotationEntry {
    /// True when neither summary nor remarks carry text.
    pub fn is_empty(&self) -> bool {
        self.summary.trim().is_empty() && self.remarks.trim().is_empty()
    }

    pub fn is_table_level(&self) -> bool {
        non_blank(self.column.as_deref()).is_none()
    }

    /// Non-blank summary text.
    pub fn summary(&self) -> Option<&str> {
        non_blank(Some(&self.summary))
    }

    /// Non-blank remarks text.
    pub fn remarks(&self) -> Option<&str> {
        non_blank(Some(&self.remarks))
    }
}

/// One row of the type-conversion resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeMapping {
    #[serde(alias = "SqlType", alias = "SourceType")]
    pub source_type: String,

    #[serde(alias = "CsharpType", alias = "TargetType")]
    pub target_type: String,
}

/// The generated code for one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassArtifact {
    pub name: String,
    pub table_name: String,
    pub code: String,
}

/// Everything produced by one generation call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub classes: Vec<ClassArtifact>,

    /// Composite-key registration code, empty when not requested or not needed.
    pub composite_key_code: String,
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Case-insensitive comparison that also folds non-ASCII letters.
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b) || a.to_lowercase() == b.to_lowercase()
}
