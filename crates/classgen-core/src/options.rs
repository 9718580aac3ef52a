//! Generation options

use crate::error::{GenerateError, GenerateResult};
use serde::{Deserialize, Serialize};

/// Access modifier written in front of every generated class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccessModifier {
    #[default]
    Public,
    Internal,
    Protected,
    ProtectedInternal,
}

impl AccessModifier {
    /// The keyword text emitted into the class header.
    pub fn keyword(self) -> &'static str {
        match self {
            AccessModifier::Public => "public",
            AccessModifier::Internal => "internal",
            AccessModifier::Protected => "protected",
            AccessModifier::ProtectedInternal => "protected internal",
        }
    }
}

impl std::fmt::Display for AccessModifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Options controlling the shape of generated classes.
///
/// Every field has a default, so a partial TOML or JSON document is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    /// Namespace for the classes; empty selects the template without namespace
    pub namespace: String,

    pub sealed_class: bool,

    pub access_modifier: AccessModifier,

    /// Emit table, key and composite-key code for an ORM model
    pub db_model: bool,

    /// Emit a column attribute on every property, not only on aliased ones
    pub add_column_attribute: bool,

    pub with_backing_field: bool,

    /// Use a change-notifying setter; implies a backing field
    pub add_settable_property: bool,

    pub add_summary: bool,

    /// Mention `[schema].[table]` in the class remarks
    pub add_table_name_to_summary: bool,

    /// Location of the annotation resource; empty disables annotations
    pub annotation_resource_path: String,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            namespace: String::new(),
            sealed_class: true,
            access_modifier: AccessModifier::Public,
            db_model: false,
            add_column_attribute: false,
            with_backing_field: false,
            add_settable_property: false,
            add_summary: false,
            add_table_name_to_summary: false,
            annotation_resource_path: String::new(),
        }
    }
}

impl GenerationOptions {
    /// Create options with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a TOML document
    pub fn from_toml(content: &str) -> GenerateResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Parse options from JSON bytes; empty input yields the defaults
    pub fn from_json(bytes: &[u8]) -> GenerateResult<Self> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Whether the namespace template should be used
    pub fn has_namespace(&self) -> bool {
        !self.namespace.trim().is_empty()
    }

    /// Check that the options can drive a generation run
    pub fn validate(&self) -> GenerateResult<()> {
        if self.has_namespace()
            && self
                .namespace
                .split('.')
                .all(|segment| segment.trim().is_empty())
        {
            return Err(GenerateError::Usage(format!(
                "namespace '{}' contains no identifier segments",
                self.namespace
            )));
        }

        if self.annotation_resource_path.contains('\0') {
            return Err(GenerateError::Usage(
                "annotation resource path contains a NUL byte".to_string(),
            ));
        }

        Ok(())
    }
}
