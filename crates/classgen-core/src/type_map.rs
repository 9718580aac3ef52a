//! SQL to target-language type mapping.
//!
//! The mapping table comes from the `TypeConversion.json` resource, an ordered
//! list of `{ "source_type": .., "target_type": .. }` rows. Lookups are
//! case-insensitive; the first matching row wins.
//!
//! | SQL | Target |
//! |-----|--------|
//! | `int` | `int` |
//! | `nvarchar` | `string` |
//! | `uniqueidentifier` | `Guid` |
//! | anything unknown | [`FALLBACK_TYPE`] |

use crate::model::TypeMapping;
use crate::resource::{ResourceLoader, TYPE_CONVERSION};

/// Target type used when no mapping exists for a source type.
pub const FALLBACK_TYPE: &str = "object";

/// Target type that receives max-length attributes and an empty default.
pub const STRING_TYPE: &str = "string";

/// Resolves SQL column types to target-language types.
#[derive(Debug, Clone, Default)]
pub struct TypeMapper {
    mappings: Vec<TypeMapping>,
}

impl TypeMapper {
    /// Create an empty mapper; every lookup yields [`FALLBACK_TYPE`] until loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mapper from an explicit table.
    pub fn with_mappings(mappings: Vec<TypeMapping>) -> Self {
        Self { mappings }
    }

    pub fn is_loaded(&self) -> bool {
        !self.mappings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Load the conversion table from the loader.
    ///
    /// Does nothing when a table is already present. An absent, unreadable or
    /// malformed resource leaves the mapper empty.
    pub fn load(&mut self, loader: &dyn ResourceLoader) {
        if self.is_loaded() {
            return;
        }

        let text = match loader.load_text(TYPE_CONVERSION) {
            Ok(Some(text)) => text,
            Ok(None) => {
                tracing::debug!("Type conversion resource not found, using fallback type");
                return;
            }
            Err(e) => {
                tracing::debug!("Failed to read type conversion resource: {}", e);
                return;
            }
        };

        match serde_json::from_str::<Vec<TypeMapping>>(&text) {
            Ok(mappings) => {
                tracing::debug!("Loaded {} type mappings", mappings.len());
                self.mappings = mappings;
            }
            Err(e) => tracing::debug!("Ignoring malformed type conversion resource: {}", e),
        }
    }

    /// Resolve a SQL type name to the target type name.
    pub fn resolve(&self, source_type: &str) -> &str {
        let source_type = source_type.trim();
        self.mappings
            .iter()
            .find(|m| m.source_type.eq_ignore_ascii_case(source_type))
            .map(|m| m.target_type.as_str())
            .unwrap_or(FALLBACK_TYPE)
    }
}

/// Whether a resolved type is the string-like type.
pub fn is_string_type(target_type: &str) -> bool {
    target_type.eq_ignore_ascii_case(STRING_TYPE)
}

/// Whether a SQL type carries a date without a time part.
pub fn is_date_only(source_type: &str) -> bool {
    source_type.trim().eq_ignore_ascii_case("date")
}

#[cfg(test)]
#[path = "type_map/type_map_tests.rs"]
mod type_map_tests;
