//! Resource loading.
//!
//! The engine never touches the file system directly. Templates, the
//! type-conversion table and annotation files are all fetched by name through a
//! [`ResourceLoader`]:
//!
//! - [`EmbeddedResources`] serves the templates compiled into this crate
//! - [`DirectoryResources`] reads from a directory and falls back to the
//!   embedded set, so single templates can be overridden
//! - `HashMap<String, String>` serves in-memory resources

use crate::error::{GenerateError, GenerateResult};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

// ============================================================================
// Resource names
// ============================================================================

pub const CLASS_TEMPLATE: &str = "ClassDefault.cgt";
pub const CLASS_TEMPLATE_WITH_NAMESPACE: &str = "ClassDefaultWithNs.cgt";
pub const PROPERTY_TEMPLATE: &str = "PropertyDefault.cgt";
pub const PROPERTY_TEMPLATE_BACKING_FIELD: &str = "PropertyBackingField.cgt";
pub const PROPERTY_TEMPLATE_SET_PROPERTY: &str = "PropertyBackingFieldSetProperty.cgt";
pub const TYPE_CONVERSION: &str = "TypeConversion.json";

mod embedded {
    pub const CLASS_DEFAULT: &str = include_str!("../templates/ClassDefault.cgt");
    pub const CLASS_DEFAULT_WITH_NS: &str = include_str!("../templates/ClassDefaultWithNs.cgt");
    pub const PROPERTY_DEFAULT: &str = include_str!("../templates/PropertyDefault.cgt");
    pub const PROPERTY_BACKING_FIELD: &str = include_str!("../templates/PropertyBackingField.cgt");
    pub const PROPERTY_SET_PROPERTY: &str =
        include_str!("../templates/PropertyBackingFieldSetProperty.cgt");
    pub const TYPE_CONVERSION: &str = include_str!("../templates/TypeConversion.json");
}

/// Supplier of named text resources.
pub trait ResourceLoader {
    /// Load a text resource by name.
    ///
    /// Returns `Ok(None)` when the resource does not exist and an error when it
    /// exists but cannot be read.
    fn load_text(&self, name: &str) -> GenerateResult<Option<String>>;
}

/// The built-in templates and type-conversion table.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedResources;

impl EmbeddedResources {
    /// Names of every embedded resource.
    pub fn names() -> [&'static str; 6] {
        [
            CLASS_TEMPLATE,
            CLASS_TEMPLATE_WITH_NAMESPACE,
            PROPERTY_TEMPLATE,
            PROPERTY_TEMPLATE_BACKING_FIELD,
            PROPERTY_TEMPLATE_SET_PROPERTY,
            TYPE_CONVERSION,
        ]
    }

    fn get(name: &str) -> Option<&'static str> {
        match name {
            CLASS_TEMPLATE => Some(embedded::CLASS_DEFAULT),
            CLASS_TEMPLATE_WITH_NAMESPACE => Some(embedded::CLASS_DEFAULT_WITH_NS),
            PROPERTY_TEMPLATE => Some(embedded::PROPERTY_DEFAULT),
            PROPERTY_TEMPLATE_BACKING_FIELD => Some(embedded::PROPERTY_BACKING_FIELD),
            PROPERTY_TEMPLATE_SET_PROPERTY => Some(embedded::PROPERTY_SET_PROPERTY),
            TYPE_CONVERSION => Some(embedded::TYPE_CONVERSION),
            _ => None,
        }
    }
}

impl ResourceLoader for EmbeddedResources {
    fn load_text(&self, name: &str) -> GenerateResult<Option<String>> {
        Ok(Self::get(name).map(str::to_string))
    }
}

/// Resources read from a directory, with the embedded set as fallback.
///
/// Relative names are resolved against the root; absolute names are read as-is.
#[derive(Debug, Clone)]
pub struct DirectoryResources {
    root: PathBuf,
    fallback: bool,
}

impl DirectoryResources {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            fallback: true,
        }
    }

    /// Disable the embedded fallback; missing files stay missing.
    pub fn without_fallback(mut self) -> Self {
        self.fallback = false;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl ResourceLoader for DirectoryResources {
    fn load_text(&self, name: &str) -> GenerateResult<Option<String>> {
        let path = self.resolve(name);

        if path.is_file() {
            tracing::debug!("Loading resource {:?}", path);
            return std::fs::read_to_string(&path)
                .map(Some)
                .map_err(|source| GenerateError::Io {
                    resource: path.display().to_string(),
                    source,
                });
        }

        if self.fallback {
            return EmbeddedResources.load_text(name);
        }

        Ok(None)
    }
}

impl ResourceLoader for HashMap<String, String> {
    fn load_text(&self, name: &str) -> GenerateResult<Option<String>> {
        Ok(self.get(name).cloned())
    }
}

impl<L: ResourceLoader + ?Sized> ResourceLoader for &L {
    fn load_text(&self, name: &str) -> GenerateResult<Option<String>> {
        (**self).load_text(name)
    }
}

/// Split resource text into lines, dropping line terminators.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}
