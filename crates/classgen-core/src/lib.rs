//! classgen-core - Model class generation from relational table metadata
//!
//! This crate turns table and column descriptions into source text for
//! data-model classes:
//! - [`ClassGenerator`] drives a batch of tables through the pipeline
//! - [`GenerationOptions`] controls the shape of the generated code
//! - [`ResourceLoader`] supplies templates, type mappings and annotations
//! - [`GenerateError`] for error handling
//!
//! The supporting stages ([`naming`], [`type_map`], [`annotation`],
//! [`template`], [`keys`]) are public so callers can use them on their own.

pub mod annotation;
mod error;
pub mod filter;
mod generator;
pub mod keys;
mod model;
pub mod naming;
mod options;
pub mod resource;
pub mod template;
pub mod type_map;

pub use error::{GenerateError, GenerateResult};
pub use filter::{filter_tables, matches_filter};
pub use generator::{ClassGenerator, GenerationSession, Progress};
pub use model::{
    AnnotationEntry, ClassArtifact, ColumnDescriptor, GenerationResult, TableDescriptor,
    TypeMapping, UNBOUNDED_LENGTH,
};
pub use naming::{NameKind, normalize};
pub use options::{AccessModifier, GenerationOptions};
pub use resource::{DirectoryResources, EmbeddedResources, ResourceLoader};
pub use template::{Binding, Template};
pub use type_map::TypeMapper;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        AccessModifier, ClassArtifact, ClassGenerator, ColumnDescriptor, DirectoryResources,
        EmbeddedResources, GenerateError, GenerateResult, GenerationOptions, GenerationResult,
        Progress, ResourceLoader, TableDescriptor,
    };
}
