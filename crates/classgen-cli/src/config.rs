//! classgen.toml parsing and validation

use anyhow::{Context, Result};
use classgen_core::GenerationOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "classgen.toml";

/// classgen.toml structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassgenConfig {
    pub generation: GenerationOptions,
    pub input: InputSection,
}

/// Where inputs come from and outputs go
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSection {
    /// JSON file with the table descriptors
    pub tables: Option<PathBuf>,

    /// Directory with template and resource overrides
    pub resources: Option<PathBuf>,

    pub output: Option<PathBuf>,

    pub filter: Option<String>,
}

impl ClassgenConfig {
    /// Load a config file, resolving relative paths against its directory
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {:?}", path))?;

        let config = Self::parse(&content)
            .with_context(|| format!("Invalid config: {:?}", path))?;

        let base = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let base = std::path::absolute(base)
            .with_context(|| format!("Failed to resolve config directory: {:?}", base))?;

        Ok(config.resolve_paths(&base))
    }

    /// Parse config from a string
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config")
    }

    /// Make relative input paths and the annotation path relative to `base`
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        let join = |p: Option<PathBuf>| p.map(|p| if p.is_relative() { base.join(p) } else { p });

        self.input.tables = join(self.input.tables.take());
        self.input.resources = join(self.input.resources.take());
        self.input.output = join(self.input.output.take());

        let annotations = self.generation.annotation_resource_path.trim();
        if !annotations.is_empty() && Path::new(annotations).is_relative() {
            let resolved = base.join(annotations).to_string_lossy().into_owned();
            self.generation.annotation_resource_path = resolved;
        }
        self
    }

    /// Validate the config
    pub fn validate(&self) -> Result<()> {
        self.generation.validate()?;

        for (name, path) in [
            ("tables", &self.input.tables),
            ("resources", &self.input.resources),
            ("output", &self.input.output),
        ] {
            if path.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
                anyhow::bail!("Input path '{}' cannot be empty", name);
            }
        }

        if let Some(resources) = &self.input.resources
            && resources.exists()
            && !resources.is_dir()
        {
            anyhow::bail!("Resource path {:?} is not a directory", resources);
        }

        Ok(())
    }
}

/// Load the config named on the command line, or `./classgen.toml` when present.
pub fn load(config_path: Option<&Path>) -> Result<ClassgenConfig> {
    match config_path {
        Some(path) => ClassgenConfig::from_file(path),
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
            ClassgenConfig::from_file(DEFAULT_CONFIG_FILE)
        }
        None => Ok(ClassgenConfig::default()),
    }
}

/// Check command implementation
pub fn check(config_path: Option<PathBuf>) -> Result<()> {
    let path = config_path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    println!("Checking config: {}", path.display());

    let config = ClassgenConfig::from_file(&path)?;
    config.validate()?;

    let generation = &config.generation;
    let namespace = if generation.has_namespace() {
        generation.namespace.as_str()
    } else {
        "(none)"
    };

    println!("✓ Namespace: {}", namespace);
    println!("✓ Access modifier: {}", generation.access_modifier);
    println!("✓ DB model: {}", generation.db_model);
    if let Some(tables) = &config.input.tables {
        println!("✓ Tables: {}", tables.display());
    }
    println!("\nConfig is valid!");

    Ok(())
}
