//! Generate command: tables in, one class file per table out

use crate::config::{self, ClassgenConfig};
use anyhow::{Context, Result};
use classgen_core::{ClassGenerator, DirectoryResources, GenerationResult, TableDescriptor, filter_tables};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// File that receives the composite-key registration code
pub const COMPOSITE_KEYS_FILE: &str = "CompositeKeys.cs";

/// Extension of generated class files
pub const CLASS_FILE_EXTENSION: &str = "cs";

/// Output directory used when neither flag nor config names one
pub const DEFAULT_OUTPUT_DIR: &str = "generated";

/// Command-line values for `classgen generate`; each overrides the config file.
#[derive(Debug, Clone, Default)]
pub struct GenerateArgs {
    pub tables: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub resources: Option<PathBuf>,
    pub filter: Option<String>,
    pub namespace: Option<String>,
    pub dry_run: bool,
}

/// Apply command-line overrides on top of the loaded config.
pub fn merge(mut config: ClassgenConfig, args: &GenerateArgs) -> ClassgenConfig {
    if let Some(tables) = &args.tables {
        config.input.tables = Some(tables.clone());
    }
    if let Some(output) = &args.output {
        config.input.output = Some(output.clone());
    }
    if let Some(resources) = &args.resources {
        config.input.resources = Some(resources.clone());
    }
    if let Some(filter) = &args.filter {
        config.input.filter = Some(filter.clone());
    }
    if let Some(namespace) = &args.namespace {
        config.generation.namespace = namespace.clone();
    }
    config
}

/// Read table descriptors from a JSON file
pub fn load_tables(path: &Path) -> Result<Vec<TableDescriptor>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read tables: {:?}", path))?;

    serde_json::from_str(&content).with_context(|| format!("Failed to parse tables: {:?}", path))
}

/// Fail when two artifacts would be written to the same file.
///
/// Names are compared ignoring case, since class files often land on
/// case-insensitive file systems.
pub fn check_file_names(result: &GenerationResult) -> Result<()> {
    let mut seen: HashMap<String, &str> = HashMap::new();

    if !result.composite_key_code.is_empty() {
        seen.insert(COMPOSITE_KEYS_FILE.to_lowercase(), "composite keys");
    }

    for class in &result.classes {
        let file_name = format!("{}.{}", class.name, CLASS_FILE_EXTENSION);
        if let Some(previous) = seen.insert(file_name.to_lowercase(), &class.table_name) {
            anyhow::bail!(
                "Output file {} would be written twice (from '{}' and table '{}'); \
                 give one of the tables an alias or narrow the filter",
                file_name,
                previous,
                class.table_name
            );
        }
    }

    Ok(())
}

/// Write one file per class plus the composite-key file when there is one.
///
/// Nothing is written when two artifacts share a file name. Returns the paths
/// written, in generation order.
pub fn write_artifacts(result: &GenerationResult, output_dir: &Path) -> Result<Vec<PathBuf>> {
    check_file_names(result)?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {:?}", output_dir))?;

    let mut written = Vec::with_capacity(result.classes.len() + 1);

    for class in &result.classes {
        let path = output_dir.join(format!("{}.{}", class.name, CLASS_FILE_EXTENSION));
        fs::write(&path, &class.code).with_context(|| format!("Failed to write {:?}", path))?;
        written.push(path);
    }

    if !result.composite_key_code.is_empty() {
        let path = output_dir.join(COMPOSITE_KEYS_FILE);
        fs::write(&path, &result.composite_key_code)
            .with_context(|| format!("Failed to write {:?}", path))?;
        written.push(path);
    }

    Ok(written)
}

/// Render the result for `--dry-run`.
pub fn format_dry_run(result: &GenerationResult) -> String {
    let mut out = String::new();

    for class in &result.classes {
        out.push_str(&format!("// {}.{}\n{}\n\n", class.name, CLASS_FILE_EXTENSION, class.code));
    }

    if !result.composite_key_code.is_empty() {
        out.push_str(&format!("// {}\n{}", COMPOSITE_KEYS_FILE, result.composite_key_code));
    }

    out
}

/// Generate command implementation
pub fn run(args: GenerateArgs) -> Result<()> {
    let config = merge(config::load(args.config.as_deref())?, &args);
    config.validate()?;

    let tables_path = config.input.tables.as_deref().context(
        "No table file given; pass --tables or set `tables` in the [input] section",
    )?;

    let mut tables = load_tables(tables_path)?;
    if let Some(filter) = &config.input.filter {
        tables = filter_tables(tables, filter);
    }
    tracing::debug!("{} tables selected from {:?}", tables.len(), tables_path);

    let resources = config
        .input
        .resources
        .clone()
        .unwrap_or_else(|| tables_path.parent().map(Path::to_path_buf).unwrap_or_default());
    let mut generator = ClassGenerator::new(DirectoryResources::new(resources));

    let result = generator
        .generate(&tables, &config.generation)
        .context("Class generation failed")?;

    if args.dry_run {
        print!("{}", format_dry_run(&result));
        return Ok(());
    }

    let output_dir = config
        .input
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
    let written = write_artifacts(&result, &output_dir)?;

    println!(
        "✓ Generated {} classes into {}",
        result.classes.len(),
        output_dir.display()
    );
    if !result.composite_key_code.is_empty() {
        println!("✓ Composite keys: {}", COMPOSITE_KEYS_FILE);
    }
    tracing::debug!("Wrote {} files", written.len());

    Ok(())
}
