//! Composite primary-key registration code.
//!
//! Tables whose key spans more than one column cannot be described with a
//! property attribute. For those, a model-builder override is emitted:
//!
//! ```text
//! /// <inheritdoc />
//! protected override void OnModelCreating(ModelBuilder modelBuilder)
//! {
//!     modelBuilder.Entity<OrderLine>().HasKey(k => new
//!     {
//!         k.OrderId,
//!         k.LineNo
//!     });
//! }
//! ```

use crate::model::TableDescriptor;
use crate::naming::{NameKind, normalize};
use crate::template::{INDENT, LINE_BREAK};

const HEADER: [&str; 3] = [
    "/// <inheritdoc />",
    "protected override void OnModelCreating(ModelBuilder modelBuilder)",
    "{",
];
const FOOTER: &str = "}";

/// Whether a table needs a composite-key registration.
pub fn has_composite_key(table: &TableDescriptor) -> bool {
    table.columns.iter().filter(|c| c.is_primary_key).count() > 1
}

/// Generate the registration code for every table with a composite key.
///
/// Returns an empty string when no table qualifies.
pub fn generate(tables: &[TableDescriptor]) -> String {
    let qualifying: Vec<&TableDescriptor> = tables.iter().filter(|t| has_composite_key(t)).collect();
    if qualifying.is_empty() {
        return String::new();
    }

    let mut lines: Vec<String> = HEADER.iter().map(|l| l.to_string()).collect();

    for (i, table) in qualifying.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.extend(table_block(table));
    }

    lines.push(FOOTER.to_string());

    let mut code = lines.join(LINE_BREAK);
    code.push_str(LINE_BREAK);
    code
}

fn table_block(table: &TableDescriptor) -> Vec<String> {
    let class_name = normalize(table.class_name(), NameKind::ClassName);
    let keys = table.primary_keys();

    let mut lines = vec![
        format!("{INDENT}modelBuilder.Entity<{class_name}>().HasKey(k => new"),
        format!("{INDENT}{{"),
    ];

    for (i, column) in keys.iter().enumerate() {
        let separator = if i + 1 < keys.len() { "," } else { "" };
        let property = normalize(column.property_name(), NameKind::Property);
        lines.push(format!("{INDENT}{INDENT}k.{property}{separator}"));
    }

    lines.push(format!("{INDENT}}});"));
    lines
}
