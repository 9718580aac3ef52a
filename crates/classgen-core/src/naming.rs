//! Identifier normalization for generated code.
//!
//! Raw table, column and namespace names come straight from the database and
//! may contain spaces, underscores, umlauts or a leading digit. This module turns
//! them into identifiers the target language accepts.
//!
//! | Kind | Input | Output |
//! |------|-------|--------|
//! | [`NameKind::Property`] | `first_name` | `Firstname` |
//! | [`NameKind::ClassName`] | `customer_data` | `CustomerData` |
//! | [`NameKind::Namespace`] | `demo.models` | `Demo.Models` |
//! | any | `1st` | `Column1st` / `Class1st` / `Ns1st` |

/// The kind of identifier being produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameKind {
    Property,
    ClassName,
    Namespace,
}

impl NameKind {
    /// Word prepended when a normalized name would start with a digit.
    ///
    /// Also used on its own when nothing is left of the raw name.
    pub fn digit_prefix(self) -> &'static str {
        match self {
            NameKind::Property => "Column",
            NameKind::ClassName => "Class",
            NameKind::Namespace => "Ns",
        }
    }
}

/// Prefix of generated backing fields.
pub const BACKING_FIELD_PREFIX: &str = "_";

const DIACRITICS: [(&str, &str); 8] = [
    (" ", ""),
    ("ä", "ae"),
    ("ö", "oe"),
    ("ü", "ue"),
    ("ß", "ss"),
    ("Ä", "Ae"),
    ("Ö", "Oe"),
    ("Ü", "Ue"),
];

/// Normalize a raw name into an identifier of the given kind.
///
/// # Examples
///
/// ```
/// use classgen_core::naming::{normalize, NameKind};
///
/// assert_eq!(normalize("Customer_Data", NameKind::ClassName), "CustomerData");
/// assert_eq!(normalize("First Name", NameKind::Property), "FirstName");
/// assert_eq!(normalize("größe", NameKind::Property), "Groesse");
/// assert_eq!(normalize("2fa", NameKind::Property), "Column2fa");
/// ```
pub fn normalize(raw: &str, kind: NameKind) -> String {
    let name = match kind {
        NameKind::Property => capitalize(&replace_invalid_chars(raw, true)),
        NameKind::ClassName => normalize_class_name(raw),
        NameKind::Namespace => normalize_namespace(raw),
    };

    if name.is_empty() {
        kind.digit_prefix().to_string()
    } else if starts_with_digit(&name) {
        format!("{}{}", kind.digit_prefix(), name)
    } else {
        name
    }
}

/// Derive the backing-field name of an already normalized property name.
///
/// ```
/// use classgen_core::naming::backing_field_name;
///
/// assert_eq!(backing_field_name("FirstName"), "_firstName");
/// ```
pub fn backing_field_name(property_name: &str) -> String {
    format!("{BACKING_FIELD_PREFIX}{}", decapitalize(property_name))
}

fn normalize_class_name(raw: &str) -> String {
    if raw.contains('_') {
        let joined: String = raw
            .split('_')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(capitalize)
            .collect();
        replace_invalid_chars(&joined, false)
    } else {
        replace_invalid_chars(&capitalize(raw), true)
    }
}

fn normalize_namespace(raw: &str) -> String {
    let joined = raw
        .split('.')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(".");
    replace_invalid_chars(&joined, false)
}

/// Apply the diacritic table, optionally stripping underscores as well.
fn replace_invalid_chars(value: &str, include_underscore: bool) -> String {
    let mut result = DIACRITICS
        .iter()
        .fold(value.to_string(), |acc, (from, to)| acc.replace(from, to));

    if include_underscore {
        result = result.replace('_', "");
    }

    result
}

/// Capitalize the first letter of a string.
///
/// A letter whose upper-case form is more than one character (`ß`) is kept.
pub fn capitalize(s: &str) -> String {
    map_first(s, |c| single(c.to_uppercase()))
}

/// Lower-case the first letter of a string.
pub fn decapitalize(s: &str) -> String {
    map_first(s, |c| single(c.to_lowercase()))
}

fn map_first(s: &str, f: impl Fn(char) -> Option<char>) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => std::iter::once(f(first).unwrap_or(first))
            .chain(chars)
            .collect(),
    }
}

fn single(mut mapped: impl Iterator<Item = char>) -> Option<char> {
    match (mapped.next(), mapped.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn starts_with_digit(value: &str) -> bool {
    value.chars().next().is_some_and(|c| c.is_ascii_digit())
}
