//! Shared string utilities for naming and namespace placement.

use std::path::PathBuf;

/// Uppercase the first character (e.g., "employee" -> "Employee").
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Lowercase the first character (e.g., "OrderLine" -> "orderLine").
pub fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Pluralize a word with the naive suffix rule used for routes and handler names.
///
/// A trailing `y` becomes `ies` (for words longer than one character), a
/// trailing `s` gets `es`, and everything else gets `s`. Irregular plurals
/// are deliberately not special-cased: `"child"` becomes `"childs"`.
pub fn pluralize(word: &str) -> String {
    if word.len() > 1 && word.ends_with('y') {
        return format!("{}ies", &word[..word.len() - 1]);
    }
    if word.ends_with('s') {
        return format!("{word}es");
    }
    format!("{word}s")
}

/// Replace the last dot-separated segment of a namespace.
///
/// A namespace without a separator collapses to the replacement alone.
pub fn replace_last_segment(namespace: &str, replacement: &str) -> String {
    match namespace.rfind('.') {
        Some(pos) => format!("{}.{}", &namespace[..pos], replacement),
        None => replacement.to_string(),
    }
}

/// The part of a qualified name after the last dot.
pub fn last_segment(name: &str) -> &str {
    name.rsplit_once('.').map_or(name, |(_, last)| last)
}

/// The part of a qualified name before the last dot, if any.
pub fn strip_last_segment(name: &str) -> Option<&str> {
    name.rsplit_once('.').map(|(head, _)| head)
}

/// Whether a type or namespace name contains a package separator.
pub fn is_qualified(name: &str) -> bool {
    name.contains('.')
}

/// Join a namespace and a simple name; the default (empty) namespace yields the name alone.
pub fn qualify(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{namespace}.{name}")
    }
}

/// Convert a dotted namespace into a relative directory path.
pub fn namespace_to_path(namespace: &str) -> PathBuf {
    namespace
        .split('.')
        .filter(|segment| !segment.is_empty())
        .collect()
}
