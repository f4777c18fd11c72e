//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// This struct encapsulates the source content, filename, and current path
/// through the manifest hierarchy, making it easier to pass validation
/// context through nested declarations.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "smith.toml");
/// ctx.validate_name("Employee", "type")?;
///
/// // For nested validation
/// let nested = ctx.push("Employee");
/// nested.validate_name("manager", "field")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["Employee"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        self.source.src()
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        self.source.filename()
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "field in 'Employee'" or just "type" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of a `name = "..."` value in the source.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_value_span(self.source.src(), "name", name, 0)
    }

    /// Find the span of the first `key = "value"` in the source.
    pub fn find_value_span(&self, key: &str, value: &str) -> Option<SourceSpan> {
        find_value_span(self.source.src(), key, value, 0)
    }

    /// Find the span of the nth (zero-based) `key = "value"` in the source.
    pub fn find_nth_value_span(&self, key: &str, value: &str, nth: usize) -> Option<SourceSpan> {
        find_value_span(self.source.src(), key, value, nth)
    }

    /// Validate that a name is a usable Java identifier.
    ///
    /// Checks for reserved keywords and valid identifier format.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if is_java_keyword(name) {
            return Err(self.source.reserved_keyword_error(
                name,
                self.context_for(kind),
                self.find_span(name),
            ));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.find_span(name),
            ));
        }

        Ok(())
    }

    /// Validate a dotted package name. The empty (default) package is allowed.
    pub fn validate_package(&self, package: &str) -> Result<()> {
        if package.is_empty() {
            return Ok(());
        }

        for segment in package.split('.') {
            let reason = if is_java_keyword(segment) {
                Some("package segments cannot be Java keywords")
            } else {
                validate_identifier(segment)
            };
            if let Some(reason) = reason {
                return Err(self.source.invalid_package_error(
                    package,
                    reason,
                    self.find_value_span("package", package),
                ));
            }
        }

        Ok(())
    }
}

/// Java reserved words, including literals and contextual words that cannot
/// name a type or field.
pub(crate) const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try",
    "void", "volatile", "while",
    // Literals
    "true", "false", "null",
    // Restricted identifiers
    "_", "var", "yield", "record",
];

/// Check if a name is a Java reserved keyword
pub fn is_java_keyword(name: &str) -> bool {
    JAVA_KEYWORDS.contains(&name)
}

/// Find the span of the nth `key = "value"` (or single-quoted) occurrence.
pub(crate) fn find_value_span(src: &str, key: &str, value: &str, nth: usize) -> Option<SourceSpan> {
    let prefix = format!("{} = ", key);
    let mut matches = Vec::new();
    for quote in ['"', '\''] {
        let pattern = format!("{}{}{}{}", prefix, quote, value, quote);
        matches.extend(
            src.match_indices(&pattern)
                .map(|(pos, _)| pos + prefix.len() + 1),
        );
    }
    matches.sort_unstable();
    matches
        .get(nth)
        .map(|&start| SourceSpan::from((start, value.len())))
}

/// Validate that a name is a valid Java identifier.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        Some(_) => return Some("name must start with a letter, '_' or '$'"),
        None => return Some("name cannot be empty"),
    }

    if chars.any(|c| !(c.is_alphanumeric() || c == '_' || c == '$')) {
        return Some("name must contain only letters, digits, '_' and '$'");
    }

    None
}
