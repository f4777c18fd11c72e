//! Declared source types.

use serde::Deserialize;
use springsmith_core::{last_segment, qualify};

/// A `[[types]]` entry: one source type as annotation scanning would see it.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeDecl {
    /// Simple type name
    pub name: String,

    /// Java package; empty for the default package
    #[serde(default)]
    pub package: String,

    /// Type-level annotations, bare (`Entity`) or qualified
    #[serde(default)]
    pub annotations: Vec<String>,

    /// Fields in declaration order
    #[serde(default)]
    pub fields: Vec<FieldDecl>,
}

impl TypeDecl {
    /// Package-qualified name.
    pub fn qualified_name(&self) -> String {
        qualify(&self.package, &self.name)
    }

    /// Whether any annotation resolves to the given simple name.
    pub fn has_annotation(&self, simple: &str) -> bool {
        has_annotation(&self.annotations, simple)
    }
}

/// A `[[types.fields]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldDecl {
    /// Field name
    pub name: String,

    /// Declared type in Java syntax
    #[serde(rename = "type")]
    pub ty: String,

    /// Field-level annotations, bare or qualified
    #[serde(default)]
    pub annotations: Vec<String>,

    /// Modifiers such as `static` or `final`
    #[serde(default)]
    pub modifiers: Vec<String>,
}

impl FieldDecl {
    /// Whether the field is declared `static`.
    pub fn is_static(&self) -> bool {
        self.modifiers.iter().any(|m| m == "static")
    }

    /// Whether any annotation resolves to the given simple name.
    pub fn has_annotation(&self, simple: &str) -> bool {
        has_annotation(&self.annotations, simple)
    }
}

fn has_annotation(annotations: &[String], simple: &str) -> bool {
    annotations
        .iter()
        .any(|a| last_segment(a.trim_start_matches('@')) == simple)
}
