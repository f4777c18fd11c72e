//! Generation context passed through pipeline phases.

use serde::Serialize;
use springsmith_ir::EntityDescriptor;
use springsmith_manifest::{Manifest, Persistence};

use super::diagnostic::{Diagnostic, Severity};
use crate::{extract::TypeIndex, spec::EmittedArtifact};

/// Where an entity is in the generation state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityStatus {
    Discovered,
    Extracted,
    Emitted,
    Failed,
}

/// One discovered entity and what became of it.
#[derive(Debug, Clone, Serialize)]
pub struct EntityRecord {
    pub name: String,
    pub qualified_name: String,
    pub status: EntityStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptor: Option<EntityDescriptor>,
    /// All five artifacts once emitted, otherwise empty.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub artifacts: Vec<EmittedArtifact>,
}

impl EntityRecord {
    pub fn discovered(name: impl Into<String>, qualified_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qualified_name: qualified_name.into(),
            status: EntityStatus::Discovered,
            descriptor: None,
            artifacts: Vec::new(),
        }
    }
}

/// Context passed through all pipeline phases.
///
/// Carries the state of one generation pass. Nothing in it outlives the pass.
#[derive(Debug)]
pub struct GenerationContext {
    /// The manifest being generated from.
    pub manifest: Manifest,
    /// Relation-target lookup (populated by ExtractPhase).
    pub index: Option<TypeIndex>,
    /// Discovered entities in declaration order.
    pub entities: Vec<EntityRecord>,
    /// Diagnostics collected during generation.
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerationContext {
    /// Create a new generation context from a manifest.
    pub fn new(manifest: Manifest) -> Self {
        Self {
            manifest,
            index: None,
            entities: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Persistence namespace configured for this pass.
    pub fn persistence(&self) -> Persistence {
        self.manifest.generator.persistence
    }

    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// Check if any warning diagnostics have been recorded.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    /// Count the number of error diagnostics.
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// Count the number of warning diagnostics.
    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Get all error diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    /// Get all warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// Diagnostics tagged with an entity, by simple or qualified name.
    pub fn for_entity<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Diagnostic> {
        let target = self
            .entities
            .iter()
            .find(|e| e.name == name || e.qualified_name == name)
            .map_or(name, |e| e.name.as_str());
        self.diagnostics
            .iter()
            .filter(move |d| d.entity.as_deref() == Some(target))
    }

    /// Entities whose artifacts were all emitted.
    pub fn emitted(&self) -> impl Iterator<Item = &EntityRecord> {
        self.entities
            .iter()
            .filter(|e| e.status == EntityStatus::Emitted)
    }

    /// Entities that failed extraction or building.
    pub fn failed(&self) -> impl Iterator<Item = &EntityRecord> {
        self.entities
            .iter()
            .filter(|e| e.status == EntityStatus::Failed)
    }

    /// Every emitted artifact, entity by entity, in emission order.
    pub fn artifacts(&self) -> impl Iterator<Item = &EmittedArtifact> {
        self.emitted().flat_map(|e| e.artifacts.iter())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn make_test_manifest() -> Manifest {
        Manifest::from_str("[project]\nname = \"test\"\n").expect("Failed to parse test manifest")
    }

    #[test]
    fn test_context_creation() {
        let ctx = GenerationContext::new(make_test_manifest());

        assert!(ctx.index.is_none());
        assert!(ctx.entities.is_empty());
        assert!(ctx.diagnostics.is_empty());
        assert_eq!(ctx.persistence(), Persistence::Jakarta);
    }

    #[test]
    fn test_context_diagnostics() {
        let mut ctx = GenerationContext::new(make_test_manifest());

        ctx.add_diagnostic(Diagnostic::error("test", "test error"));
        ctx.add_diagnostic(Diagnostic::warning("test", "test warning"));
        ctx.add_diagnostic(Diagnostic::info("test", "just info"));

        assert!(ctx.has_errors());
        assert!(ctx.has_warnings());
        assert_eq!(ctx.error_count(), 1);
        assert_eq!(ctx.warning_count(), 1);
    }

    #[test]
    fn test_for_entity() {
        let mut ctx = GenerationContext::new(make_test_manifest());
        ctx.entities
            .push(EntityRecord::discovered("Invoice", "com.acme.Invoice"));
        ctx.add_diagnostic(Diagnostic::warning("build", "a").entity("Invoice"));
        ctx.add_diagnostic(Diagnostic::warning("build", "b").entity("Customer"));
        ctx.add_diagnostic(Diagnostic::warning("build", "c"));

        assert_eq!(ctx.for_entity("Invoice").count(), 1);
        assert_eq!(ctx.for_entity("com.acme.Invoice").count(), 1);
        assert_eq!(ctx.for_entity("Customer").count(), 1);
        assert_eq!(ctx.for_entity("Nobody").count(), 0);
    }

    #[test]
    fn test_status_filters() {
        let mut ctx = GenerationContext::new(make_test_manifest());
        let mut emitted = EntityRecord::discovered("A", "x.A");
        emitted.status = EntityStatus::Emitted;
        let mut failed = EntityRecord::discovered("B", "x.B");
        failed.status = EntityStatus::Failed;
        ctx.entities.extend([emitted, failed]);

        assert_eq!(ctx.emitted().count(), 1);
        assert_eq!(ctx.failed().next().map(|e| e.name.as_str()), Some("B"));
        assert_eq!(ctx.artifacts().count(), 0);
    }
}
