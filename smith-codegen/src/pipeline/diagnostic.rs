//! Diagnostic types for the generation pipeline.
//!
//! Diagnostics classify a condition and tag it with the entity it concerns;
//! how they reach a build log is up to the caller.

use serde::Serialize;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Aborts the artifacts of one entity, never the batch.
    Error,
    /// Generation continues, possibly degraded.
    Warning,
    /// Informational message about the generation process.
    Info,
}

impl Severity {
    /// Returns true if this is an error severity.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    /// Returns true if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// Classified build-time conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// The entity has no identifier; its repository is degraded.
    MissingIdentifier,
    /// A to-one relation could not be unwrapped and was dropped.
    UnresolvableRelationTarget,
    /// Extraction or building failed; none of the entity's artifacts were emitted.
    EntityBuildFailure,
}

impl DiagnosticKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticKind::MissingIdentifier => "missing-identifier",
            DiagnosticKind::UnresolvableRelationTarget => "unresolvable-relation-target",
            DiagnosticKind::EntityBuildFailure => "entity-build-failure",
        }
    }
}

/// A diagnostic message from a pipeline phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// The phase that produced this diagnostic.
    pub phase: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<DiagnosticKind>,
    /// Simple name of the entity concerned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
    /// The diagnostic message.
    pub message: String,
    /// Optional location, e.g. `com.acme.hr.Employee.manager`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Diagnostic {
    fn new(severity: Severity, phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            phase: phase.into(),
            kind: None,
            entity: None,
            message: message.into(),
            location: None,
        }
    }

    /// Create a new error diagnostic.
    pub fn error(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, phase, message)
    }

    /// Create a new warning diagnostic.
    pub fn warning(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, phase, message)
    }

    /// Create a new info diagnostic.
    pub fn info(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, phase, message)
    }

    /// Classify this diagnostic.
    pub fn kind(mut self, kind: DiagnosticKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Tag this diagnostic with an entity name.
    pub fn entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    /// Add a location to this diagnostic.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn is_kind(&self, kind: DiagnosticKind) -> bool {
        self.kind == Some(kind)
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.severity)?;
        if let Some(kind) = &self.kind {
            write!(f, "[{}]", kind.as_str())?;
        }
        write!(f, ": ")?;
        if let Some(entity) = &self.entity {
            write!(f, "{}: ", entity)?;
        }
        write!(f, "{}", self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " (at {})", loc)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_error() {
        let diag = Diagnostic::error("build", "could not build").entity("Invoice");
        assert!(diag.severity.is_error());
        assert_eq!(diag.phase, "build");
        assert_eq!(diag.entity.as_deref(), Some("Invoice"));
    }

    #[test]
    fn test_diagnostic_with_location() {
        let diag = Diagnostic::warning("build", "relation dropped").at("com.acme.Invoice.customer");
        assert_eq!(diag.location.as_deref(), Some("com.acme.Invoice.customer"));
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::warning("build", "no identifier")
            .kind(DiagnosticKind::MissingIdentifier)
            .entity("Note");
        assert_eq!(
            diag.to_string(),
            "warning[missing-identifier]: Note: no identifier"
        );
        assert!(diag.is_kind(DiagnosticKind::MissingIdentifier));
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::Warning.to_string(), "warning");
        assert_eq!(Severity::Info.to_string(), "info");
    }

    #[test]
    fn test_serialize_skips_empty_fields() {
        let json = serde_json::to_value(Diagnostic::info("extract", "3 entities")).unwrap();
        assert_eq!(json["severity"], "info");
        assert!(json.get("entity").is_none());
        assert!(json.get("kind").is_none());
    }
}
