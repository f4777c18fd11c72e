//! Check operation - a generation pass that writes nothing.

use std::path::Path;

use eyre::{Context, Result};
use springsmith_codegen::pipeline::Pipeline;
use springsmith_manifest::Manifest;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs the pipeline and returns every diagnostic it raised.
pub fn check(manifest: &Manifest, config_path: &Path) -> Result<CheckReport> {
    let pipeline = Pipeline::new();
    let ctx = pipeline
        .run(manifest.clone())
        .wrap_err("Validation failed")?;

    Ok(CheckReport {
        config_path: config_path.to_path_buf(),
        emitted: ctx.emitted().map(|e| e.name.clone()).collect(),
        failed: ctx.failed().map(|e| e.name.clone()).collect(),
        diagnostics: ctx.diagnostics,
    })
}

#[cfg(test)]
mod tests {
    use springsmith_codegen::{pipeline::DiagnosticKind, testing};

    use super::*;
    use crate::reports::{BufferOutput, Report};

    #[test]
    fn test_check_valid_with_warning() {
        let report = check(&testing::note_manifest(), Path::new("smith.toml")).unwrap();

        assert!(report.is_valid());
        assert_eq!(report.diagnostics.len(), 1);
        assert!(report.diagnostics[0].is_kind(DiagnosticKind::MissingIdentifier));

        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert!(out.text().contains("✓ smith.toml is valid (1 entities)"));
    }

    #[test]
    fn test_check_reports_failure() {
        let report = check(&testing::batch_with_broken_middle(), Path::new("smith.toml")).unwrap();

        assert!(!report.is_valid());
        assert_eq!(report.failed, vec!["Beta"]);
        assert_eq!(report.emitted, vec!["Alpha", "Gamma"]);
    }

    #[test]
    fn test_check_serializes_diagnostics() {
        let report = check(&testing::note_manifest(), Path::new("smith.toml")).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["emitted"][0], "Note");
        assert_eq!(json["diagnostics"][0]["severity"], "warning");
        assert_eq!(json["diagnostics"][0]["entity"], "Note");
    }
}
