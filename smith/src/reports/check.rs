//! Check command report data structures.

use std::path::PathBuf;

use serde::Serialize;
use springsmith_codegen::pipeline::Diagnostic;

use super::output::{Output, Report};

/// Report data from a generation pass that writes nothing.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Entities that would be emitted.
    pub emitted: Vec<String>,
    /// Entities that failed.
    pub failed: Vec<String>,
    /// Every diagnostic, in the order it was raised.
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.iter().any(|d| d.severity.is_error())
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for diagnostic in &self.diagnostics {
            out.diagnostic(&diagnostic.to_string());
        }

        if !self.diagnostics.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!(
                "✓ {} is valid ({} entities)",
                self.config_path.display(),
                self.emitted.len()
            ));
        } else {
            out.preformatted(&format!(
                "✗ {}: {} of {} entities failed",
                self.config_path.display(),
                self.failed.len(),
                self.failed.len() + self.emitted.len()
            ));
        }
    }
}
