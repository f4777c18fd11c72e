//! Bake command report data structures.

use std::path::PathBuf;

use springsmith_codegen::sink::PreviewFile;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct BakeReport {
    /// Project name from manifest.
    pub project_name: String,

    /// Project version from manifest.
    pub project_version: String,

    /// Project description from manifest.
    pub project_description: Option<String>,

    /// Entities whose artifacts were emitted.
    pub entities: Vec<String>,

    /// Rendered warning diagnostics.
    pub warnings: Vec<String>,

    /// Rendered error diagnostics, one or more per failed entity.
    pub failures: Vec<String>,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Source root below the output directory.
    pub source_root: String,
    /// Files created or changed.
    pub written: Vec<String>,
    /// Files already up to date.
    pub unchanged: Vec<String>,
    /// Path to debug snapshots, if visualization was enabled.
    pub debug_dir: Option<PathBuf>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

impl BakeReport {
    /// Whether any entity failed to generate.
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    fn render_diagnostics(&self, out: &mut dyn Output) {
        for line in self.warnings.iter().chain(&self.failures) {
            out.diagnostic(line);
        }
        if !self.warnings.is_empty() || !self.failures.is_empty() {
            out.newline();
        }
    }

    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        if let Some(debug_dir) = &written.debug_dir {
            out.key_value(
                "Pipeline snapshots written to",
                &debug_dir.display().to_string(),
            );
            out.newline();
        }

        self.render_diagnostics(out);

        out.preformatted(&format!("{} v{}", self.project_name, self.project_version));
        if let Some(desc) = &self.project_description {
            out.preformatted(desc);
        }
        out.newline();

        out.section(&format!("Entities ({})", self.entities.len()));
        for entity in &self.entities {
            out.list_item(entity);
        }
        out.newline();

        out.key_value(
            "Generated",
            &written
                .output_dir
                .join(&written.source_root)
                .display()
                .to_string(),
        );
        for path in &written.written {
            out.added_item(path);
        }
        if !written.unchanged.is_empty() {
            out.key_value("Unchanged", &format!("{} files", written.unchanged.len()));
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        self.render_diagnostics(out);

        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }
}

impl Report for BakeReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}
