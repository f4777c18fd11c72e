//! The emission boundary: turning artifact specs into files.

use std::path::Path;

use eyre::Result;

/// Persists emitted artifact specs as source text.
///
/// Implement this trait to render the specs of a generation pass for a new
/// target stack.
pub trait ArtifactSink {
    /// Target identifier (e.g., "java-spring")
    fn target(&self) -> &'static str;

    /// File extension for generated source files (e.g., "java")
    fn file_extension(&self) -> &'static str;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Vec<PreviewFile>;

    /// Generate all files into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerateResult {
    /// Files that were created or changed, relative to the output directory
    pub written: Vec<String>,
    /// Files whose content was already up to date
    pub unchanged: Vec<String>,
}

impl GenerateResult {
    /// Total number of files the sink produced.
    pub fn total(&self) -> usize {
        self.written.len() + self.unchanged.len()
    }
}

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}
