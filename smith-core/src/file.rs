use std::path::{Path, PathBuf};

use eyre::Result;

/// Header comment placed at the top of every generated source file.
pub const GENERATED_HEADER: &str = "// Generated by smith. Do not edit.";

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file body, without the header
    fn render(&self) -> String;

    /// Render the full file content, header included
    fn content(&self) -> String {
        with_header(self.rules().header, &self.render())
    }

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<WriteResult> {
        write_with_rules(&self.path(base), &self.content(), &self.rules())
    }
}

fn with_header(header: Option<&str>, body: &str) -> String {
    match header {
        Some(header) if body.is_empty() => format!("{}\n", header),
        Some(header) => format!("{}\n{}", header, body),
        None => body.to_string(),
    }
}

fn write_with_rules(path: &Path, content: &str, rules: &FileRules) -> Result<WriteResult> {
    if path.exists() {
        if rules.overwrite == Overwrite::IfMissing {
            return Ok(WriteResult::Skipped);
        }
        if std::fs::read_to_string(path).is_ok_and(|existing| existing == content) {
            return Ok(WriteResult::Unchanged);
        }
    }
    write_file(path, content)?;
    Ok(WriteResult::Written)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had identical content
    Unchanged,
    /// File was skipped (already exists)
    Skipped,
}

/// A file to be written verbatim
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a new file with the given path and content (default rules: always overwrite)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    /// Replace the write rules.
    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file according to its rules
    pub fn write(&self) -> Result<WriteResult> {
        let content = with_header(self.rules.header, &self.content);
        write_with_rules(&self.path, &content, &self.rules)
    }
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone)]
pub struct FileRules {
    pub overwrite: Overwrite,
    pub header: Option<&'static str>,
}

impl FileRules {
    /// Rules for generated sources: always overwrite, with the generated header.
    pub fn generated() -> Self {
        Self {
            overwrite: Overwrite::Always,
            header: Some(GENERATED_HEADER),
        }
    }

    /// Rules for user-owned scaffolding: create once, never overwrite.
    pub fn scaffold() -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
            header: None,
        }
    }
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (generated code)
    Always,
    /// Only create if file doesn't exist (user-owned files)
    IfMissing,
}

impl Default for FileRules {
    fn default() -> Self {
        Self {
            overwrite: Overwrite::Always,
            header: None,
        }
    }
}
