use std::path::{Path, PathBuf};

use super::Manifest;
use crate::Result;

/// Represents a smith.toml file with both raw content and parsed manifest.
pub struct SmithToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl SmithToml {
    /// Open and parse a smith.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::Error;

    #[test]
    fn test_open() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("smith.toml");
        std::fs::write(&path, "[project]\nname = \"hr\"\n").unwrap();

        let file = SmithToml::open(&path).unwrap();

        assert_eq!(file.manifest().project.name, "hr");
        assert!(file.content().contains("[project]"));
        assert_eq!(file.path(), path.as_path());
    }

    #[test]
    fn test_open_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = SmithToml::open(temp.path().join("smith.toml"))
            .err()
            .unwrap();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
