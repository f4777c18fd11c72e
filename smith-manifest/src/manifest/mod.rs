//! Manifest types and parsing for smith.toml files.

mod file;
mod parse;
mod persistence;
mod project;
mod types;
mod validate;

pub use file::SmithToml;
pub use persistence::Persistence;
pub use project::{GeneratorConfig, ProjectConfig};
use serde::Deserialize;
pub use types::{FieldDecl, TypeDecl};
pub use validate::{ParseContext, is_java_keyword};

/// Root manifest for smith.toml
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Project metadata
    pub project: ProjectConfig,

    /// Generator settings
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Declared source types, in declaration order
    #[serde(default)]
    pub types: Vec<TypeDecl>,
}

impl Manifest {
    /// Find a declared type by its qualified name.
    pub fn find_type(&self, qualified_name: &str) -> Option<&TypeDecl> {
        self.types
            .iter()
            .find(|ty| ty.qualified_name() == qualified_name)
    }
}
