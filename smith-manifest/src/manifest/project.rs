use serde::Deserialize;

use super::Persistence;

/// Project metadata configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
    /// Project name
    pub name: String,

    /// Version
    #[serde(default = "default_version")]
    pub version: String,

    /// Project description
    pub description: Option<String>,
}

fn default_version() -> String {
    "0.1.0".to_string()
}

/// Generator settings from the `[generator]` table
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// Persistence API namespace used in generated imports
    #[serde(default)]
    pub persistence: Persistence,

    /// Directory, relative to the output root, that holds Java sources
    #[serde(default = "default_source_root")]
    pub source_root: String,
}

fn default_source_root() -> String {
    "src/main/java".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            persistence: Persistence::default(),
            source_root: default_source_root(),
        }
    }
}
