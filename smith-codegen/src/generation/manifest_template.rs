//! Starter smith.toml generator.

use std::path::{Path, PathBuf};

use springsmith_core::{FileRules, GeneratedFile};
use springsmith_manifest::Persistence;

/// The starter `smith.toml` written by `smith init`.
pub struct ManifestTemplate {
    pub name: String,
    pub description: String,
    pub persistence: Persistence,
    pub package: String,
}

impl ManifestTemplate {
    pub fn new(name: impl Into<String>, persistence: Persistence) -> Self {
        Self {
            name: name.into(),
            description: "Entities served over a generated REST API".to_string(),
            persistence,
            package: "com.example.model".to_string(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }
}

impl GeneratedFile for ManifestTemplate {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("smith.toml")
    }

    fn rules(&self) -> FileRules {
        FileRules::scaffold()
    }

    fn render(&self) -> String {
        format!(
            r#"[project]
name = "{name}"
version = "0.1.0"
description = "{description}"

[generator]
persistence = "{persistence}"
source_root = "src/main/java"

# Each [[types]] entry describes one source type. Types annotated with
# Entity get a DTO, mapper, repository, service and controller.
# Markers: Entity, Id, ManyToOne, OneToOne, OneToMany, ManyToMany

[[types]]
name = "Department"
package = "{package}"
annotations = ["Entity"]

[[types.fields]]
name = "id"
type = "Long"
annotations = ["Id"]

[[types.fields]]
name = "name"
type = "String"

[[types.fields]]
name = "employees"
type = "java.util.List<Employee>"
annotations = ["OneToMany"]

[[types]]
name = "Employee"
package = "{package}"
annotations = ["Entity"]

[[types.fields]]
name = "id"
type = "Long"
annotations = ["Id"]

[[types.fields]]
name = "name"
type = "String"

[[types.fields]]
name = "active"
type = "boolean"

[[types.fields]]
name = "department"
type = "Department"
annotations = ["ManyToOne"]
"#,
            name = self.name,
            description = self.description,
            persistence = self.persistence,
            package = self.package,
        )
    }
}
