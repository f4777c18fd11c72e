use std::path::{Path, PathBuf};

use springsmith_codegen::{builder::CodeBuilder, spec::RepositorySpec};
use springsmith_core::{FileRules, GeneratedFile};

use super::source_path;
use crate::JavaFile;

const JPA_REPOSITORY: &str = "org.springframework.data.jpa.repository.JpaRepository";
const REPOSITORY: &str = "org.springframework.stereotype.Repository";

/// The Spring Data repository interface.
///
/// Without a persistence contract this renders as a plain empty interface.
pub struct RepositoryJava<'a> {
    spec: &'a RepositorySpec,
    source_root: &'a str,
}

impl<'a> RepositoryJava<'a> {
    pub fn new(spec: &'a RepositorySpec, source_root: &'a str) -> Self {
        Self { spec, source_root }
    }
}

impl GeneratedFile for RepositoryJava<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        source_path(base, self.source_root, &self.spec.name)
    }

    fn rules(&self) -> FileRules {
        FileRules::generated()
    }

    fn render(&self) -> String {
        let spec = self.spec;
        let file = JavaFile::new(&spec.name.namespace).declare(&spec.name.type_name);

        let Some(contract) = &spec.contract else {
            let body = CodeBuilder::java()
                .line(&format!(
                    "// {} declares no identifier field, so no persistence contract is generated.",
                    spec.entity.simple_name()
                ))
                .block(&format!("public interface {} {{", spec.name.type_name), |b| b)
                .build();
            return file.body(body).render();
        };

        let mut file = file.import(JPA_REPOSITORY).import(REPOSITORY);
        let entity = file.type_name(&contract.entity);
        let identifier = file.type_name(&contract.identifier);

        let body = CodeBuilder::java()
            .line("@Repository")
            .block(
                &format!(
                    "public interface {} extends JpaRepository<{}, {}> {{",
                    spec.name.type_name, entity, identifier
                ),
                |b| b,
            )
            .build();

        file.body(body).render()
    }
}
