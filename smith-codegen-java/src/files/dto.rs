use std::path::{Path, PathBuf};

use springsmith_codegen::{builder::CodeBuilder, spec::DtoSpec};
use springsmith_core::{FileRules, GeneratedFile};

use super::source_path;
use crate::JavaFile;

const JSON_INCLUDE: &str = "com.fasterxml.jackson.annotation.JsonInclude";

/// The DTO class: private attributes with JavaBean accessors.
pub struct DtoJava<'a> {
    spec: &'a DtoSpec,
    source_root: &'a str,
}

impl<'a> DtoJava<'a> {
    pub fn new(spec: &'a DtoSpec, source_root: &'a str) -> Self {
        Self { spec, source_root }
    }
}

impl GeneratedFile for DtoJava<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        source_path(base, self.source_root, &self.spec.name)
    }

    fn rules(&self) -> FileRules {
        FileRules::generated()
    }

    fn render(&self) -> String {
        let spec = self.spec;
        let mut file = JavaFile::new(&spec.name.namespace)
            .declare(&spec.name.type_name)
            .import(JSON_INCLUDE);
        let attribute_types: Vec<String> =
            spec.attributes.iter().map(|a| file.type_name(&a.ty)).collect();
        let accessor_types: Vec<String> =
            spec.accessors.iter().map(|a| file.type_name(&a.ty)).collect();

        let body = CodeBuilder::java()
            .line("@JsonInclude(JsonInclude.Include.NON_NULL)")
            .block(&format!("public class {} {{", spec.name.type_name), |b| {
                b.when(!spec.attributes.is_empty(), |b| {
                    b.blank().each(spec.attributes.iter().zip(&attribute_types), |b, (attr, ty)| {
                        b.line(&format!("private {} {};", ty, attr.name))
                    })
                })
                .each(spec.accessors.iter().zip(&accessor_types), |b, (accessor, ty)| {
                    let name = &accessor.attribute;
                    b.blank()
                        .block(&format!("public {} {}() {{", ty, accessor.getter), |b| {
                            b.line(&format!("return {};", name))
                        })
                        .blank()
                        .block(
                            &format!("public void {}({} {}) {{", accessor.setter, ty, name),
                            |b| b.line(&format!("this.{} = {};", name, name)),
                        )
                })
            })
            .build();

        file.body(body).render()
    }
}
