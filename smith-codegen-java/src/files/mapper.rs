use std::path::{Path, PathBuf};

use springsmith_codegen::{
    builder::CodeBuilder,
    naming::variable_name,
    relation::{HelperSpec, MappingRule},
    spec::{MapperOperation, MapperSpec},
};
use springsmith_core::{FileRules, GeneratedFile, capitalize};

use super::source_path;
use crate::JavaFile;

const MAPSTRUCT: &str = "org.mapstruct";

/// The MapStruct mapper interface.
///
/// Entity-to-DTO and DTO-to-entity conversions are declared abstract and
/// implemented by MapStruct; relation helpers are rendered as `default`
/// methods that build an identifier-only stub.
pub struct MapperJava<'a> {
    spec: &'a MapperSpec,
    source_root: &'a str,
}

impl<'a> MapperJava<'a> {
    pub fn new(spec: &'a MapperSpec, source_root: &'a str) -> Self {
        Self { spec, source_root }
    }

    fn render_operation(b: CodeBuilder, op: &MapperOperation, file: &mut JavaFile) -> CodeBuilder {
        let params: Vec<String> = op
            .params
            .iter()
            .map(|p| {
                let target = if p.mapping_target { "@MappingTarget " } else { "" };
                format!("{}{} {}", target, file.type_name(&p.ty), p.name)
            })
            .collect();
        let returns = op
            .returns
            .as_ref()
            .map_or_else(|| "void".to_string(), |ty| file.type_name(ty));

        b.each(&op.rules, |b, rule| b.line(&mapping_annotation(rule)))
            .line(&format!("{} {}({});", returns, op.name, params.join(", ")))
    }

    fn render_helper(b: CodeBuilder, helper: &HelperSpec, file: &mut JavaFile) -> CodeBuilder {
        let related = file.type_name(&helper.related_type);
        let variable = variable_name(helper.related_type.simple_name());

        b.block(
            &format!(
                "default {} {}({} id) {{",
                related,
                helper.operation,
                file.type_name(&helper.identifier_type)
            ),
            |b| {
                b.block("if (id == null) {", |b| b.line("return null;"))
                    .line(&format!("{} {} = new {}();", related, variable, related))
                    .line(&format!(
                        "{}.set{}(id);",
                        variable,
                        capitalize(&helper.identifier_name)
                    ))
                    .line(&format!("return {};", variable))
            },
        )
    }
}

fn mapping_annotation(rule: &MappingRule) -> String {
    match rule {
        MappingRule::Map { source, target, .. } => {
            format!("@Mapping(source = \"{}\", target = \"{}\")", source, target)
        }
        MappingRule::Ignore { target } => {
            format!("@Mapping(target = \"{}\", ignore = true)", target)
        }
    }
}

impl GeneratedFile for MapperJava<'_> {
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
            .import(&format!("{}.Mapper", MAPSTRUCT))
            .import(&format!("{}.ReportingPolicy", MAPSTRUCT));
        if spec.operations.iter().any(|op| !op.rules.is_empty()) {
            file = file.import(&format!("{}.Mapping", MAPSTRUCT));
        }
        if spec.operations.iter().flat_map(|op| &op.params).any(|p| p.mapping_target) {
            file = file.import(&format!("{}.MappingTarget", MAPSTRUCT));
        }

        let body = CodeBuilder::java()
            .line("@Mapper(componentModel = \"spring\", unmappedTargetPolicy = ReportingPolicy.IGNORE)")
            .block(&format!("public interface {} {{", spec.name.type_name), |mut b| {
                for op in &spec.operations {
                    b = Self::render_operation(b.blank(), op, &mut file);
                }
                for helper in &spec.helpers {
                    b = Self::render_helper(b.blank(), helper, &mut file);
                }
                b
            })
            .build();

        file.body(body).render()
    }
}
