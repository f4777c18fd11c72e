use std::path::{Path, PathBuf};

use springsmith_codegen::{
    builder::CodeBuilder,
    naming::variable_name,
    spec::{ReturnShape, ServiceOpKind, ServiceOperation, ServiceSpec},
};
use springsmith_core::{FileRules, GeneratedFile};
use springsmith_manifest::Persistence;

use super::{not_found_message, source_path};
use crate::JavaFile;

const SERVICE: &str = "org.springframework.stereotype.Service";
const LIST: &str = "java.util.List";
const COLLECTORS: &str = "java.util.stream.Collectors";

/// The service class wrapping the repository and mapper.
///
/// A degraded service keeps every signature but each body throws
/// `UnsupportedOperationException`; it has no repository to inject.
pub struct ServiceJava<'a> {
    spec: &'a ServiceSpec,
    persistence: Persistence,
    source_root: &'a str,
}

impl<'a> ServiceJava<'a> {
    pub fn new(spec: &'a ServiceSpec, persistence: Persistence, source_root: &'a str) -> Self {
        Self {
            spec,
            persistence,
            source_root,
        }
    }

    fn signature(op: &ServiceOperation, file: &mut JavaFile) -> String {
        let returns = match &op.returns {
            ReturnShape::List(ty) => format!("List<{}>", file.type_name(ty)),
            ReturnShape::Single(ty) => file.type_name(ty),
            ReturnShape::Nothing => "void".to_string(),
        };
        let params: Vec<String> = op
            .params
            .iter()
            .map(|p| format!("{} {}", file.type_name(&p.ty), p.name))
            .collect();
        format!("public {} {}({}) {{", returns, op.name, params.join(", "))
    }

    /// `entity` is the entity type as written in this file.
    fn render_body(&self, b: CodeBuilder, op: &ServiceOperation, entity: &str) -> CodeBuilder {
        let spec = self.spec;
        if spec.degraded {
            return b.line(&format!(
                "throw new UnsupportedOperationException(\"{} has no identifier field\");",
                spec.entity.simple_name()
            ));
        }

        let repo = &spec.repository.field;
        let mapper = &spec.mapper.field;
        let calls = &spec.mapper_calls;
        let id = &spec.identifier.name;
        let not_found = format!(
            "new EntityNotFoundException({})",
            not_found_message(spec.entity.simple_name(), id)
        );
        let dto = op
            .params
            .iter()
            .find(|p| p.ty == spec.dto)
            .map_or("dto", |p| p.name.as_str());
        let var = &variable_name(spec.entity.simple_name());

        match op.kind {
            ServiceOpKind::FindAll => b
                .line(&format!("return {}.findAll().stream()", repo))
                .indent()
                .indent()
                .line(&format!(".map({}::{})", mapper, calls.to_dto))
                .line(".collect(Collectors.toList());")
                .dedent()
                .dedent(),
            ServiceOpKind::FindById => b
                .line(&format!("return {}.findById({})", repo, id))
                .indent()
                .indent()
                .line(&format!(".map({}::{})", mapper, calls.to_dto))
                .line(&format!(".orElseThrow(() -> {});", not_found))
                .dedent()
                .dedent(),
            ServiceOpKind::Save => b
                .line(&format!(
                    "{} {} = {}.{}({});",
                    entity, var, mapper, calls.to_entity, dto
                ))
                .line(&format!(
                    "return {}.{}({}.save({}));",
                    mapper, calls.to_dto, repo, var
                )),
            ServiceOpKind::Update => b
                .line(&format!("{} {} = {}.findById({})", entity, var, repo, id))
                .indent()
                .indent()
                .line(&format!(".orElseThrow(() -> {});", not_found))
                .dedent()
                .dedent()
                .line(&format!("{}.{}({}, {});", mapper, calls.update_entity, dto, var))
                .line(&format!(
                    "return {}.{}({}.save({}));",
                    mapper, calls.to_dto, repo, var
                )),
            ServiceOpKind::Delete => b
                .block(&format!("if (!{}.existsById({})) {{", repo, id), |b| {
                    b.line(&format!("throw {};", not_found))
                })
                .line(&format!("{}.deleteById({});", repo, id)),
        }
    }
}

impl GeneratedFile for ServiceJava<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        source_path(base, self.source_root, &self.spec.name)
    }

    fn rules(&self) -> FileRules {
        FileRules::generated()
    }

    fn render(&self) -> String {
        let spec = self.spec;
        let type_name = &spec.name.type_name;

        let mut dependencies = Vec::with_capacity(2);
        if !spec.degraded {
            dependencies.push(&spec.repository);
        }
        dependencies.push(&spec.mapper);

        let mut file = JavaFile::new(&spec.name.namespace)
            .declare(type_name)
            .import(SERVICE)
            .import(LIST);
        let mut entity = String::new();
        if !spec.degraded {
            file = file
                .import(COLLECTORS)
                .import(&format!("{}.EntityNotFoundException", self.persistence.package()));
            entity = file.type_name(&spec.entity);
        }
        let dependency_types: Vec<String> =
            dependencies.iter().map(|d| file.type_name(&d.ty)).collect();
        let signatures: Vec<String> = spec
            .operations
            .iter()
            .map(|op| Self::signature(op, &mut file))
            .collect();

        let ctor_params: Vec<String> = dependencies
            .iter()
            .zip(&dependency_types)
            .map(|(d, ty)| format!("{} {}", ty, d.field))
            .collect();

        let body = CodeBuilder::java()
            .line("@Service")
            .block(&format!("public class {} {{", type_name), |b| {
                b.blank()
                    .each(dependencies.iter().zip(&dependency_types), |b, (d, ty)| {
                        b.line(&format!("private final {} {};", ty, d.field))
                    })
                    .blank()
                    .block(
                        &format!("public {}({}) {{", type_name, ctor_params.join(", ")),
                        |b| {
                            b.each(&dependencies, |b, d| {
                                b.line(&format!("this.{} = {};", d.field, d.field))
                            })
                        },
                    )
                    .each(spec.operations.iter().zip(&signatures), |b, (op, signature)| {
                        b.blank()
                            .block(signature, |b| self.render_body(b, op, &entity))
                    })
            })
            .build();

        file.body(body).render()
    }
}
