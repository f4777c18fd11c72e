use std::path::{Path, PathBuf};

use springsmith_codegen::{
    builder::CodeBuilder,
    spec::{ControllerSpec, ErrorKind, ErrorMapping, HttpMethod, ReturnShape, Route, RouteSource},
};
use springsmith_core::{FileRules, GeneratedFile};
use springsmith_manifest::Persistence;

use super::source_path;
use crate::JavaFile;

const WEB_BIND: &str = "org.springframework.web.bind.annotation";
const HTTP: &str = "org.springframework.http";

/// The REST controller exposing the route table.
pub struct ControllerJava<'a> {
    spec: &'a ControllerSpec,
    persistence: Persistence,
    source_root: &'a str,
}

impl<'a> ControllerJava<'a> {
    pub fn new(spec: &'a ControllerSpec, persistence: Persistence, source_root: &'a str) -> Self {
        Self {
            spec,
            persistence,
            source_root,
        }
    }

    fn render_route(&self, b: CodeBuilder, route: &Route, file: &mut JavaFile) -> CodeBuilder {
        let annotation = mapping_annotation(route.method);
        let annotation = if route.path == "/" {
            format!("@{}", annotation)
        } else {
            format!("@{}(\"{}\")", annotation, route.path)
        };

        let response = match &route.returns {
            ReturnShape::List(ty) => format!("ResponseEntity<List<{}>>", file.type_name(ty)),
            ReturnShape::Single(ty) => format!("ResponseEntity<{}>", file.type_name(ty)),
            ReturnShape::Nothing => "ResponseEntity<Void>".to_string(),
        };
        let params: Vec<String> = route
            .params
            .iter()
            .map(|p| {
                let source = match p.source {
                    RouteSource::Path => "@PathVariable",
                    RouteSource::Body => "@RequestBody",
                };
                format!("{} {} {}", source, file.type_name(&p.ty), p.name)
            })
            .collect();
        let args: Vec<&str> = route.params.iter().map(|p| p.name.as_str()).collect();
        let call = format!(
            "{}.{}({})",
            self.spec.service.field,
            route.service_call,
            args.join(", ")
        );

        b.line(&annotation).block(
            &format!(
                "public {} {}({}) {{",
                response,
                route.handler,
                params.join(", ")
            ),
            |b| match (&route.returns, route.status) {
                (ReturnShape::Nothing, status) => b
                    .line(&format!("{};", call))
                    .line(&format!(
                        "return ResponseEntity.status({}).build();",
                        http_status(status)
                    )),
                (_, 200) => b.line(&format!("return ResponseEntity.ok({});", call)),
                (_, status) => b.line(&format!(
                    "return ResponseEntity.status({}).body({});",
                    http_status(status),
                    call
                )),
            },
        )
    }

    fn render_error_mapping(b: CodeBuilder, mapping: &ErrorMapping) -> CodeBuilder {
        let exception = exception_name(mapping.error);
        b.line(&format!("@ExceptionHandler({}.class)", exception))
            .block(
                &format!(
                    "public ResponseEntity<String> {}({} ex) {{",
                    mapping.handler, exception
                ),
                |b| {
                    b.line(&format!(
                        "return ResponseEntity.status({}).body(ex.getMessage());",
                        http_status(mapping.status)
                    ))
                },
            )
    }
}

fn mapping_annotation(method: HttpMethod) -> &'static str {
    match method {
        HttpMethod::Get => "GetMapping",
        HttpMethod::Post => "PostMapping",
        HttpMethod::Put => "PutMapping",
        HttpMethod::Delete => "DeleteMapping",
    }
}

fn exception_name(error: ErrorKind) -> &'static str {
    match error {
        ErrorKind::NotFound => "EntityNotFoundException",
    }
}

/// `HttpStatus` constant for the statuses routes use, `valueOf` otherwise.
fn http_status(status: u16) -> String {
    let constant = match status {
        200 => "OK",
        201 => "CREATED",
        204 => "NO_CONTENT",
        404 => "NOT_FOUND",
        other => return format!("HttpStatus.valueOf({})", other),
    };
    format!("HttpStatus.{}", constant)
}

impl GeneratedFile for ControllerJava<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        source_path(base, self.source_root, &self.spec.name)
    }

    fn rules(&self) -> FileRules {
        FileRules::generated()
    }

    fn render(&self) -> String {
        let spec = self.spec;
        let type_name = &spec.name.type_name;
        let service = &spec.service;

        let mut file = JavaFile::new(&spec.name.namespace)
            .declare(type_name)
            .import(&format!("{}.RestController", WEB_BIND))
            .import(&format!("{}.RequestMapping", WEB_BIND))
            .import(&format!("{}.ResponseEntity", HTTP));
        for route in &spec.routes {
            file = file.import(&format!("{}.{}", WEB_BIND, mapping_annotation(route.method)));
            if matches!(route.returns, ReturnShape::List(_)) {
                file = file.import("java.util.List");
            }
            if route.status != 200 || matches!(route.returns, ReturnShape::Nothing) {
                file = file.import(&format!("{}.HttpStatus", HTTP));
            }
            for param in &route.params {
                let annotation = match param.source {
                    RouteSource::Path => "PathVariable",
                    RouteSource::Body => "RequestBody",
                };
                file = file.import(&format!("{}.{}", WEB_BIND, annotation));
            }
        }
        if !spec.error_mappings.is_empty() {
            file = file
                .import(&format!("{}.ExceptionHandler", WEB_BIND))
                .import(&format!("{}.HttpStatus", HTTP))
                .import(&format!("{}.EntityNotFoundException", self.persistence.package()));
        }
        let service_type = file.type_name(&service.ty);

        let body = CodeBuilder::java()
            .line("@RestController")
            .line(&format!("@RequestMapping(\"{}\")", spec.base_path))
            .block(&format!("public class {} {{", type_name), |b| {
                let mut b = b
                    .blank()
                    .line(&format!("private final {} {};", service_type, service.field))
                    .blank()
                    .block(
                        &format!("public {}({} {}) {{", type_name, service_type, service.field),
                        |b| b.line(&format!("this.{} = {};", service.field, service.field)),
                    );
                for route in &spec.routes {
                    b = self.render_route(b.blank(), route, &mut file);
                }
                b.each(&spec.error_mappings, |b, mapping| {
                    Self::render_error_mapping(b.blank(), mapping)
                })
            })
            .build();

        file.body(body).render()
    }
}
