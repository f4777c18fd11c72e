use super::{ArtifactBuilder, BuildError, BuildInput};
use crate::{
    naming::ArtifactKind,
    pipeline::Diagnostic,
    spec::{
        ArtifactSpec, ControllerSpec, Dependency, ErrorKind, ErrorMapping, HttpMethod, Route,
        RouteKind, RouteParam, RouteSource, ServiceOpKind,
    },
};

pub const STATUS_OK: u16 = 200;
pub const STATUS_CREATED: u16 = 201;
pub const STATUS_NO_CONTENT: u16 = 204;
pub const STATUS_NOT_FOUND: u16 = 404;

/// Builds the fixed route table over the service.
pub struct ControllerBuilder;

impl ArtifactBuilder for ControllerBuilder {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Controller
    }

    fn build(
        &self,
        input: &BuildInput<'_>,
        _diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<ArtifactSpec, BuildError> {
        let naming = input.naming;
        let service = input.service()?;
        let entity = &naming.entity;

        let id = RouteParam {
            name: service.identifier.name.clone(),
            ty: service.identifier.ty.clone(),
            source: RouteSource::Path,
        };
        let body = RouteParam {
            name: naming.dto.variable_name(),
            ty: service.dto.clone(),
            source: RouteSource::Body,
        };
        let item_path = format!("/{{{}}}", id.name);

        let mut routes = Vec::with_capacity(RouteKind::ALL.len());
        for kind in RouteKind::ALL {
            let (handler, method, path, status, params, invokes) = match kind {
                RouteKind::List => (
                    format!("getAll{}", naming.plural),
                    HttpMethod::Get,
                    "/".to_string(),
                    STATUS_OK,
                    vec![],
                    ServiceOpKind::FindAll,
                ),
                RouteKind::Get => (
                    format!("get{}ById", entity),
                    HttpMethod::Get,
                    item_path.clone(),
                    STATUS_OK,
                    vec![id.clone()],
                    ServiceOpKind::FindById,
                ),
                RouteKind::Create => (
                    format!("create{}", entity),
                    HttpMethod::Post,
                    "/".to_string(),
                    STATUS_CREATED,
                    vec![body.clone()],
                    ServiceOpKind::Save,
                ),
                RouteKind::Update => (
                    format!("update{}", entity),
                    HttpMethod::Put,
                    item_path.clone(),
                    STATUS_OK,
                    vec![id.clone(), body.clone()],
                    ServiceOpKind::Update,
                ),
                RouteKind::Delete => (
                    format!("delete{}", entity),
                    HttpMethod::Delete,
                    item_path.clone(),
                    STATUS_NO_CONTENT,
                    vec![id.clone()],
                    ServiceOpKind::Delete,
                ),
            };

            let operation =
                service
                    .operation(invokes)
                    .ok_or_else(|| BuildError::MissingOperation {
                        artifact: service.name.type_name.clone(),
                        operation: invokes.method_name().to_string(),
                    })?;

            routes.push(Route {
                kind,
                handler,
                method,
                path,
                status,
                params,
                returns: operation.returns.clone(),
                invokes,
                service_call: operation.name.clone(),
            });
        }

        Ok(ArtifactSpec::Controller(ControllerSpec {
            name: naming.controller.clone(),
            base_path: naming.route_base.clone(),
            service: Dependency::from(&service.name),
            routes,
            error_mappings: vec![ErrorMapping {
                error: ErrorKind::NotFound,
                status: STATUS_NOT_FOUND,
                handler: "handleNotFound".to_string(),
            }],
        }))
    }
}
