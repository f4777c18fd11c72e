use std::fmt;

use serde::Serialize;
use springsmith_ir::TypeRef;

use super::{Dependency, ErrorKind, ReturnShape, ServiceOpKind};
use crate::naming::ArtifactName;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The five routes of a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteKind {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl RouteKind {
    pub const ALL: [RouteKind; 5] = [
        RouteKind::List,
        RouteKind::Get,
        RouteKind::Create,
        RouteKind::Update,
        RouteKind::Delete,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteSource {
    Path,
    Body,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteParam {
    pub name: String,
    pub ty: TypeRef,
    pub source: RouteSource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub kind: RouteKind,
    pub handler: String,
    pub method: HttpMethod,
    /// Path relative to the base, `/` or `/{param}`.
    pub path: String,
    /// Status code on success.
    pub status: u16,
    pub params: Vec<RouteParam>,
    pub returns: ReturnShape,
    /// Service operation this route delegates to.
    pub invokes: ServiceOpKind,
    pub service_call: String,
}

impl Route {
    /// Path joined with the controller base, without a trailing slash.
    pub fn full_path(&self, base: &str) -> String {
        if self.path == "/" {
            base.to_string()
        } else {
            format!("{}{}", base, self.path)
        }
    }
}

/// Maps an error kind raised by the service to a response status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorMapping {
    pub error: ErrorKind,
    pub status: u16,
    pub handler: String,
}

/// The routed API surface for an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControllerSpec {
    pub name: ArtifactName,
    pub base_path: String,
    pub service: Dependency,
    pub routes: Vec<Route>,
    pub error_mappings: Vec<ErrorMapping>,
}

impl ControllerSpec {
    pub fn route(&self, kind: RouteKind) -> Option<&Route> {
        self.routes.iter().find(|r| r.kind == kind)
    }
}
