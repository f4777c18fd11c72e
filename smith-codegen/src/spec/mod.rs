//! Declarative artifact specifications.
//!
//! Specs are plain values: they describe attributes, operations and routes
//! and leave text rendering to an [`ArtifactSink`](crate::sink::ArtifactSink).

mod controller;
mod dto;
mod mapper;
mod repository;
mod service;

pub use controller::{
    ControllerSpec, ErrorMapping, HttpMethod, Route, RouteKind, RouteParam, RouteSource,
};
pub use dto::{Accessor, DtoSpec};
pub use mapper::{MapperOpKind, MapperOperation, MapperParam, MapperSpec};
pub use repository::{PersistenceContract, RepositorySpec};
use serde::Serialize;
pub use service::{MapperCalls, ServiceOpKind, ServiceOperation, ServiceSpec};
use springsmith_ir::TypeRef;

use crate::naming::{ArtifactKind, ArtifactName};

/// One generated artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ArtifactSpec {
    Dto(DtoSpec),
    Mapper(MapperSpec),
    Repository(RepositorySpec),
    Service(ServiceSpec),
    Controller(ControllerSpec),
}

impl ArtifactSpec {
    pub fn kind(&self) -> ArtifactKind {
        match self {
            ArtifactSpec::Dto(_) => ArtifactKind::Dto,
            ArtifactSpec::Mapper(_) => ArtifactKind::Mapper,
            ArtifactSpec::Repository(_) => ArtifactKind::Repository,
            ArtifactSpec::Service(_) => ArtifactKind::Service,
            ArtifactSpec::Controller(_) => ArtifactKind::Controller,
        }
    }

    pub fn name(&self) -> &ArtifactName {
        match self {
            ArtifactSpec::Dto(spec) => &spec.name,
            ArtifactSpec::Mapper(spec) => &spec.name,
            ArtifactSpec::Repository(spec) => &spec.name,
            ArtifactSpec::Service(spec) => &spec.name,
            ArtifactSpec::Controller(spec) => &spec.name,
        }
    }

    pub fn as_dto(&self) -> Option<&DtoSpec> {
        match self {
            ArtifactSpec::Dto(spec) => Some(spec),
            _ => None,
        }
    }

    pub fn as_mapper(&self) -> Option<&MapperSpec> {
        match self {
            ArtifactSpec::Mapper(spec) => Some(spec),
            _ => None,
        }
    }

    pub fn as_repository(&self) -> Option<&RepositorySpec> {
        match self {
            ArtifactSpec::Repository(spec) => Some(spec),
            _ => None,
        }
    }

    pub fn as_service(&self) -> Option<&ServiceSpec> {
        match self {
            ArtifactSpec::Service(spec) => Some(spec),
            _ => None,
        }
    }

    pub fn as_controller(&self) -> Option<&ControllerSpec> {
        match self {
            ArtifactSpec::Controller(spec) => Some(spec),
            _ => None,
        }
    }
}

/// A spec paired with the namespace it is emitted into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmittedArtifact {
    pub namespace: String,
    pub spec: ArtifactSpec,
}

impl EmittedArtifact {
    pub fn new(spec: ArtifactSpec) -> Self {
        Self {
            namespace: spec.name().namespace.clone(),
            spec,
        }
    }
}

/// A named, typed parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Param {
    pub name: String,
    pub ty: TypeRef,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// An injected collaborator held in a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dependency {
    pub field: String,
    pub ty: TypeRef,
}

impl From<&ArtifactName> for Dependency {
    fn from(name: &ArtifactName) -> Self {
        Self {
            field: name.variable_name(),
            ty: name.type_ref(),
        }
    }
}

/// Error kinds generated code can signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// No record matches the given identifier.
    NotFound,
}

/// What an operation hands back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "shape", content = "type", rename_all = "snake_case")]
pub enum ReturnShape {
    List(TypeRef),
    Single(TypeRef),
    Nothing,
}

