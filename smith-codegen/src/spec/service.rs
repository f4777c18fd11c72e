use serde::Serialize;
use springsmith_ir::TypeRef;

use super::{Dependency, ErrorKind, Param, ReturnShape};
use crate::naming::ArtifactName;

/// The fixed service operation set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceOpKind {
    FindAll,
    FindById,
    Save,
    Update,
    Delete,
}

impl ServiceOpKind {
    pub const ALL: [ServiceOpKind; 5] = [
        ServiceOpKind::FindAll,
        ServiceOpKind::FindById,
        ServiceOpKind::Save,
        ServiceOpKind::Update,
        ServiceOpKind::Delete,
    ];

    pub fn method_name(&self) -> &'static str {
        match self {
            ServiceOpKind::FindAll => "findAll",
            ServiceOpKind::FindById => "findById",
            ServiceOpKind::Save => "save",
            ServiceOpKind::Update => "update",
            ServiceOpKind::Delete => "delete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceOperation {
    pub kind: ServiceOpKind,
    pub name: String,
    pub params: Vec<Param>,
    pub returns: ReturnShape,
    pub raises: Vec<ErrorKind>,
}

impl ServiceOperation {
    pub fn raises(&self, error: ErrorKind) -> bool {
        self.raises.contains(&error)
    }
}

/// Mapper operation names the service calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapperCalls {
    pub to_dto: String,
    pub to_entity: String,
    pub update_entity: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceSpec {
    pub name: ArtifactName,
    pub entity: TypeRef,
    pub dto: TypeRef,
    pub repository: Dependency,
    pub mapper: Dependency,
    /// Identifier parameter shared by `findById`, `update` and `delete`.
    pub identifier: Param,
    pub mapper_calls: MapperCalls,
    pub operations: Vec<ServiceOperation>,
    /// Set when the repository it depends on is degraded.
    pub degraded: bool,
}

impl ServiceSpec {
    pub fn operation(&self, kind: ServiceOpKind) -> Option<&ServiceOperation> {
        self.operations.iter().find(|op| op.kind == kind)
    }
}
