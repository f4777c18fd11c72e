use serde::Serialize;
use springsmith_ir::TypeRef;

use crate::{
    naming::ArtifactName,
    relation::{HelperSpec, MappingRule},
};

/// The operations every mapper offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MapperOpKind {
    /// entity -> dto
    ToDto,
    /// dto -> entity, related objects as identifier-only stubs
    ToEntity,
    /// copy dto state onto an existing entity, identifier untouched
    UpdateEntity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapperParam {
    pub name: String,
    pub ty: TypeRef,
    /// Whether the parameter is updated in place.
    pub mapping_target: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapperOperation {
    pub kind: MapperOpKind,
    pub name: String,
    pub params: Vec<MapperParam>,
    /// `None` for in-place updates.
    pub returns: Option<TypeRef>,
    pub rules: Vec<MappingRule>,
}

/// The bidirectional mapping contract between an entity and its DTO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapperSpec {
    pub name: ArtifactName,
    pub entity: TypeRef,
    pub dto: TypeRef,
    pub operations: Vec<MapperOperation>,
    pub helpers: Vec<HelperSpec>,
}

impl MapperSpec {
    pub fn operation(&self, kind: MapperOpKind) -> Option<&MapperOperation> {
        self.operations.iter().find(|op| op.kind == kind)
    }
}
