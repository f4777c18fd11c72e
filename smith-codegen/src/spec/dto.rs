use serde::Serialize;
use springsmith_ir::TypeRef;

use crate::{naming::ArtifactName, relation::DtoAttribute};

/// A getter/setter pair for one DTO attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Accessor {
    pub attribute: String,
    pub ty: TypeRef,
    pub getter: String,
    pub setter: String,
}

/// The data-transfer shape of an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DtoSpec {
    pub name: ArtifactName,
    pub entity: TypeRef,
    pub attributes: Vec<DtoAttribute>,
    /// One pair per attribute, in attribute order.
    pub accessors: Vec<Accessor>,
}

impl DtoSpec {
    pub fn attribute(&self, name: &str) -> Option<&DtoAttribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn accessor(&self, attribute: &str) -> Option<&Accessor> {
        self.accessors.iter().find(|a| a.attribute == attribute)
    }
}
