use serde::Serialize;
use springsmith_ir::TypeRef;

use crate::naming::ArtifactName;

/// The persistence contract a repository extends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersistenceContract {
    pub entity: TypeRef,
    /// Boxed identifier type.
    pub identifier: TypeRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositorySpec {
    pub name: ArtifactName,
    pub entity: TypeRef,
    /// Absent when the entity has no identifier.
    pub contract: Option<PersistenceContract>,
}

impl RepositorySpec {
    /// A degraded repository carries no persistence contract and must not be
    /// relied on by callers.
    pub fn is_degraded(&self) -> bool {
        self.contract.is_none()
    }
}
