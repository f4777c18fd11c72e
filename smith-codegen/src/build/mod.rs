//! Artifact builders.
//!
//! Each builder turns one entity, its relation plan and its names into a
//! single [`ArtifactSpec`]. Builders run in emission order and may read the
//! specs built before them, so a service always agrees with the mapper and
//! repository it was built against.

mod controller;
mod dto;
mod mapper;
mod repository;
mod service;

pub use controller::ControllerBuilder;
pub use dto::DtoBuilder;
pub use mapper::MapperBuilder;
pub use repository::RepositoryBuilder;
pub use service::ServiceBuilder;
use springsmith_ir::EntityDescriptor;

use crate::{
    extract::RelatedTypes,
    naming::{ArtifactKind, NamingContext},
    pipeline::{Diagnostic, DiagnosticKind},
    relation::{RelationPlan, RelationResolver},
    spec::{ArtifactSpec, DtoSpec, EmittedArtifact, MapperSpec, RepositorySpec, ServiceSpec},
};

/// Phase name attached to diagnostics raised while building.
pub const BUILD_PHASE: &str = "build";

/// Error that aborts every artifact of one entity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("{artifact} would contain attribute '{name}' twice")]
    DuplicateAttribute { artifact: String, name: String },

    #[error("helper '{operation}' would be generated for both '{first}' and '{second}'")]
    HelperNameClash {
        operation: String,
        first: String,
        second: String,
    },

    #[error("{needed} must be built before the artifacts that depend on it")]
    MissingDependency { needed: ArtifactKind },

    #[error("{artifact} has no '{operation}' operation")]
    MissingOperation { artifact: String, operation: String },
}

/// Everything a builder may read.
#[derive(Debug, Clone, Copy)]
pub struct BuildInput<'a> {
    pub entity: &'a EntityDescriptor,
    pub relations: &'a RelationPlan,
    pub naming: &'a NamingContext,
    /// Specs already built for this entity, in emission order.
    pub built: &'a [ArtifactSpec],
}

impl<'a> BuildInput<'a> {
    pub fn dto(&self) -> Result<&'a DtoSpec, BuildError> {
        self.built
            .iter()
            .find_map(ArtifactSpec::as_dto)
            .ok_or(BuildError::MissingDependency {
                needed: ArtifactKind::Dto,
            })
    }

    pub fn mapper(&self) -> Result<&'a MapperSpec, BuildError> {
        self.built
            .iter()
            .find_map(ArtifactSpec::as_mapper)
            .ok_or(BuildError::MissingDependency {
                needed: ArtifactKind::Mapper,
            })
    }

    pub fn repository(&self) -> Result<&'a RepositorySpec, BuildError> {
        self.built
            .iter()
            .find_map(ArtifactSpec::as_repository)
            .ok_or(BuildError::MissingDependency {
                needed: ArtifactKind::Repository,
            })
    }

    pub fn service(&self) -> Result<&'a ServiceSpec, BuildError> {
        self.built
            .iter()
            .find_map(ArtifactSpec::as_service)
            .ok_or(BuildError::MissingDependency {
                needed: ArtifactKind::Service,
            })
    }
}

/// Produces one artifact spec per entity.
///
/// Non-fatal conditions are pushed onto `diagnostics`; a returned error
/// discards the whole entity.
pub trait ArtifactBuilder: Send + Sync {
    fn kind(&self) -> ArtifactKind;

    fn build(
        &self,
        input: &BuildInput<'_>,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<ArtifactSpec, BuildError>;
}

/// The five builders in emission order.
pub fn default_builders() -> Vec<Box<dyn ArtifactBuilder>> {
    vec![
        Box::new(DtoBuilder),
        Box::new(MapperBuilder),
        Box::new(RepositoryBuilder),
        Box::new(ServiceBuilder),
        Box::new(ControllerBuilder),
    ]
}

/// Run every builder for one entity.
///
/// Either all artifacts come back or none do. Diagnostics raised before a
/// failure are still pushed.
pub fn build_entity(
    entity: &EntityDescriptor,
    related: &dyn RelatedTypes,
    builders: &[Box<dyn ArtifactBuilder>],
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Vec<EmittedArtifact>, BuildError> {
    let relations = RelationResolver::new(related).resolve(entity);
    for unresolved in &relations.unresolved {
        diagnostics.push(
            Diagnostic::warning(BUILD_PHASE, unresolved.message())
                .kind(DiagnosticKind::UnresolvableRelationTarget)
                .entity(&entity.simple_name)
                .at(format!("{}.{}", entity.qualified_name(), unresolved.field)),
        );
    }

    let naming = NamingContext::resolve(entity);
    let mut built: Vec<ArtifactSpec> = Vec::with_capacity(builders.len());
    for builder in builders {
        let spec = builder.build(
            &BuildInput {
                entity,
                relations: &relations,
                naming: &naming,
                built: &built,
            },
            diagnostics,
        )?;
        built.push(spec);
    }

    Ok(built.into_iter().map(EmittedArtifact::new).collect())
}
