use springsmith_ir::TypeRef;

use super::{ArtifactBuilder, BuildError, BuildInput};
use crate::{
    naming::ArtifactKind,
    pipeline::Diagnostic,
    spec::{
        ArtifactSpec, Dependency, ErrorKind, MapperCalls, MapperOpKind, MapperSpec, Param,
        ReturnShape, ServiceOpKind, ServiceOperation, ServiceSpec,
    },
};

/// Identifier type assumed when the repository is degraded.
pub const FALLBACK_IDENTIFIER_TYPE: &str = "Long";

/// Builds the fixed service operation set.
///
/// `update` is a DTO-scoped merge: it locates the record (raising
/// `NotFound`), copies the DTO onto it through the mapper's update operation
/// and persists it. Attributes the DTO does not carry are left as they were.
pub struct ServiceBuilder;

impl ArtifactBuilder for ServiceBuilder {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Service
    }

    fn build(
        &self,
        input: &BuildInput<'_>,
        _diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<ArtifactSpec, BuildError> {
        let naming = input.naming;
        let dto = input.dto()?.name.type_ref();
        let mapper = input.mapper()?;
        let repository = input.repository()?;

        let identifier = Param::new(
            naming.path_param.clone(),
            repository.contract.as_ref().map_or_else(
                || TypeRef::named(FALLBACK_IDENTIFIER_TYPE),
                |contract| contract.identifier.clone(),
            ),
        );
        let dto_param = Param::new(naming.dto.variable_name(), dto.clone());

        let mapper_calls = MapperCalls {
            to_dto: mapper_call(mapper, MapperOpKind::ToDto)?,
            to_entity: mapper_call(mapper, MapperOpKind::ToEntity)?,
            update_entity: mapper_call(mapper, MapperOpKind::UpdateEntity)?,
        };

        let operations = ServiceOpKind::ALL
            .iter()
            .map(|&kind| {
                let (params, returns, raises) = match kind {
                    ServiceOpKind::FindAll => (vec![], ReturnShape::List(dto.clone()), vec![]),
                    ServiceOpKind::FindById => (
                        vec![identifier.clone()],
                        ReturnShape::Single(dto.clone()),
                        vec![ErrorKind::NotFound],
                    ),
                    ServiceOpKind::Save => (
                        vec![dto_param.clone()],
                        ReturnShape::Single(dto.clone()),
                        vec![],
                    ),
                    ServiceOpKind::Update => (
                        vec![identifier.clone(), dto_param.clone()],
                        ReturnShape::Single(dto.clone()),
                        vec![ErrorKind::NotFound],
                    ),
                    ServiceOpKind::Delete => (
                        vec![identifier.clone()],
                        ReturnShape::Nothing,
                        vec![ErrorKind::NotFound],
                    ),
                };
                ServiceOperation {
                    kind,
                    name: kind.method_name().to_string(),
                    params,
                    returns,
                    raises,
                }
            })
            .collect();

        Ok(ArtifactSpec::Service(ServiceSpec {
            name: naming.service.clone(),
            entity: input.entity.type_ref(),
            dto,
            repository: Dependency::from(&repository.name),
            mapper: Dependency::from(&mapper.name),
            identifier,
            mapper_calls,
            operations,
            degraded: repository.is_degraded(),
        }))
    }
}

fn mapper_call(mapper: &MapperSpec, kind: MapperOpKind) -> Result<String, BuildError> {
    mapper
        .operation(kind)
        .map(|op| op.name.clone())
        .ok_or_else(|| BuildError::MissingOperation {
            artifact: mapper.name.type_name.clone(),
            operation: format!("{:?}", kind),
        })
}
