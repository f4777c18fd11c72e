use std::collections::HashMap;

use super::{ArtifactBuilder, BuildError, BuildInput};
use crate::{
    naming::ArtifactKind,
    pipeline::Diagnostic,
    relation::MappingRule,
    spec::{ArtifactSpec, MapperOpKind, MapperOperation, MapperParam, MapperSpec},
};

/// Builds the entity/DTO mapping contract.
///
/// `toEntity` only rebuilds related objects as identifier stubs; attaching
/// real aggregates is left to the service layer.
pub struct MapperBuilder;

impl ArtifactBuilder for MapperBuilder {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Mapper
    }

    fn build(
        &self,
        input: &BuildInput<'_>,
        _diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<ArtifactSpec, BuildError> {
        let naming = input.naming;
        let entity = input.entity.type_ref();
        let dto = input.dto()?.name.type_ref();
        let relations = input.relations;

        let mut by_name: HashMap<&str, &str> = HashMap::new();
        for helper in &relations.helpers {
            let related = helper.related_type.name();
            if let Some(first) = by_name.insert(&helper.operation, related) {
                return Err(BuildError::HelperNameClash {
                    operation: helper.operation.clone(),
                    first: first.to_string(),
                    second: related.to_string(),
                });
            }
        }

        let entity_param = |mapping_target| MapperParam {
            name: naming.entity_variable(),
            ty: entity.clone(),
            mapping_target,
        };
        let dto_param = MapperParam {
            name: naming.dto.variable_name(),
            ty: dto.clone(),
            mapping_target: false,
        };

        let mut update_rules = relations.to_entity.clone();
        if let Some(identifier) = input.entity.identifier_field() {
            update_rules.push(MappingRule::Ignore {
                target: identifier.name.clone(),
            });
        }

        let operations = vec![
            MapperOperation {
                kind: MapperOpKind::ToDto,
                name: format!("to{}", naming.dto.type_name),
                params: vec![entity_param(false)],
                returns: Some(dto.clone()),
                rules: relations.to_dto.clone(),
            },
            MapperOperation {
                kind: MapperOpKind::ToEntity,
                name: format!("to{}", naming.entity),
                params: vec![dto_param.clone()],
                returns: Some(entity.clone()),
                rules: relations.to_entity.clone(),
            },
            MapperOperation {
                kind: MapperOpKind::UpdateEntity,
                name: format!("update{}", naming.entity),
                params: vec![dto_param, entity_param(true)],
                returns: None,
                rules: update_rules,
            },
        ];

        Ok(ArtifactSpec::Mapper(MapperSpec {
            name: naming.mapper.clone(),
            entity,
            dto,
            operations,
            helpers: relations.helpers.clone(),
        }))
    }
}
