use std::collections::HashSet;

use springsmith_core::capitalize;

use super::{ArtifactBuilder, BuildError, BuildInput};
use crate::{
    naming::ArtifactKind,
    pipeline::Diagnostic,
    relation::DtoAttribute,
    spec::{Accessor, ArtifactSpec, DtoSpec},
};

/// Builds the data-transfer shape from the relation plan's attributes.
pub struct DtoBuilder;

impl ArtifactBuilder for DtoBuilder {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Dto
    }

    fn build(
        &self,
        input: &BuildInput<'_>,
        _diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<ArtifactSpec, BuildError> {
        let attributes = &input.relations.attributes;

        let mut seen = HashSet::new();
        if let Some(clash) = attributes.iter().find(|a| !seen.insert(a.name.as_str())) {
            return Err(BuildError::DuplicateAttribute {
                artifact: input.naming.dto.type_name.clone(),
                name: clash.name.clone(),
            });
        }

        Ok(ArtifactSpec::Dto(DtoSpec {
            name: input.naming.dto.clone(),
            entity: input.entity.type_ref(),
            attributes: attributes.clone(),
            accessors: attributes.iter().map(accessor).collect(),
        }))
    }
}

/// `is<Name>` for booleans, `get<Name>` otherwise; always `set<Name>`.
fn accessor(attribute: &DtoAttribute) -> Accessor {
    let prefix = if attribute.ty.is_boolean() { "is" } else { "get" };
    let suffix = capitalize(&attribute.name);
    Accessor {
        attribute: attribute.name.clone(),
        ty: attribute.ty.clone(),
        getter: format!("{}{}", prefix, suffix),
        setter: format!("set{}", suffix),
    }
}

#[cfg(test)]
mod tests {
    use springsmith_ir::{EntityDescriptor, FieldDescriptor, TypeRef};

    use super::*;
    use crate::{
        naming::NamingContext,
        relation::{AttributeOrigin, RelationPlan},
    };

    fn attribute(name: &str, ty: &str) -> DtoAttribute {
        DtoAttribute {
            name: name.to_string(),
            ty: TypeRef::parse(ty).unwrap(),
            origin: AttributeOrigin::Field,
        }
    }

    fn build(relations: RelationPlan) -> Result<ArtifactSpec, BuildError> {
        let entity = EntityDescriptor::new("Task", "com.acme.work.model")
            .field(FieldDescriptor::new("id", TypeRef::named("Long")));
        let naming = NamingContext::resolve(&entity);
        DtoBuilder.build(
            &BuildInput {
                entity: &entity,
                relations: &relations,
                naming: &naming,
                built: &[],
            },
            &mut Vec::new(),
        )
    }

    #[test]
    fn test_accessors_follow_attribute_order() {
        let spec = build(RelationPlan {
            attributes: vec![
                attribute("id", "Long"),
                attribute("done", "boolean"),
                attribute("archived", "java.lang.Boolean"),
                attribute("tags", "List<String>"),
            ],
            ..RelationPlan::default()
        })
        .unwrap();
        let dto = spec.as_dto().unwrap();

        assert_eq!(dto.name.qualified_name(), "com.acme.work.dtos.TaskDTO");
        let getters: Vec<&str> = dto.accessors.iter().map(|a| a.getter.as_str()).collect();
        assert_eq!(getters, vec!["getId", "isDone", "isArchived", "getTags"]);
        assert_eq!(dto.accessor("done").unwrap().setter, "setDone");
    }

    #[test]
    fn test_duplicate_attribute() {
        let err = build(RelationPlan {
            attributes: vec![attribute("ownerId", "Long"), attribute("ownerId", "Long")],
            ..RelationPlan::default()
        })
        .unwrap_err();
        assert!(matches!(err, BuildError::DuplicateAttribute { ref name, .. } if name == "ownerId"));
    }
}
