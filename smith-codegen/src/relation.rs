//! Relation unwrapping.
//!
//! Decides, field by field, what survives into the DTO: plain columns are
//! kept, to-many collections are dropped and to-one references collapse into
//! a foreign-key attribute backed by a reconstruction helper.

use std::collections::HashSet;

use serde::Serialize;
use springsmith_core::{capitalize, last_segment};
use springsmith_ir::{EntityDescriptor, FieldDescriptor, RelationKind, TypeRef};

use crate::extract::RelatedTypes;

/// Suffix appended to a to-one field to form its foreign-key attribute.
pub const FOREIGN_KEY_SUFFIX: &str = "Id";

/// How a field takes part in the DTO.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldClass {
    Scalar,
    ToOne,
    ToMany,
}

/// Where a DTO attribute comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AttributeOrigin {
    /// Copied verbatim from the entity field of the same name.
    Field,
    /// Identifier of the related object held by `relation`.
    ForeignKey { relation: String },
}

/// An attribute of the generated DTO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DtoAttribute {
    pub name: String,
    pub ty: TypeRef,
    pub origin: AttributeOrigin,
}

/// An explicit mapping override; anything else maps by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MappingRule {
    /// Map the `source` property path onto `target`, optionally through a helper.
    Map {
        source: String,
        target: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        helper: Option<String>,
    },
    /// Leave `target` untouched.
    Ignore { target: String },
}

impl MappingRule {
    pub fn target(&self) -> &str {
        match self {
            MappingRule::Map { target, .. } | MappingRule::Ignore { target } => target,
        }
    }
}

/// Builds a related-object stub holding only its identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HelperSpec {
    pub related_type: TypeRef,
    pub identifier_name: String,
    pub identifier_type: TypeRef,
    pub operation: String,
}

impl HelperSpec {
    pub fn new(related_type: TypeRef, identifier_name: &str, identifier_type: TypeRef) -> Self {
        let operation = helper_name(related_type.simple_name());
        Self {
            related_type,
            identifier_name: identifier_name.to_string(),
            identifier_type,
            operation,
        }
    }
}

/// Why a to-one field could not be unwrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnresolvedReason {
    /// The target type is not declared anywhere.
    UnknownType,
    /// The target type has no identifier field.
    NoIdentifier,
}

/// A to-one field that was dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnresolvedRelation {
    pub field: String,
    pub target: TypeRef,
    pub reason: UnresolvedReason,
}

impl UnresolvedRelation {
    pub fn message(&self) -> String {
        match self.reason {
            UnresolvedReason::UnknownType => format!(
                "relation '{}' points at unknown type '{}'; field dropped",
                self.field, self.target
            ),
            UnresolvedReason::NoIdentifier => format!(
                "relation '{}' points at '{}' which has no identifier; field dropped",
                self.field, self.target
            ),
        }
    }
}

/// Outcome of relation unwrapping for one entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RelationPlan {
    /// DTO attributes in field declaration order.
    pub attributes: Vec<DtoAttribute>,
    /// Overrides for the entity-to-DTO direction.
    pub to_dto: Vec<MappingRule>,
    /// Overrides for the DTO-to-entity direction.
    pub to_entity: Vec<MappingRule>,
    /// One helper per distinct related type.
    pub helpers: Vec<HelperSpec>,
    pub unresolved: Vec<UnresolvedRelation>,
}

/// Classifies fields and unwraps relations against a read-only type lookup.
pub struct RelationResolver<'a> {
    related: &'a dyn RelatedTypes,
}

impl<'a> RelationResolver<'a> {
    pub fn new(related: &'a dyn RelatedTypes) -> Self {
        Self { related }
    }

    pub fn classify(field: &FieldDescriptor) -> FieldClass {
        match field.relation {
            RelationKind::None => FieldClass::Scalar,
            RelationKind::ToOne => FieldClass::ToOne,
            RelationKind::ToMany => FieldClass::ToMany,
        }
    }

    /// Unwrap every instance field of `entity`.
    ///
    /// The helper set is local to this call, so entities never share state.
    pub fn resolve(&self, entity: &EntityDescriptor) -> RelationPlan {
        let mut plan = RelationPlan::default();
        let mut helped: HashSet<String> = HashSet::new();

        for field in entity.instance_fields() {
            match Self::classify(field) {
                FieldClass::Scalar => plan.attributes.push(DtoAttribute {
                    name: field.name.clone(),
                    ty: field.declared_type.clone(),
                    origin: AttributeOrigin::Field,
                }),
                FieldClass::ToMany => {}
                FieldClass::ToOne => {
                    let Some(related) = self
                        .related
                        .resolve(&field.declared_type, &entity.source_namespace)
                    else {
                        plan.unresolved.push(UnresolvedRelation {
                            field: field.name.clone(),
                            target: field.declared_type.clone(),
                            reason: UnresolvedReason::UnknownType,
                        });
                        continue;
                    };
                    let Some(identifier) = &related.identifier else {
                        plan.unresolved.push(UnresolvedRelation {
                            field: field.name.clone(),
                            target: related.type_ref(),
                            reason: UnresolvedReason::NoIdentifier,
                        });
                        continue;
                    };

                    let key = foreign_key_name(&field.name);
                    let key_type = identifier.ty.boxed();
                    let helper = helper_name(related.simple_name());

                    plan.attributes.push(DtoAttribute {
                        name: key.clone(),
                        ty: key_type.clone(),
                        origin: AttributeOrigin::ForeignKey {
                            relation: field.name.clone(),
                        },
                    });
                    plan.to_dto.push(MappingRule::Map {
                        source: format!("{}.{}", field.name, identifier.name),
                        target: key.clone(),
                        helper: None,
                    });
                    plan.to_entity.push(MappingRule::Map {
                        source: key,
                        target: field.name.clone(),
                        helper: Some(helper),
                    });

                    if helped.insert(related.qualified_name.clone()) {
                        plan.helpers.push(HelperSpec::new(
                            related.type_ref(),
                            &identifier.name,
                            key_type,
                        ));
                    }
                }
            }
        }

        plan
    }
}

/// Foreign-key attribute name for a to-one field: `manager` -> `managerId`.
///
/// Names already ending in `Id` are kept as they are.
pub fn foreign_key_name(field: &str) -> String {
    if field.ends_with(FOREIGN_KEY_SUFFIX) {
        field.to_string()
    } else {
        format!("{}{}", field, FOREIGN_KEY_SUFFIX)
    }
}

/// Name of the stub helper for a related type: `Department` -> `mapDepartmentFromId`.
pub fn helper_name(related_type: &str) -> String {
    format!("map{}FromId", capitalize(last_segment(related_type)))
}
