//! Entities and their fields.

use serde::Serialize;
use springsmith_core::qualify;

use crate::TypeRef;

/// Relation marker carried by a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    /// A plain column.
    #[default]
    None,
    /// Many-to-one or one-to-one.
    ToOne,
    /// One-to-many or many-to-many.
    ToMany,
}

impl RelationKind {
    /// Returns the relation kind as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationKind::None => "none",
            RelationKind::ToOne => "to-one",
            RelationKind::ToMany => "to-many",
        }
    }
}

/// A field of an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub declared_type: TypeRef,
    pub relation: RelationKind,
    pub is_static: bool,
}

impl FieldDescriptor {
    /// A plain, non-static field.
    pub fn new(name: impl Into<String>, declared_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            declared_type,
            relation: RelationKind::None,
            is_static: false,
        }
    }

    /// Set the relation kind.
    pub fn relation(mut self, relation: RelationKind) -> Self {
        self.relation = relation;
        self
    }

    /// Mark the field as static.
    pub fn static_field(mut self) -> Self {
        self.is_static = true;
        self
    }
}

/// A persistent type, as surfaced by metadata discovery.
///
/// Field order is declaration order and drives attribute order in every
/// generated artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityDescriptor {
    pub simple_name: String,
    pub source_namespace: String,
    pub fields: Vec<FieldDescriptor>,
    /// Name of the identifier field, if one was found.
    pub identifier: Option<String>,
}

impl EntityDescriptor {
    pub fn new(simple_name: impl Into<String>, source_namespace: impl Into<String>) -> Self {
        Self {
            simple_name: simple_name.into(),
            source_namespace: source_namespace.into(),
            fields: Vec::new(),
            identifier: None,
        }
    }

    /// Append a field.
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Designate the identifier field by name.
    pub fn with_identifier(mut self, name: impl Into<String>) -> Self {
        self.identifier = Some(name.into());
        self
    }

    /// Fully qualified name, e.g. `com.acme.hr.model.Employee`.
    pub fn qualified_name(&self) -> String {
        qualify(&self.source_namespace, &self.simple_name)
    }

    /// The entity as a type reference.
    pub fn type_ref(&self) -> TypeRef {
        TypeRef::named(self.qualified_name())
    }

    /// Non-static fields in declaration order.
    pub fn instance_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| !f.is_static)
    }

    /// Look up a non-static field by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.instance_fields().find(|f| f.name == name)
    }

    /// The identifier field, if it exists and is not static.
    pub fn identifier_field(&self) -> Option<&FieldDescriptor> {
        self.identifier.as_deref().and_then(|name| self.get_field(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee() -> EntityDescriptor {
        EntityDescriptor::new("Employee", "com.acme.hr.model")
            .field(FieldDescriptor::new("SERIAL", TypeRef::named("long")).static_field())
            .field(FieldDescriptor::new("id", TypeRef::named("Long")))
            .field(FieldDescriptor::new("name", TypeRef::named("String")))
            .field(
                FieldDescriptor::new("manager", TypeRef::named("com.acme.hr.model.Employee"))
                    .relation(RelationKind::ToOne),
            )
            .with_identifier("id")
    }

    #[test]
    fn test_qualified_name() {
        assert_eq!(employee().qualified_name(), "com.acme.hr.model.Employee");
        assert_eq!(EntityDescriptor::new("Tag", "").qualified_name(), "Tag");
    }

    #[test]
    fn test_instance_fields_skip_static() {
        let entity = employee();
        let names: Vec<&str> = entity.instance_fields().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["id", "name", "manager"]);
        assert!(entity.get_field("SERIAL").is_none());
    }

    #[test]
    fn test_identifier_field() {
        let entity = employee();
        assert_eq!(entity.identifier_field().map(|f| f.name.as_str()), Some("id"));

        let without = EntityDescriptor::new("Note", "com.acme");
        assert!(without.identifier_field().is_none());
    }

    #[test]
    fn test_relation_kind_default() {
        let field = FieldDescriptor::new("title", TypeRef::named("String"));
        assert_eq!(field.relation, RelationKind::None);
        assert_eq!(RelationKind::ToMany.as_str(), "to-many");
    }
}
