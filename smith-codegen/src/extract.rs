//! Metadata discovery and extraction.
//!
//! Turns raw `[[types]]` declarations into [`EntityDescriptor`]s. Markers are
//! recognised bare (`Entity`) or qualified in either persistence namespace
//! (`javax.persistence.Entity`, `jakarta.persistence.Entity`).

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::Serialize;
use springsmith_core::{last_segment, qualify, strip_last_segment};
use springsmith_ir::{EntityDescriptor, FieldDescriptor, RelationKind, TypeParseError, TypeRef};
use springsmith_manifest::{FieldDecl, Manifest, TypeDecl};

/// Packages whose annotations count as persistence markers.
pub const PERSISTENCE_PACKAGES: &[&str] = &["javax.persistence", "jakarta.persistence"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Entity,
    Id,
    ToOne,
    ToMany,
}

fn marker(annotation: &str) -> Option<Marker> {
    let annotation = annotation.trim_start_matches('@');
    let simple = match strip_last_segment(annotation) {
        None => annotation,
        Some(package) if PERSISTENCE_PACKAGES.contains(&package) => last_segment(annotation),
        Some(_) => return None,
    };
    match simple {
        "Entity" => Some(Marker::Entity),
        "Id" => Some(Marker::Id),
        "ManyToOne" | "OneToOne" => Some(Marker::ToOne),
        "OneToMany" | "ManyToMany" => Some(Marker::ToMany),
        _ => None,
    }
}

fn has_marker(annotations: &[String], wanted: Marker) -> bool {
    annotations.iter().any(|a| marker(a) == Some(wanted))
}

/// Whether a declared type carries an entity marker.
pub fn is_entity(decl: &TypeDecl) -> bool {
    has_marker(&decl.annotations, Marker::Entity)
}

/// Entity declarations in declaration order, each discovered once.
pub fn discover(manifest: &Manifest) -> Vec<&TypeDecl> {
    let mut seen = HashSet::new();
    manifest
        .types
        .iter()
        .filter(|decl| is_entity(decl))
        .filter(|decl| seen.insert(decl.qualified_name()))
        .collect()
}

/// Error produced when a declaration cannot become an entity descriptor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    #[error("field '{field}' has an invalid type: {source}")]
    InvalidType {
        field: String,
        #[source]
        source: TypeParseError,
    },

    #[error("field '{field}' carries conflicting relation markers '{first}' and '{second}'")]
    ConflictingRelations {
        field: String,
        first: String,
        second: String,
    },

    #[error("fields '{first}' and '{second}' are both marked as identifier")]
    MultipleIdentifiers { first: String, second: String },

    #[error("static field '{field}' cannot be the identifier")]
    StaticIdentifier { field: String },
}

/// Identifier of a known type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identifier {
    pub name: String,
    pub ty: TypeRef,
}

/// A type a relation can point at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedType {
    pub qualified_name: String,
    pub identifier: Option<Identifier>,
}

impl RelatedType {
    pub fn simple_name(&self) -> &str {
        last_segment(&self.qualified_name)
    }

    pub fn type_ref(&self) -> TypeRef {
        TypeRef::named(&self.qualified_name)
    }
}

/// Read-only lookup of relation targets.
pub trait RelatedTypes {
    /// Resolve a declared type, as written inside `namespace`, to a known type.
    fn resolve(&self, ty: &TypeRef, namespace: &str) -> Option<RelatedType>;
}

/// Every declared type with its identifier, keyed by qualified name.
#[derive(Debug, Clone, Default)]
pub struct TypeIndex {
    types: IndexMap<String, RelatedType>,
}

impl TypeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index all declared types, entities or not.
    pub fn from_manifest(manifest: &Manifest) -> Self {
        let mut index = Self::new();
        for decl in &manifest.types {
            index
                .types
                .entry(decl.qualified_name())
                .or_insert_with(|| RelatedType {
                    qualified_name: decl.qualified_name(),
                    identifier: None,
                });
        }
        for decl in &manifest.types {
            let identifier = decl
                .fields
                .iter()
                .filter(|f| !f.is_static())
                .find(|f| has_marker(&f.annotations, Marker::Id))
                .and_then(|f| index.identifier_of(f, &decl.package));
            if let Some(known) = index.types.get_mut(&decl.qualified_name()) {
                if known.identifier.is_none() {
                    known.identifier = identifier;
                }
            }
        }
        index
    }

    /// Register a type by hand.
    pub fn insert(&mut self, qualified_name: impl Into<String>, identifier: Option<Identifier>) {
        let qualified_name = qualified_name.into();
        self.types.insert(
            qualified_name.clone(),
            RelatedType {
                qualified_name,
                identifier,
            },
        );
    }

    pub fn get(&self, qualified_name: &str) -> Option<&RelatedType> {
        self.types.get(qualified_name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Resolve a written name to a declared qualified name.
    ///
    /// Qualified names must match exactly. Simple names are tried in
    /// `namespace` first, then against a unique simple-name match.
    pub fn lookup_name(&self, name: &str, namespace: &str) -> Option<&str> {
        if let Some((key, _)) = self.types.get_key_value(name) {
            return Some(key.as_str());
        }
        if name.contains('.') {
            return None;
        }
        let local = qualify(namespace, name);
        if let Some((key, _)) = self.types.get_key_value(&local) {
            return Some(key.as_str());
        }
        let mut candidates = self
            .types
            .keys()
            .filter(|key| last_segment(key) == name);
        match (candidates.next(), candidates.next()) {
            (Some(only), None) => Some(only.as_str()),
            _ => None,
        }
    }

    /// Qualify every declared type named in `ty`.
    pub fn qualify_type(&self, ty: &TypeRef, namespace: &str) -> TypeRef {
        ty.map_names(&|name| {
            self.lookup_name(name, namespace)
                .filter(|qualified| *qualified != name)
                .map(str::to_string)
        })
    }

    fn identifier_of(&self, field: &FieldDecl, namespace: &str) -> Option<Identifier> {
        let ty = TypeRef::parse(&field.ty).ok()?;
        Some(Identifier {
            name: field.name.clone(),
            ty: self.qualify_type(&ty, namespace),
        })
    }
}

impl RelatedTypes for TypeIndex {
    fn resolve(&self, ty: &TypeRef, namespace: &str) -> Option<RelatedType> {
        let qualified = self.lookup_name(ty.name(), namespace)?;
        self.types.get(qualified).cloned()
    }
}

/// Normalizes raw declarations into entity descriptors.
pub struct MetadataExtractor<'a> {
    index: &'a TypeIndex,
}

impl<'a> MetadataExtractor<'a> {
    pub fn new(index: &'a TypeIndex) -> Self {
        Self { index }
    }

    /// Extract one entity. Pure: the index is only read.
    pub fn extract(&self, decl: &TypeDecl) -> Result<EntityDescriptor, ExtractError> {
        let mut entity = EntityDescriptor::new(&decl.name, &decl.package);
        let mut identifier: Option<&str> = None;

        for field in &decl.fields {
            let relations: Vec<(Marker, &str)> = field
                .annotations
                .iter()
                .filter_map(|a| marker(a).map(|m| (m, a.as_str())))
                .filter(|(m, _)| matches!(m, Marker::ToOne | Marker::ToMany))
                .collect();
            if let [(_, first), (_, second), ..] = relations.as_slice() {
                return Err(ExtractError::ConflictingRelations {
                    field: field.name.clone(),
                    first: first.to_string(),
                    second: second.to_string(),
                });
            }

            if has_marker(&field.annotations, Marker::Id) {
                if field.is_static() {
                    return Err(ExtractError::StaticIdentifier {
                        field: field.name.clone(),
                    });
                }
                if let Some(first) = identifier {
                    return Err(ExtractError::MultipleIdentifiers {
                        first: first.to_string(),
                        second: field.name.clone(),
                    });
                }
                identifier = Some(&field.name);
            }

            let declared = TypeRef::parse(&field.ty).map_err(|source| ExtractError::InvalidType {
                field: field.name.clone(),
                source,
            })?;
            let relation = match relations.first() {
                Some((Marker::ToOne, _)) => RelationKind::ToOne,
                Some((Marker::ToMany, _)) => RelationKind::ToMany,
                _ => RelationKind::None,
            };

            let mut descriptor =
                FieldDescriptor::new(&field.name, self.index.qualify_type(&declared, &decl.package))
                    .relation(relation);
            if field.is_static() {
                descriptor = descriptor.static_field();
            }
            entity = entity.field(descriptor);
        }

        if let Some(name) = identifier {
            entity = entity.with_identifier(name);
        }
        Ok(entity)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn manifest(types: &str) -> Manifest {
        let src = format!("[project]\nname = \"test\"\n\n{}", types);
        Manifest::from_str(&src).expect("Failed to parse test manifest")
    }

    fn hr_manifest() -> Manifest {
        manifest(
            r#"
            [[types]]
            name = "Employee"
            package = "com.acme.hr.model"
            annotations = ["javax.persistence.Entity", "jakarta.persistence.Entity"]

            [[types.fields]]
            name = "serialVersionUID"
            type = "long"
            modifiers = ["static"]

            [[types.fields]]
            name = "id"
            type = "Long"
            annotations = ["Id"]

            [[types.fields]]
            name = "department"
            type = "Department"
            annotations = ["jakarta.persistence.ManyToOne"]

            [[types.fields]]
            name = "tasks"
            type = "java.util.List<Task>"
            annotations = ["@OneToMany"]

            [[types]]
            name = "Department"
            package = "com.acme.hr.model"
            annotations = ["Entity"]

            [[types.fields]]
            name = "code"
            type = "String"
            annotations = ["javax.persistence.Id"]

            [[types]]
            name = "Task"
            package = "com.acme.work"

            [[types]]
            name = "Audit"
            package = "com.acme.hr.model"
            annotations = ["org.example.Entity"]
            "#,
        )
    }

    #[test]
    fn test_marker_namespaces() {
        assert_eq!(marker("Entity"), Some(Marker::Entity));
        assert_eq!(marker("@jakarta.persistence.Id"), Some(Marker::Id));
        assert_eq!(marker("javax.persistence.OneToOne"), Some(Marker::ToOne));
        assert_eq!(marker("ManyToMany"), Some(Marker::ToMany));
        assert_eq!(marker("org.example.Entity"), None);
        assert_eq!(marker("Column"), None);
    }

    #[test]
    fn test_discover_entities_once() {
        let manifest = hr_manifest();
        let names: Vec<String> = discover(&manifest)
            .iter()
            .map(|d| d.qualified_name())
            .collect();
        assert_eq!(
            names,
            vec!["com.acme.hr.model.Employee", "com.acme.hr.model.Department"]
        );
    }

    #[test]
    fn test_index_identifiers() {
        let index = TypeIndex::from_manifest(&hr_manifest());
        let department = index.get("com.acme.hr.model.Department").unwrap();
        let identifier = department.identifier.as_ref().unwrap();
        assert_eq!(identifier.name, "code");
        assert_eq!(identifier.ty, TypeRef::named("String"));
        assert!(index.get("com.acme.work.Task").unwrap().identifier.is_none());
    }

    #[test]
    fn test_lookup_name() {
        let index = TypeIndex::from_manifest(&hr_manifest());
        assert_eq!(
            index.lookup_name("Department", "com.acme.hr.model"),
            Some("com.acme.hr.model.Department")
        );
        assert_eq!(
            index.lookup_name("Task", "com.acme.hr.model"),
            Some("com.acme.work.Task")
        );
        assert_eq!(index.lookup_name("String", "com.acme.hr.model"), None);
        assert_eq!(index.lookup_name("com.other.Department", "com.acme"), None);
    }

    #[test]
    fn test_lookup_ambiguous_simple_name() {
        let mut index = TypeIndex::new();
        index.insert("com.a.Tag", None);
        index.insert("com.b.Tag", None);
        assert_eq!(index.lookup_name("Tag", "com.c"), None);
        assert_eq!(index.lookup_name("Tag", "com.b"), Some("com.b.Tag"));
    }

    #[test]
    fn test_extract_employee() {
        let manifest = hr_manifest();
        let index = TypeIndex::from_manifest(&manifest);
        let entity = MetadataExtractor::new(&index)
            .extract(&manifest.types[0])
            .unwrap();

        assert_eq!(entity.simple_name, "Employee");
        assert_eq!(entity.source_namespace, "com.acme.hr.model");
        assert_eq!(entity.identifier.as_deref(), Some("id"));
        assert_eq!(entity.fields.len(), 4);
        assert!(entity.fields[0].is_static);

        let department = entity.get_field("department").unwrap();
        assert_eq!(department.relation, RelationKind::ToOne);
        assert_eq!(
            department.declared_type.name(),
            "com.acme.hr.model.Department"
        );

        let tasks = entity.get_field("tasks").unwrap();
        assert_eq!(tasks.relation, RelationKind::ToMany);
        assert_eq!(
            tasks.declared_type.to_string(),
            "java.util.List<com.acme.work.Task>"
        );
    }

    #[test]
    fn test_extract_rejects_conflicting_relations() {
        let manifest = manifest(
            r#"
            [[types]]
            name = "Seat"
            annotations = ["Entity"]

            [[types.fields]]
            name = "owner"
            type = "Person"
            annotations = ["ManyToOne", "OneToMany"]
            "#,
        );
        let index = TypeIndex::from_manifest(&manifest);
        let err = MetadataExtractor::new(&index)
            .extract(&manifest.types[0])
            .unwrap_err();
        assert!(matches!(err, ExtractError::ConflictingRelations { .. }));
    }

    #[test]
    fn test_extract_rejects_invalid_type() {
        let manifest = manifest(
            r#"
            [[types]]
            name = "Seat"
            annotations = ["Entity"]

            [[types.fields]]
            name = "row"
            type = "List<"
            "#,
        );
        let index = TypeIndex::from_manifest(&manifest);
        let err = MetadataExtractor::new(&index)
            .extract(&manifest.types[0])
            .unwrap_err();
        assert!(matches!(err, ExtractError::InvalidType { ref field, .. } if field == "row"));
    }

    #[test]
    fn test_extract_rejects_multiple_identifiers() {
        let manifest = manifest(
            r#"
            [[types]]
            name = "Seat"
            annotations = ["Entity"]

            [[types.fields]]
            name = "id"
            type = "Long"
            annotations = ["Id"]

            [[types.fields]]
            name = "code"
            type = "String"
            annotations = ["Id"]
            "#,
        );
        let index = TypeIndex::from_manifest(&manifest);
        let err = MetadataExtractor::new(&index)
            .extract(&manifest.types[0])
            .unwrap_err();
        assert_eq!(
            err,
            ExtractError::MultipleIdentifiers {
                first: "id".to_string(),
                second: "code".to_string(),
            }
        );
    }

    #[test]
    fn test_extract_without_identifier() {
        let manifest = manifest(
            r#"
            [[types]]
            name = "Note"
            annotations = ["Entity"]

            [[types.fields]]
            name = "text"
            type = "String"
            "#,
        );
        let index = TypeIndex::from_manifest(&manifest);
        let entity = MetadataExtractor::new(&index)
            .extract(&manifest.types[0])
            .unwrap();
        assert!(entity.identifier.is_none());
        assert_eq!(entity.source_namespace, "");
    }
}
