//! Name and namespace derivation for generated artifacts.

use std::fmt;

use serde::Serialize;
use springsmith_core::{decapitalize, pluralize, qualify, replace_last_segment};
use springsmith_ir::{EntityDescriptor, TypeRef};
use springsmith_manifest::is_java_keyword;

/// Path parameter used when an entity has no identifier.
pub const DEFAULT_PATH_PARAM: &str = "id";

/// Prefix of every generated route.
pub const ROUTE_PREFIX: &str = "/api/";

/// The five generated layers, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    Dto,
    Mapper,
    Repository,
    Service,
    Controller,
}

impl ArtifactKind {
    /// Every kind in the order artifacts are emitted.
    pub const ALL: [ArtifactKind; 5] = [
        ArtifactKind::Dto,
        ArtifactKind::Mapper,
        ArtifactKind::Repository,
        ArtifactKind::Service,
        ArtifactKind::Controller,
    ];

    /// Suffix appended to the entity name.
    pub fn type_suffix(&self) -> &'static str {
        match self {
            ArtifactKind::Dto => "DTO",
            ArtifactKind::Mapper => "Mapper",
            ArtifactKind::Repository => "Repository",
            ArtifactKind::Service => "Service",
            ArtifactKind::Controller => "Controller",
        }
    }

    /// Namespace segment replacing the last segment of the entity's namespace.
    pub fn namespace_suffix(&self) -> &'static str {
        match self {
            ArtifactKind::Dto => "dtos",
            ArtifactKind::Mapper => "mappers",
            ArtifactKind::Repository => "repositories",
            ArtifactKind::Service => "services",
            ArtifactKind::Controller => "controllers",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Dto => "dto",
            ArtifactKind::Mapper => "mapper",
            ArtifactKind::Repository => "repository",
            ArtifactKind::Service => "service",
            ArtifactKind::Controller => "controller",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generated type name and the namespace it lives in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ArtifactName {
    pub type_name: String,
    pub namespace: String,
}

impl ArtifactName {
    pub fn qualified_name(&self) -> String {
        qualify(&self.namespace, &self.type_name)
    }

    pub fn type_ref(&self) -> TypeRef {
        TypeRef::named(self.qualified_name())
    }

    /// Name used for fields and parameters of this type, e.g. `employeeService`.
    pub fn variable_name(&self) -> String {
        variable_name(&self.type_name)
    }
}

impl fmt::Display for ArtifactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified_name())
    }
}

/// Every name derived from one entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamingContext {
    pub entity: String,
    pub dto: ArtifactName,
    pub mapper: ArtifactName,
    pub repository: ArtifactName,
    pub service: ArtifactName,
    pub controller: ArtifactName,
    /// Plural of the entity name, e.g. `Categories`.
    pub plural: String,
    /// Route base path, e.g. `/api/categories`.
    pub route_base: String,
    pub path_param: String,
}

impl NamingContext {
    /// Derive all names for `entity`. Pure and deterministic.
    pub fn resolve(entity: &EntityDescriptor) -> Self {
        let name = |kind: ArtifactKind| ArtifactName {
            type_name: format!("{}{}", entity.simple_name, kind.type_suffix()),
            namespace: artifact_namespace(&entity.source_namespace, kind),
        };

        Self {
            entity: entity.simple_name.clone(),
            dto: name(ArtifactKind::Dto),
            mapper: name(ArtifactKind::Mapper),
            repository: name(ArtifactKind::Repository),
            service: name(ArtifactKind::Service),
            controller: name(ArtifactKind::Controller),
            plural: pluralize(&entity.simple_name),
            route_base: route_base(&entity.simple_name),
            path_param: entity
                .identifier_field()
                .map_or_else(|| DEFAULT_PATH_PARAM.to_string(), |f| f.name.clone()),
        }
    }

    pub fn get(&self, kind: ArtifactKind) -> &ArtifactName {
        match kind {
            ArtifactKind::Dto => &self.dto,
            ArtifactKind::Mapper => &self.mapper,
            ArtifactKind::Repository => &self.repository,
            ArtifactKind::Service => &self.service,
            ArtifactKind::Controller => &self.controller,
        }
    }

    /// Variable name for an entity instance, e.g. `orderLine`.
    pub fn entity_variable(&self) -> String {
        variable_name(&self.entity)
    }
}

/// Decapitalized type name usable as a Java identifier.
///
/// Names that decapitalize to a reserved word get a trailing underscore,
/// so `Package` becomes `package_`.
pub fn variable_name(type_name: &str) -> String {
    let name = decapitalize(type_name);
    if is_java_keyword(&name) {
        format!("{}_", name)
    } else {
        name
    }
}

/// Namespace for an artifact kind: the entity namespace with its last segment
/// replaced, or the bare suffix when the namespace has no separator.
pub fn artifact_namespace(source_namespace: &str, kind: ArtifactKind) -> String {
    replace_last_segment(source_namespace, kind.namespace_suffix())
}

/// `/api/` followed by the pluralized lowerCamel entity name.
pub fn route_base(entity: &str) -> String {
    format!("{}{}", ROUTE_PREFIX, pluralize(&decapitalize(entity)))
}

#[cfg(test)]
mod tests {
    use springsmith_ir::FieldDescriptor;

    use super::*;

    fn entity(name: &str, namespace: &str) -> EntityDescriptor {
        EntityDescriptor::new(name, namespace)
    }

    #[test]
    fn test_entity_variable_avoids_keywords() {
        for (name, variable) in [
            ("Package", "package_"),
            ("Class", "class_"),
            ("Default", "default_"),
            ("OrderLine", "orderLine"),
        ] {
            let naming = NamingContext::resolve(&entity(name, "app.model"));
            assert_eq!(naming.entity_variable(), variable);
        }
        assert_eq!(variable_name("Interface"), "interface_");
    }

    #[test]
    fn test_type_names() {
        let naming = NamingContext::resolve(&entity("Invoice", "com.acme.billing.model"));
        assert_eq!(naming.dto.type_name, "InvoiceDTO");
        assert_eq!(naming.mapper.type_name, "InvoiceMapper");
        assert_eq!(naming.repository.type_name, "InvoiceRepository");
        assert_eq!(naming.service.type_name, "InvoiceService");
        assert_eq!(naming.controller.type_name, "InvoiceController");
    }

    #[test]
    fn test_namespaces_are_siblings() {
        let naming = NamingContext::resolve(&entity("Invoice", "com.acme.billing.model"));
        for kind in ArtifactKind::ALL {
            assert_eq!(
                naming.get(kind).namespace,
                format!("com.acme.billing.{}", kind.namespace_suffix())
            );
        }
        assert_eq!(
            naming.service.qualified_name(),
            "com.acme.billing.services.InvoiceService"
        );
    }

    #[test]
    fn test_namespace_without_separator_collapses() {
        assert_eq!(artifact_namespace("model", ArtifactKind::Dto), "dtos");
        assert_eq!(artifact_namespace("", ArtifactKind::Controller), "controllers");
    }

    #[test]
    fn test_route_base() {
        assert_eq!(route_base("Invoice"), "/api/invoices");
        assert_eq!(route_base("Category"), "/api/categories");
        assert_eq!(route_base("Bus"), "/api/buses");
        assert_eq!(route_base("Child"), "/api/childs");
        assert_eq!(route_base("OrderLine"), "/api/orderLines");
    }

    #[test]
    fn test_path_param() {
        let without = NamingContext::resolve(&entity("Note", "app.model"));
        assert_eq!(without.path_param, "id");

        let with = NamingContext::resolve(
            &entity("Country", "app.model")
                .field(FieldDescriptor::new("isoCode", TypeRef::named("String")))
                .with_identifier("isoCode"),
        );
        assert_eq!(with.path_param, "isoCode");
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let e = entity("Category", "shop.domain");
        assert_eq!(NamingContext::resolve(&e), NamingContext::resolve(&e));
    }

    #[test]
    fn test_variables() {
        let naming = NamingContext::resolve(&entity("OrderLine", "shop.domain"));
        assert_eq!(naming.entity_variable(), "orderLine");
        assert_eq!(naming.repository.variable_name(), "orderLineRepository");
        assert_eq!(naming.plural, "OrderLines");
    }
}
