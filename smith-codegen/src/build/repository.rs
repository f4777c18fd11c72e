use super::{ArtifactBuilder, BUILD_PHASE, BuildError, BuildInput};
use crate::{
    naming::ArtifactKind,
    pipeline::{Diagnostic, DiagnosticKind},
    spec::{ArtifactSpec, PersistenceContract, RepositorySpec},
};

/// Builds the persistence repository contract.
///
/// Without an identifier the repository is still emitted, degraded, with a
/// single `MissingIdentifier` warning.
pub struct RepositoryBuilder;

impl ArtifactBuilder for RepositoryBuilder {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Repository
    }

    fn build(
        &self,
        input: &BuildInput<'_>,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<ArtifactSpec, BuildError> {
        let entity = input.entity;
        let contract = match entity.identifier_field() {
            Some(identifier) => Some(PersistenceContract {
                entity: entity.type_ref(),
                identifier: identifier.declared_type.boxed(),
            }),
            None => {
                diagnostics.push(
                    Diagnostic::warning(
                        BUILD_PHASE,
                        format!(
                            "no identifier field; {} is generated without a persistence contract",
                            input.naming.repository.type_name
                        ),
                    )
                    .kind(DiagnosticKind::MissingIdentifier)
                    .entity(&entity.simple_name)
                    .at(entity.qualified_name()),
                );
                None
            }
        };

        Ok(ArtifactSpec::Repository(RepositorySpec {
            name: input.naming.repository.clone(),
            entity: entity.type_ref(),
            contract,
        }))
    }
}

#[cfg(test)]
mod tests {
    use springsmith_ir::{EntityDescriptor, FieldDescriptor, TypeRef};

    use super::*;
    use crate::{naming::NamingContext, relation::RelationPlan};

    fn build(entity: &EntityDescriptor, diagnostics: &mut Vec<Diagnostic>) -> RepositorySpec {
        let naming = NamingContext::resolve(entity);
        let spec = RepositoryBuilder
            .build(
                &BuildInput {
                    entity,
                    relations: &RelationPlan::default(),
                    naming: &naming,
                    built: &[],
                },
                diagnostics,
            )
            .unwrap();
        spec.as_repository().cloned().unwrap()
    }

    #[test]
    fn test_contract_boxes_identifier() {
        let entity = EntityDescriptor::new("Account", "bank.model")
            .field(FieldDescriptor::new("number", TypeRef::named("long")))
            .with_identifier("number");
        let mut diagnostics = Vec::new();
        let repository = build(&entity, &mut diagnostics);

        let contract = repository.contract.unwrap();
        assert_eq!(contract.entity.to_string(), "bank.model.Account");
        assert_eq!(contract.identifier, TypeRef::named("Long"));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_missing_identifier_degrades() {
        let entity = EntityDescriptor::new("Note", "app.model")
            .field(FieldDescriptor::new("text", TypeRef::named("String")));
        let mut diagnostics = Vec::new();
        let repository = build(&entity, &mut diagnostics);

        assert!(repository.is_degraded());
        assert_eq!(repository.name.qualified_name(), "app.repositories.NoteRepository");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].is_kind(DiagnosticKind::MissingIdentifier));
        assert!(diagnostics[0].severity.is_warning());
        assert_eq!(diagnostics[0].entity.as_deref(), Some("Note"));
    }
}
