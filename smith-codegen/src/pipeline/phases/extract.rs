//! Extract phase - discovers entities and normalizes their metadata.

use eyre::Result;
use tracing::{debug, warn};

use crate::{
    extract::{MetadataExtractor, TypeIndex, discover},
    pipeline::{Diagnostic, DiagnosticKind, EntityRecord, EntityStatus, GenerationContext, Phase},
};

/// Phase that turns declared entity types into entity descriptors.
///
/// An entity that cannot be extracted is marked failed and reported as an
/// `EntityBuildFailure`; the others carry on.
pub struct ExtractPhase;

impl Phase for ExtractPhase {
    fn name(&self) -> &'static str {
        "extract"
    }

    fn description(&self) -> &'static str {
        "Discover entities and extract their descriptors"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let index = TypeIndex::from_manifest(&ctx.manifest);
        let extractor = MetadataExtractor::new(&index);

        let mut entities = Vec::new();
        let mut diagnostics = Vec::new();
        for decl in discover(&ctx.manifest) {
            let mut record = EntityRecord::discovered(&decl.name, decl.qualified_name());
            match extractor.extract(decl) {
                Ok(descriptor) => {
                    debug!(entity = %record.qualified_name, fields = descriptor.fields.len(), "extracted");
                    record.descriptor = Some(descriptor);
                    record.status = EntityStatus::Extracted;
                }
                Err(err) => {
                    warn!(entity = %record.qualified_name, error = %err, "extraction failed");
                    diagnostics.push(
                        Diagnostic::error(self.name(), format!("cannot extract entity: {}", err))
                            .kind(DiagnosticKind::EntityBuildFailure)
                            .entity(&record.name)
                            .at(&record.qualified_name),
                    );
                    record.status = EntityStatus::Failed;
                }
            }
            entities.push(record);
        }

        debug!(types = index.len(), entities = entities.len(), "discovery finished");
        ctx.entities = entities;
        ctx.diagnostics.extend(diagnostics);
        ctx.index = Some(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn test_extract_phase() {
        let mut ctx = GenerationContext::new(testing::hr_manifest());
        ExtractPhase.run(&mut ctx).unwrap();

        let names: Vec<&str> = ctx.entities.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Employee", "Department"]);
        assert!(ctx
            .entities
            .iter()
            .all(|e| e.status == EntityStatus::Extracted && e.descriptor.is_some()));
        assert!(ctx.diagnostics.is_empty());
    }

    #[test]
    fn test_extract_phase_records_failure() {
        let mut ctx = GenerationContext::new(testing::batch_with_broken_middle());
        ExtractPhase.run(&mut ctx).unwrap();

        assert_eq!(ctx.entities[1].status, EntityStatus::Failed);
        assert!(ctx.entities[1].descriptor.is_none());
        assert_eq!(ctx.error_count(), 1);
        let error = ctx.errors().next().unwrap();
        assert_eq!(error.phase, "extract");
        assert!(error.message.contains("conflicting relation markers"));
    }
}
