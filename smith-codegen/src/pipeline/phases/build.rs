//! Build phase - runs the artifact builders once per extracted entity.

use eyre::Result;
use tracing::{debug, info_span, warn};

use crate::{
    build::{ArtifactBuilder, build_entity, default_builders},
    extract::TypeIndex,
    pipeline::{Diagnostic, DiagnosticKind, EntityStatus, GenerationContext, Phase},
};

/// Phase that builds all artifacts of each extracted entity.
///
/// Entities are independent: each gets its own relation plan and helper set,
/// and a failure only marks that entity as failed.
pub struct BuildPhase {
    builders: Vec<Box<dyn ArtifactBuilder>>,
}

impl BuildPhase {
    /// Create a build phase with the five default builders.
    pub fn new() -> Self {
        Self::with_builders(default_builders())
    }

    pub fn with_builders(builders: Vec<Box<dyn ArtifactBuilder>>) -> Self {
        Self { builders }
    }
}

impl Default for BuildPhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for BuildPhase {
    fn name(&self) -> &'static str {
        "build"
    }

    fn description(&self) -> &'static str {
        "Build DTO, mapper, repository, service and controller specs"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let index = match ctx.index.take() {
            Some(index) => index,
            None => TypeIndex::from_manifest(&ctx.manifest),
        };

        let mut diagnostics = Vec::new();
        for record in ctx
            .entities
            .iter_mut()
            .filter(|e| e.status == EntityStatus::Extracted)
        {
            let Some(entity) = record.descriptor.as_ref() else {
                continue;
            };
            let _span = info_span!("entity", name = %record.qualified_name).entered();

            let mut local = Vec::new();
            match build_entity(entity, &index, &self.builders, &mut local) {
                Ok(artifacts) => {
                    debug!(artifacts = artifacts.len(), "emitted");
                    record.artifacts = artifacts;
                    record.status = EntityStatus::Emitted;
                }
                Err(err) => {
                    warn!(error = %err, "build failed");
                    local.push(
                        Diagnostic::error(self.name(), format!("cannot build artifacts: {}", err))
                            .kind(DiagnosticKind::EntityBuildFailure)
                            .entity(&record.name)
                            .at(&record.qualified_name),
                    );
                    record.status = EntityStatus::Failed;
                }
            }
            for diagnostic in local.iter().filter(|d| d.severity.is_warning()) {
                warn!("{}", diagnostic.message);
            }
            diagnostics.extend(local);
        }

        ctx.diagnostics.extend(diagnostics);
        ctx.index = Some(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{naming::ArtifactKind, pipeline::phases::ExtractPhase, testing};

    #[test]
    fn test_build_phase_emits_all_artifacts() {
        let mut ctx = GenerationContext::new(testing::hr_manifest());
        ExtractPhase.run(&mut ctx).unwrap();
        BuildPhase::new().run(&mut ctx).unwrap();

        for record in &ctx.entities {
            assert_eq!(record.status, EntityStatus::Emitted);
            let kinds: Vec<ArtifactKind> = record.artifacts.iter().map(|a| a.spec.kind()).collect();
            assert_eq!(kinds, ArtifactKind::ALL.to_vec());
        }
        assert!(ctx.index.is_some());
    }

    #[test]
    fn test_build_phase_without_extract_skips_everything() {
        let mut ctx = GenerationContext::new(testing::hr_manifest());
        BuildPhase::new().run(&mut ctx).unwrap();

        assert!(ctx.entities.is_empty());
        assert!(ctx.diagnostics.is_empty());
    }

    #[test]
    fn test_build_phase_without_builders() {
        let mut ctx = GenerationContext::new(testing::hr_manifest());
        ExtractPhase.run(&mut ctx).unwrap();
        BuildPhase::with_builders(Vec::new()).run(&mut ctx).unwrap();

        assert!(ctx.entities.iter().all(|e| e.artifacts.is_empty()));
    }
}
