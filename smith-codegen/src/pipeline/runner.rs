//! Pipeline orchestrator.

use eyre::Result;
use springsmith_manifest::Manifest;

use super::{
    GenerationContext, Phase, Plugin,
    phases::{BuildPhase, ExtractPhase},
};
use crate::build::ArtifactBuilder;

/// The generation orchestrator.
///
/// Runs the built-in phases (extract, build) followed by any user phases,
/// calling plugin hooks before and after each phase. Per-entity failures
/// become diagnostics; only plugin or phase errors stop the pass.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new().plugin(SnapshotPlugin::new());
/// let ctx = pipeline.run(manifest)?;
///
/// for entity in ctx.emitted() {
///     println!("{}: {} artifacts", entity.name, entity.artifacts.len());
/// }
/// ```
pub struct Pipeline {
    build: BuildPhase,
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    /// Create a new pipeline with the default builders.
    pub fn new() -> Self {
        Self {
            build: BuildPhase::new(),
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Replace the artifact builders run for every entity.
    pub fn builders(mut self, builders: Vec<Box<dyn ArtifactBuilder>>) -> Self {
        self.build = BuildPhase::with_builders(builders);
        self
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Run the pipeline on a manifest.
    ///
    /// # Errors
    ///
    /// Returns an error if a phase or plugin fails fatally.
    pub fn run(&self, manifest: Manifest) -> Result<GenerationContext> {
        let mut ctx = GenerationContext::new(manifest);

        // Built-in phases in execution order, then user phases
        self.run_phase(&ExtractPhase, &mut ctx)?;
        self.run_phase(&self.build, &mut ctx)?;
        for phase in &self.phases {
            self.run_phase(phase.as_ref(), &mut ctx)?;
        }

        tracing::info!(
            emitted = ctx.emitted().count(),
            failed = ctx.failed().count(),
            warnings = ctx.warning_count(),
            "generation finished"
        );
        Ok(ctx)
    }

    /// Run a single phase with plugin hooks.
    fn run_phase(&self, phase: &dyn Phase, ctx: &mut GenerationContext) -> Result<()> {
        let phase_name = phase.name();
        tracing::debug!(phase = phase_name, "{}", phase.description());

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;
    use crate::{
        build::{BuildError, BuildInput, default_builders},
        naming::ArtifactKind,
        pipeline::{Diagnostic, DiagnosticKind, EntityStatus},
        spec::ArtifactSpec,
        testing,
    };

    struct CountingPlugin {
        before_count: Arc<AtomicUsize>,
        after_count: Arc<AtomicUsize>,
    }

    impl CountingPlugin {
        fn new() -> (Self, Arc<AtomicUsize>, Arc<AtomicUsize>) {
            let before = Arc::new(AtomicUsize::new(0));
            let after = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    before_count: before.clone(),
                    after_count: after.clone(),
                },
                before,
                after,
            )
        }
    }

    impl Plugin for CountingPlugin {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn on_before_phase(&self, _phase: &str, _ctx: &mut GenerationContext) -> Result<()> {
            self.before_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn on_after_phase(&self, _phase: &str, _ctx: &mut GenerationContext) -> Result<()> {
            self.after_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    /// Fails for one entity, defers to the real builder for the rest.
    struct FailFor(&'static str, Box<dyn ArtifactBuilder>);

    impl ArtifactBuilder for FailFor {
        fn kind(&self) -> ArtifactKind {
            self.1.kind()
        }

        fn build(
            &self,
            input: &BuildInput<'_>,
            diagnostics: &mut Vec<Diagnostic>,
        ) -> std::result::Result<ArtifactSpec, BuildError> {
            if input.entity.simple_name == self.0 {
                return Err(BuildError::MissingDependency {
                    needed: ArtifactKind::Mapper,
                });
            }
            self.1.build(input, diagnostics)
        }
    }

    #[test]
    fn test_pipeline_runs_phases() {
        let ctx = Pipeline::new()
            .run(testing::hr_manifest())
            .expect("pipeline should succeed");

        assert!(ctx.index.is_some());
        assert_eq!(ctx.emitted().count(), 2);
        assert!(!ctx.has_errors());
    }

    #[test]
    fn test_pipeline_plugin_hooks() {
        let (plugin, before_count, after_count) = CountingPlugin::new();

        let pipeline = Pipeline::new().plugin(plugin);
        let _ = pipeline
            .run(testing::hr_manifest())
            .expect("pipeline should succeed");

        // 2 built-in phases = 2 before + 2 after hooks
        assert_eq!(before_count.load(Ordering::SeqCst), 2);
        assert_eq!(after_count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_extraction_failure_is_isolated() {
        let ctx = Pipeline::new()
            .run(testing::batch_with_broken_middle())
            .expect("pipeline should succeed");

        let statuses: Vec<(&str, EntityStatus, usize)> = ctx
            .entities
            .iter()
            .map(|e| (e.name.as_str(), e.status, e.artifacts.len()))
            .collect();
        assert_eq!(
            statuses,
            vec![
                ("Alpha", EntityStatus::Emitted, 5),
                ("Beta", EntityStatus::Failed, 0),
                ("Gamma", EntityStatus::Emitted, 5),
            ]
        );

        let failures: Vec<&Diagnostic> = ctx
            .errors()
            .filter(|d| d.is_kind(DiagnosticKind::EntityBuildFailure))
            .collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].entity.as_deref(), Some("Beta"));
    }

    #[test]
    fn test_build_failure_is_atomic() {
        let builders = default_builders()
            .into_iter()
            .map(|b| {
                if b.kind() == ArtifactKind::Service {
                    Box::new(FailFor("Department", b)) as Box<dyn ArtifactBuilder>
                } else {
                    b
                }
            })
            .collect();

        let ctx = Pipeline::new()
            .builders(builders)
            .run(testing::hr_manifest())
            .expect("pipeline should succeed");

        let department = ctx
            .entities
            .iter()
            .find(|e| e.name == "Department")
            .unwrap();
        assert_eq!(department.status, EntityStatus::Failed);
        assert!(department.artifacts.is_empty());

        let employee = ctx.entities.iter().find(|e| e.name == "Employee").unwrap();
        assert_eq!(employee.status, EntityStatus::Emitted);
        assert_eq!(employee.artifacts.len(), 5);
        assert_eq!(ctx.error_count(), 1);
        assert_eq!(ctx.for_entity("Department").count(), 1);
    }

    #[test]
    fn test_missing_identifier_warns_once() {
        let ctx = Pipeline::new()
            .run(testing::note_manifest())
            .expect("pipeline should succeed");

        let note = &ctx.entities[0];
        assert_eq!(note.status, EntityStatus::Emitted);
        assert_eq!(note.artifacts.len(), 5);
        assert!(note.artifacts[2].spec.as_repository().unwrap().is_degraded());

        let warnings: Vec<&Diagnostic> = ctx.warnings().collect();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].is_kind(DiagnosticKind::MissingIdentifier));
        assert!(!ctx.has_errors());
    }
}
