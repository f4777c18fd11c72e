//! Pipeline phase trait.

use eyre::Result;

use super::GenerationContext;

/// Information about a pipeline phase.
#[derive(Debug, Clone)]
pub struct PhaseInfo {
    /// The phase name.
    pub name: &'static str,
    /// A human-readable description.
    pub description: &'static str,
}

/// A phase in the generation pipeline.
///
/// Built-in phases:
/// - `ExtractPhase` - discovers entities and extracts their descriptors
/// - `BuildPhase` - builds the five artifact specs of every extracted entity
///
/// Custom phases run after the built-in ones.
pub trait Phase: Send + Sync {
    /// The name of this phase (used in diagnostics and plugin hooks).
    fn name(&self) -> &'static str;

    /// A human-readable description of what this phase does.
    fn description(&self) -> &'static str;

    /// Run this phase on the generation context.
    ///
    /// # Errors
    ///
    /// Returns an error only if the whole pass must stop. Per-entity
    /// problems are recorded as diagnostics instead.
    fn run(&self, ctx: &mut GenerationContext) -> Result<()>;

    /// Get information about this phase.
    fn info(&self) -> PhaseInfo {
        PhaseInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
