//! Pipeline plugin trait for extensibility.

use eyre::Result;

use super::GenerationContext;

/// A plugin that can hook into the generation pipeline.
///
/// Plugins receive callbacks before and after each phase runs.
///
/// # Example
///
/// ```ignore
/// struct CountPlugin(AtomicUsize);
///
/// impl Plugin for CountPlugin {
///     fn name(&self) -> &'static str { "count" }
///
///     fn on_after_phase(&self, _phase: &str, ctx: &mut GenerationContext) -> Result<()> {
///         self.0.store(ctx.emitted().count(), Ordering::SeqCst);
///         Ok(())
///     }
/// }
/// ```
pub trait Plugin: Send + Sync {
    /// The name of this plugin (for debugging and logging).
    fn name(&self) -> &'static str;

    /// Called before a phase runs. Return an error to abort the pipeline.
    #[allow(unused_variables)]
    fn on_before_phase(&self, phase: &str, ctx: &mut GenerationContext) -> Result<()> {
        Ok(())
    }

    /// Called after a phase completes. Return an error to abort the pipeline.
    #[allow(unused_variables)]
    fn on_after_phase(&self, phase: &str, ctx: &mut GenerationContext) -> Result<()> {
        Ok(())
    }
}
