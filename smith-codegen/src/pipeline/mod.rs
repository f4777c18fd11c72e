//! Generation pipeline.
//!
//! This module provides the [`Pipeline`] orchestrator that takes a manifest
//! from discovered types to emitted artifact specs. The pipeline provides:
//!
//! - Explicit phase boundaries (extract → build)
//! - Plugin hooks for extensibility (before/after each phase)
//! - Unified diagnostics collection, tagged per entity
//! - Per-entity isolation via [`GenerationContext`]
//!
//! # Example
//!
//! ```ignore
//! use springsmith_codegen::pipeline::Pipeline;
//!
//! let ctx = Pipeline::new().run(manifest)?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("{diag}");
//! }
//!
//! let generator = Generator::from_context(&ctx);
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;
mod snapshot;

pub use context::{EntityRecord, EntityStatus, GenerationContext};
pub use diagnostic::{Diagnostic, DiagnosticKind, Severity};
pub use phase::{Phase, PhaseInfo};
pub use plugin::Plugin;
pub use runner::Pipeline;
pub use snapshot::{PhaseSnapshot, SnapshotPlugin};
