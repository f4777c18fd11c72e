//! Built-in pipeline phases.
//!
//! - [`ExtractPhase`] - discovers entities and extracts their descriptors
//! - [`BuildPhase`] - builds and emits the artifacts of each extracted entity

mod build;
mod extract;

pub use build::BuildPhase;
pub use extract::ExtractPhase;
