//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod bake;
mod check;
mod list;
mod output;

pub use bake::{BakeReport, GenerationResult, PreviewResult, WrittenResult};
pub use check::CheckReport;
pub use list::{EntityListing, ListReport, RouteListing};
#[cfg(test)]
pub use output::BufferOutput;
pub use output::{Report, TerminalOutput};
