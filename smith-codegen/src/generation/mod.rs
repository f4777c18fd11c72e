//! Output management shared by sinks and the CLI.
//!
//! - [`ImportCollector`] - Import tracking and deduplication
//! - [`ManifestTemplate`] - Starter smith.toml generation

mod imports;
mod manifest_template;

pub use imports::ImportCollector;
pub use manifest_template::ManifestTemplate;
