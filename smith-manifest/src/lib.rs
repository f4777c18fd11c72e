// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Parsing and validation for `smith.toml`.
//!
//! The manifest describes the source types the generator scans, the way
//! annotation processing would see them: a name, a package, marker
//! annotations and fields. Deciding which of them are entities is left to
//! the codegen crate.

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    FieldDecl, GeneratorConfig, Manifest, ParseContext, Persistence, ProjectConfig, SmithToml,
    TypeDecl, is_java_keyword,
};
