//! Core utilities and types for the springsmith generator.
//!
//! This crate provides the string helpers every naming rule is built on and
//! the file-writing primitives used by artifact sinks.

mod file;
mod utils;

// File operations
pub use file::{File, FileRules, GENERATED_HEADER, GeneratedFile, Overwrite, WriteResult};
// String utilities
pub use utils::{
    capitalize, decapitalize, is_qualified, last_segment, namespace_to_path, pluralize,
    qualify, replace_last_segment, strip_last_segment,
};
