//! Entity metadata model for the springsmith generator.
//!
//! This crate provides the explicit metadata every later stage consumes.
//! Discovery produces [`EntityDescriptor`] values; nothing downstream looks
//! at raw annotations again.
//!
//! # Architecture
//!
//! ```text
//! smith.toml (TOML) → smith-manifest (parsing) → smith-ir (entities) → codegen
//! ```
//!
//! The model is:
//! - Target-agnostic (no Spring or Java rendering concerns)
//! - Immutable once extracted (builders consume `self`)
//! - Serializable, so pipeline snapshots can dump it as JSON

mod entity;
mod types;

pub use entity::{EntityDescriptor, FieldDescriptor, RelationKind};
pub use types::{TypeParseError, TypeRef};
