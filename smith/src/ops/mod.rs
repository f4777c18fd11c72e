//! Core operations.
//!
//! This module contains the business logic for smith commands,
//! separated from CLI argument parsing and output rendering.

pub mod bake;
pub mod check;
pub mod list;

pub use bake::bake;
pub use check::check;
pub use list::list;
