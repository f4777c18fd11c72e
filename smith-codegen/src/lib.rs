//! Entity-to-artifact transformation engine for the springsmith generator.
//!
//! Given entity metadata, this crate derives five layered artifact specs per
//! entity (DTO, mapper, repository, service and controller) following fixed
//! naming, namespace and relation-unwrapping rules. Rendering the specs to
//! source text is the job of an [`sink::ArtifactSink`] such as
//! `springsmith-codegen-java`.
//!
//! # Module Organization
//!
//! - [`extract`] - Entity discovery and metadata extraction
//! - [`relation`] - Field classification and relation unwrapping
//! - [`naming`] - Type names, namespaces and routes
//! - [`spec`] - Declarative artifact specs
//! - [`build`] - The five artifact builders
//! - [`pipeline`] - The generation orchestrator, diagnostics and plugins
//! - [`builder`] - Text building blocks for sinks
//! - [`generation`] - Import tracking and the starter manifest
//! - [`sink`] - The emission boundary
//! - [`testing`] - Test fixtures (feature-gated)

pub mod build;
pub mod builder;
pub mod extract;
pub mod generation;
pub mod naming;
pub mod pipeline;
pub mod relation;
pub mod sink;
pub mod spec;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
