//! Java sink for springsmith.
//!
//! Renders the artifact specs of a generation pass as Spring Boot sources:
//! Jackson DTOs, MapStruct mappers, Spring Data JPA repositories, services
//! and REST controllers, one `.java` file per artifact.

mod generator;
mod java_file;

pub mod files;

pub use generator::Generator;
pub use java_file::JavaFile;
pub use springsmith_codegen::sink::{ArtifactSink, GenerateResult, PreviewFile};
