//! One [`GeneratedFile`](springsmith_core::GeneratedFile) per artifact kind.

mod controller;
mod dto;
mod mapper;
mod repository;
mod service;

use std::path::{Path, PathBuf};

pub use controller::ControllerJava;
pub use dto::DtoJava;
pub use mapper::MapperJava;
pub use repository::RepositoryJava;
pub use service::ServiceJava;
use springsmith_codegen::naming::ArtifactName;
use springsmith_core::namespace_to_path;

/// `<base>/<source_root>/<namespace as path>/<TypeName>.java`
pub(crate) fn source_path(base: &Path, source_root: &str, name: &ArtifactName) -> PathBuf {
    base.join(source_root)
        .join(namespace_to_path(&name.namespace))
        .join(format!("{}.java", name.type_name))
}

/// Message of the exception raised when no record matches `id_param`.
pub(crate) fn not_found_message(entity: &str, id_param: &str) -> String {
    format!("\"{} not found with {} \" + {}", entity, id_param, id_param)
}
