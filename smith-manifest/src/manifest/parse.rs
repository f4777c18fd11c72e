//! Manifest parsing from files and strings.

use std::{collections::HashMap, path::Path, str::FromStr};

use super::{Manifest, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "smith.toml")
    }
}

impl Manifest {
    /// Parse a smith.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a smith.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    if manifest.project.name.trim().is_empty() {
        return Err(ctx
            .source_context()
            .validation_error_at("project name cannot be empty", ctx.find_value_span("name", "")));
    }

    if manifest.generator.source_root.trim().is_empty() {
        return Err(ctx.source_context().validation_error_at(
            "source_root cannot be empty",
            ctx.find_value_span("source_root", ""),
        ));
    }

    let mut seen: HashMap<String, usize> = HashMap::new();
    for (index, ty) in manifest.types.iter().enumerate() {
        ctx.validate_name(&ty.name, "type")?;
        ctx.validate_package(&ty.package)?;

        let qualified = ty.qualified_name();
        if let Some(first) = seen.insert(qualified.clone(), index) {
            return Err(ctx.source_context().duplicate_type_error(
                qualified,
                ctx.find_nth_value_span("name", &manifest.types[first].name, 0),
                ctx.find_nth_value_span("name", &ty.name, 1),
            ));
        }

        let type_ctx = ctx.push(&ty.name);
        let mut field_names: Vec<&str> = Vec::new();
        for field in &ty.fields {
            type_ctx.validate_name(&field.name, "field")?;
            if field_names.contains(&field.name.as_str()) {
                return Err(ctx.source_context().duplicate_field_error(
                    &ty.name,
                    &field.name,
                    ctx.find_nth_value_span("name", &field.name, 1),
                ));
            }
            field_names.push(&field.name);
        }
    }
    Ok(())
}
