use std::path::Path;

use eyre::Result;
use springsmith_codegen::{
    pipeline::GenerationContext,
    sink::{ArtifactSink, GenerateResult, PreviewFile},
    spec::{ArtifactSpec, EmittedArtifact},
};
use springsmith_core::{GeneratedFile, WriteResult};
use springsmith_manifest::Persistence;

use crate::files::{ControllerJava, DtoJava, MapperJava, RepositoryJava, ServiceJava};

/// Java code generator that renders Spring Boot sources
pub struct Generator<'a> {
    artifacts: Vec<&'a EmittedArtifact>,
    persistence: Persistence,
    source_root: &'a str,
}

impl ArtifactSink for Generator<'_> {
    fn target(&self) -> &'static str {
        "java-spring"
    }

    fn file_extension(&self) -> &'static str {
        "java"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        self.files()
            .into_iter()
            .map(|file| PreviewFile {
                path: relative_path(file.as_ref()),
                content: file.content(),
            })
            .collect()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();

        for file in self.files() {
            let path = relative_path(file.as_ref());
            match file.write(output_dir)? {
                WriteResult::Written => {
                    tracing::debug!(%path, "wrote file");
                    result.written.push(path);
                }
                WriteResult::Unchanged | WriteResult::Skipped => {
                    tracing::trace!(%path, "file up to date");
                    result.unchanged.push(path);
                }
            }
        }

        tracing::info!(
            written = result.written.len(),
            unchanged = result.unchanged.len(),
            "java sources generated"
        );
        Ok(result)
    }
}

impl<'a> Generator<'a> {
    pub fn new(
        artifacts: impl IntoIterator<Item = &'a EmittedArtifact>,
        persistence: Persistence,
        source_root: &'a str,
    ) -> Self {
        Self {
            artifacts: artifacts.into_iter().collect(),
            persistence,
            source_root,
        }
    }

    /// Render everything a finished generation pass emitted, using the
    /// manifest's generator settings.
    pub fn from_context(ctx: &'a GenerationContext) -> Self {
        Self::new(
            ctx.artifacts(),
            ctx.persistence(),
            &ctx.manifest.generator.source_root,
        )
    }

    fn files(&self) -> Vec<Box<dyn GeneratedFile + 'a>> {
        let root = self.source_root;
        self.artifacts
            .iter()
            .copied()
            .map(|artifact| -> Box<dyn GeneratedFile + 'a> {
                match &artifact.spec {
                    ArtifactSpec::Dto(spec) => Box::new(DtoJava::new(spec, root)),
                    ArtifactSpec::Mapper(spec) => Box::new(MapperJava::new(spec, root)),
                    ArtifactSpec::Repository(spec) => Box::new(RepositoryJava::new(spec, root)),
                    ArtifactSpec::Service(spec) => {
                        Box::new(ServiceJava::new(spec, self.persistence, root))
                    }
                    ArtifactSpec::Controller(spec) => {
                        Box::new(ControllerJava::new(spec, self.persistence, root))
                    }
                }
            })
            .collect()
    }
}

/// Path relative to the output directory, `/`-separated on every platform.
fn relative_path(file: &dyn GeneratedFile) -> String {
    file.path(Path::new(""))
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
