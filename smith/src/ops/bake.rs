//! Bake operation - code generation from manifest.

use std::path::Path;

use eyre::{Context, Result};
use springsmith_codegen::{
    pipeline::{Pipeline, SnapshotPlugin},
    sink::ArtifactSink,
};
use springsmith_codegen_java::Generator;
use springsmith_manifest::Manifest;

use crate::reports::{BakeReport, GenerationResult, PreviewResult, WrittenResult};

/// Directory, below the output directory, that receives pipeline snapshots.
pub const DEBUG_DIR: &str = ".smith/debug";

/// Options for the bake operation.
pub struct BakeOptions<'a> {
    /// Output directory for generated code.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Whether to output debug snapshots.
    pub visualize: bool,
}

/// Execute the bake operation.
///
/// Runs the pipeline on the manifest and renders every emitted artifact as
/// Java source. Failed entities are reported, never written.
pub fn bake(manifest: &Manifest, opts: BakeOptions) -> Result<BakeReport> {
    let debug_dir = opts.output_dir.join(DEBUG_DIR);

    let mut pipeline = Pipeline::new();
    if opts.visualize {
        pipeline = pipeline.plugin(SnapshotPlugin::with_output_dir(&debug_dir));
    }
    let ctx = pipeline.run(manifest.clone()).wrap_err("Pipeline failed")?;

    let warnings = ctx.warnings().map(ToString::to_string).collect();
    let failures = ctx.errors().map(ToString::to_string).collect();
    let entities = ctx.emitted().map(|e| e.name.clone()).collect();

    let generator = Generator::from_context(&ctx);
    let result = if opts.dry_run {
        GenerationResult::Preview(PreviewResult {
            files: generator.preview(),
        })
    } else {
        let generated = generator
            .generate(opts.output_dir)
            .wrap_err("Failed to generate code")?;

        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            source_root: manifest.generator.source_root.clone(),
            written: generated.written,
            unchanged: generated.unchanged,
            debug_dir: opts.visualize.then_some(debug_dir),
        })
    };

    Ok(BakeReport {
        project_name: manifest.project.name.clone(),
        project_version: manifest.project.version.clone(),
        project_description: manifest.project.description.clone(),
        entities,
        warnings,
        failures,
        result,
    })
}
