use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use springsmith_manifest::{Persistence, SmithToml};

use super::UnwrapOrExit;
use crate::{
    ops::{self, bake::BakeOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct BakeCommand {
    /// Path to smith.toml (defaults to ./smith.toml)
    #[arg(short, long, default_value = "smith.toml")]
    pub config: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Persistence API namespace (overrides smith.toml setting)
    #[arg(short, long)]
    pub persistence: Option<Persistence>,

    /// Write per-phase pipeline snapshots to <output>/.smith/debug
    #[arg(long)]
    pub visualize: bool,
}

impl BakeCommand {
    /// Run the bake command
    pub fn run(&self) -> Result<()> {
        let smith_toml = SmithToml::open(&self.config).unwrap_or_exit();
        tracing::debug!(config = %self.config.display(), "manifest loaded");

        // Use CLI flag if provided, otherwise use manifest setting
        let mut manifest = smith_toml.manifest().clone();
        if let Some(persistence) = self.persistence {
            manifest.generator.persistence = persistence;
        }

        let report = ops::bake(
            &manifest,
            BakeOptions {
                output_dir: &self.output,
                dry_run: self.dry_run,
                visualize: self.visualize,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        if report.has_failures() {
            std::process::exit(1);
        }
        Ok(())
    }
}
