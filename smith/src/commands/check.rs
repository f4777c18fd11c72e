use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use springsmith_manifest::SmithToml;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to smith.toml (defaults to ./smith.toml)
    #[arg(short, long, default_value = "smith.toml")]
    pub config: PathBuf,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let smith_toml = SmithToml::open(&self.config).unwrap_or_exit();
        let report = ops::check(smith_toml.manifest(), &self.config)?;
        tracing::debug!(
            emitted = report.emitted.len(),
            failed = report.failed.len(),
            "check finished"
        );

        if self.json {
            let json = serde_json::to_string_pretty(&report).wrap_err("Failed to encode report")?;
            println!("{}", json);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
