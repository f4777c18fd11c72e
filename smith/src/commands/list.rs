use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use springsmith_manifest::SmithToml;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    /// Path to smith.toml (defaults to ./smith.toml)
    #[arg(short, long, default_value = "smith.toml")]
    pub config: PathBuf,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let smith_toml = SmithToml::open(&self.config).unwrap_or_exit();
        ops::list(smith_toml.manifest())?.render(&mut TerminalOutput::new());
        Ok(())
    }
}
