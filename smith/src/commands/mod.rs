mod bake;
mod check;
mod completions;
mod init;
mod list;

use bake::BakeCommand;
use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use init::InitCommand;
use list::ListCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for springsmith_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "smith")]
#[command(version)]
#[command(about = "Generate Spring Boot CRUD layers from JPA entity descriptions")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Init(cmd) => cmd.run(),
            Commands::Bake(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter smith.toml
    Init(InitCommand),

    /// Generate DTOs, mappers, repositories, services and controllers
    Bake(BakeCommand),

    /// Run generation without writing and report diagnostics
    Check(CheckCommand),

    /// List entities with their artifacts and routes
    List(ListCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
