use std::path::{Path, PathBuf};

use clap::Args;
use dialoguer::{Select, theme::ColorfulTheme};
use eyre::{Context, Result};
use springsmith_codegen::generation::ManifestTemplate;
use springsmith_core::{GeneratedFile, WriteResult};
use springsmith_manifest::Persistence;

#[derive(Args)]
pub struct InitCommand {
    /// Project name (defaults to current directory)
    #[arg(default_value = ".")]
    pub name: String,

    /// Output directory (defaults to ./<name>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Persistence API namespace for generated imports
    #[arg(short, long)]
    pub persistence: Option<Persistence>,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let (project_name, output_dir) = Self::resolve_paths(&self.name, self.output.clone())?;
        let persistence = match self.persistence {
            Some(persistence) => persistence,
            None => Self::prompt_persistence()?,
        };

        let template = ManifestTemplate::new(&project_name, persistence);
        let path = template.path(&output_dir);
        match template.write(&output_dir)? {
            WriteResult::Skipped => {
                println!("{} already exists, leaving it untouched", path.display());
                return Ok(());
            }
            WriteResult::Written | WriteResult::Unchanged => {
                println!("Created {}", path.display());
            }
        }

        println!();
        println!("Next steps:");
        if output_dir != Path::new(".") {
            println!("  cd {}", output_dir.display());
        }
        println!("  edit smith.toml to describe your entities");
        println!("  smith bake");

        Ok(())
    }

    fn prompt_persistence() -> Result<Persistence> {
        let choices = [
            "jakarta.persistence (Spring Boot 3)",
            "javax.persistence (Spring Boot 2)",
        ];
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select a persistence API")
            .items(&choices)
            .default(0)
            .interact()
            .wrap_err("Failed to get persistence selection")?;

        Ok(match selection {
            0 => Persistence::Jakarta,
            _ => Persistence::Javax,
        })
    }

    fn resolve_paths(name: &str, output: Option<PathBuf>) -> Result<(String, PathBuf)> {
        if name == "." {
            let cwd = std::env::current_dir().wrap_err("Failed to get current directory")?;
            let dir_name = cwd
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| eyre::eyre!("Current directory has no valid name"))?
                .to_string();
            let output_dir = output.unwrap_or_else(|| PathBuf::from("."));
            Ok((dir_name, output_dir))
        } else {
            let output_dir = output.unwrap_or_else(|| PathBuf::from(name));
            Ok((name.to_string(), output_dir))
        }
    }
}
