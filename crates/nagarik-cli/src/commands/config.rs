//! Config command - inspect and scaffold configuration files.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use console::style;

use nagarik_core::LabelerConfig;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the effective configuration
    Show {
        /// Existing config file to load
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Write a default config file
    Init {
        /// Destination path
        #[arg(default_value = "nagarik.json")]
        path: PathBuf,
    },
}

pub fn run(args: ConfigArgs) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show { path } => {
            let config = match path {
                Some(p) => LabelerConfig::from_file(&p)?,
                None => LabelerConfig::default(),
            };
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigCommand::Init { path } => {
            if path.exists() {
                anyhow::bail!("Config file already exists: {}", path.display());
            }
            LabelerConfig::default().save(&path)?;
            println!("{} {}", style("Wrote").green().bold(), path.display());
        }
    }
    Ok(())
}
