use anyhow::{anyhow, Result};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(clap::Args, Debug)]
pub struct Run {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    Export(Export),
}

impl Run {
    pub async fn run(self) -> Result<ExitCode> {
        use Command::*;
        match self.command {
            Export(export) => export.run(),
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct Export {
    /// The file the OpenAPI document should be written to, as JSON
    #[arg(long, env)]
    pub file: PathBuf,
}

impl Export {
    pub fn run(self) -> Result<ExitCode> {
        if !matches!(self.file.file_name(), Some(name) if !name.is_empty()) {
            return Err(anyhow!("Invalid file name"));
        }

        let doc = heroes_server::openapi::openapi().to_pretty_json()?;
        fs::write(&self.file, doc)?;

        log::info!("Wrote OpenAPI document to {}", self.file.display());

        Ok(ExitCode::SUCCESS)
    }
}
