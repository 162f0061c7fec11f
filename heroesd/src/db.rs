use heroes_common::{config::Database, db};
use std::process::ExitCode;

#[derive(clap::Args, Debug)]
pub struct Run {
    #[command(subcommand)]
    pub(crate) command: Command,
    #[command(flatten)]
    pub(crate) database: Database,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Apply all pending migrations
    Migrate,
    /// Drop and re-create the schema, removing all data
    Refresh,
    /// Apply pending migrations and store the sample data
    Seed,
}

impl Run {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        use Command::*;
        match self.command {
            Migrate => self.config(db::CreationMode::Default).await,
            Refresh => self.config(db::CreationMode::RefreshSchema).await,
            Seed => {
                let db = db::Database::with_config(&self.database, db::CreationMode::Default).await?;
                heroes_server::sample_data::sample_data(&db).await?;
                db.close().await?;
                Ok(ExitCode::SUCCESS)
            }
        }
    }

    async fn config(self, mode: db::CreationMode) -> anyhow::Result<ExitCode> {
        db::Database::with_config(&self.database, mode)
            .await?
            .close()
            .await?;
        Ok(ExitCode::SUCCESS)
    }
}
