mod db;
mod openapi;

use clap::Parser;
use heroes_infrastructure::tracing::init_tracing;
use std::process::{ExitCode, Termination};

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Run the API server
    Api(heroes_server::Run),
    /// Manage the database
    Db(db::Run),
    /// Work with the OpenAPI document
    Openapi(openapi::Run),
}

#[derive(clap::Parser, Debug)]
#[command(
    author,
    version = env!("CARGO_PKG_VERSION"),
    about = "heroesd",
    long_about = None,
    args_conflicts_with_subcommands = true
)]
pub struct Heroesd {
    #[command(subcommand)]
    pub(crate) command: Option<Command>,

    // used when no command is given
    #[command(flatten)]
    pub(crate) api: heroes_server::Run,
}

impl Heroesd {
    async fn run(self) -> ExitCode {
        match self.run_command().await {
            Ok(code) => code,
            Err(err) => {
                log::error!("Error: {err}");
                for (n, err) in err.chain().skip(1).enumerate() {
                    if n == 0 {
                        log::error!("Caused by:");
                    }
                    log::error!("\t{err}");
                }

                ExitCode::FAILURE
            }
        }
    }

    async fn run_command(self) -> anyhow::Result<ExitCode> {
        match self.command {
            None => self.api.run().await,
            Some(Command::Api(run)) => run.run().await,
            Some(Command::Db(run)) => run.run().await,
            Some(Command::Openapi(run)) => run.run().await,
        }
    }
}

#[actix_web::main]
async fn main() -> impl Termination {
    init_tracing();
    Heroesd::parse().run().await
}
