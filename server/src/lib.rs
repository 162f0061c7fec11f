pub mod openapi;
pub mod sample_data;

use anyhow::Context;
use bytesize::ByteSize;
use heroes_common::{config, db};
use heroes_infrastructure::app::http::{HttpServerBuilder, HttpServerConfig};
use heroes_module_fundamental::Config;
use std::process::ExitCode;

/// Run the API server
#[derive(clap::Args, Debug, Clone)]
pub struct Run {
    /// The database creation mode
    #[arg(long, env, value_enum, default_value_t = db::CreationMode::Default)]
    pub creation: db::CreationMode,

    /// Seed the sample heroes and powers, unless there are heroes already
    #[arg(long, env)]
    pub sample_data: bool,

    /// The maximum size of a JSON request body
    #[arg(
        id = "http-server-json-limit",
        long,
        env = "HTTP_SERVER_JSON_LIMIT",
        default_value = "256KiB"
    )]
    pub json_limit: ByteSize,

    #[command(flatten)]
    pub database: config::Database,

    #[command(flatten)]
    pub http: HttpServerConfig,
}

impl Run {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        let db = db::Database::with_config(&self.database, self.creation).await?;
        log::info!("Connected to database '{}'", db.name());

        if self.sample_data {
            sample_data::sample_data(&db).await?;
        }

        let config = Config {
            json_limit: usize::try_from(self.json_limit.as_u64())
                .context("JSON limit exceeds the address space")?,
        };

        HttpServerBuilder::try_from(self.http)?
            .openapi_info(openapi::info())
            .configure(move |svc| {
                heroes_module_fundamental::configure(svc, config.clone(), db.clone())
            })
            .run()
            .await?;

        Ok(ExitCode::SUCCESS)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::Parser;

    #[derive(clap::Parser)]
    struct Cli {
        #[command(flatten)]
        run: Run,
    }

    #[test]
    fn defaults() {
        let run = Cli::try_parse_from(["heroes"]).unwrap().run;
        assert_eq!(run.creation, db::CreationMode::Default);
        assert!(!run.sample_data);
        assert_eq!(run.json_limit, ByteSize::kib(256));
        assert_eq!(run.http.bind_port, 5555);
    }

    #[test]
    fn arguments() {
        let run = Cli::try_parse_from([
            "heroes",
            "--creation",
            "refresh-schema",
            "--sample-data",
            "--http-server-json-limit",
            "1MiB",
            "--db-url",
            "sqlite::memory:",
        ])
        .unwrap()
        .run;

        assert_eq!(run.creation, db::CreationMode::RefreshSchema);
        assert!(run.sample_data);
        assert_eq!(run.json_limit, ByteSize::mib(1));
        assert_eq!(run.database.to_url(), "sqlite::memory:");
    }
}
