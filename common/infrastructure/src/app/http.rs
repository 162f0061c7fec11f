use crate::app::{new_app, AppOptions};
use actix_cors::Cors;
use actix_web::{
    dev::{ServiceFactory, ServiceRequest},
    middleware::Logger,
    web, App, HttpServer,
};
use anyhow::Context;
use std::net::{IpAddr, Ipv6Addr, SocketAddr, TcpListener};
use std::str::FromStr;
use std::sync::Arc;
use utoipa::openapi::Info;
use utoipa_actix_web::AppExt;
use utoipa_rapidoc::RapiDoc;

pub const DEFAULT_PORT: u16 = 5555;

const DEFAULT_ADDR: SocketAddr = SocketAddr::new(IpAddr::V6(Ipv6Addr::LOCALHOST), DEFAULT_PORT);

#[derive(Clone, Debug, clap::Args)]
#[command(
    rename_all_env = "SCREAMING_SNAKE_CASE",
    next_help_heading = "HTTP endpoint"
)]
#[group(id = "http")]
pub struct HttpServerConfig {
    /// The number of worker threads, defaults to zero, which falls back to the number of cores.
    #[arg(
        id = "http-server-workers",
        long,
        env = "HTTP_SERVER_WORKERS",
        default_value_t = 0
    )]
    pub workers: usize,

    /// The address to listen on
    #[arg(
        id = "http-server-bind-address",
        long,
        env = "HTTP_SERVER_BIND_ADDR",
        default_value_t = default::bind_addr(),
    )]
    pub bind_addr: String,

    /// The port to listen on
    #[arg(
        id = "http-server-bind-port",
        short = 'p',
        long,
        env = "HTTP_SERVER_BIND_PORT",
        default_value_t = DEFAULT_PORT,
    )]
    pub bind_port: u16,

    /// The overall request limit, in bytes
    #[arg(
        id = "http-server-request-limit",
        long,
        env = "HTTP_SERVER_REQUEST_LIMIT",
        default_value_t = default::request_limit(),
    )]
    pub request_limit: usize,
}

mod default {
    pub fn bind_addr() -> String {
        "::1".to_string()
    }

    pub const fn request_limit() -> usize {
        256 * 1024
    }
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            workers: 0,
            bind_addr: default::bind_addr(),
            bind_port: DEFAULT_PORT,
            request_limit: default::request_limit(),
        }
    }
}

impl TryFrom<HttpServerConfig> for HttpServerBuilder {
    type Error = anyhow::Error;

    fn try_from(value: HttpServerConfig) -> Result<Self, Self::Error> {
        let addr = SocketAddr::new(
            IpAddr::from_str(&value.bind_addr).context("parse bind address")?,
            value.bind_port,
        );

        Ok(HttpServerBuilder::new()
            .workers(value.workers)
            .bind(addr)
            .request_limit(value.request_limit))
    }
}

pub type ConfiguratorFn =
    dyn Fn(&mut utoipa_actix_web::service_config::ServiceConfig) + Send + Sync;

pub struct HttpServerBuilder {
    configurator: Option<Arc<ConfiguratorFn>>,

    bind: Bind,

    cors_factory: Option<Arc<dyn Fn() -> Cors + Send + Sync>>,

    workers: usize,
    request_limit: Option<usize>,

    openapi_info: Option<Info>,
}

pub enum Bind {
    /// Use the provided listener
    Listener(TcpListener),
    /// Bind to the provided address and port
    Address(SocketAddr),
}

impl Default for HttpServerBuilder {
    fn default() -> Self {
        HttpServerBuilder::new()
    }
}

impl HttpServerBuilder {
    pub fn new() -> Self {
        Self {
            configurator: None,
            bind: Bind::Address(DEFAULT_ADDR),
            cors_factory: Some(Arc::new(Cors::permissive)),
            workers: 0,
            request_limit: None,
            openapi_info: None,
        }
    }

    /// Set a custom CORS factory.
    ///
    /// The default is [`Cors::permissive`].
    pub fn cors<F>(mut self, cors_factory: F) -> Self
    where
        F: Fn() -> Cors + Send + Sync + 'static,
    {
        self.cors_factory = Some(Arc::new(cors_factory));
        self
    }

    pub fn cors_disabled(mut self) -> Self {
        self.cors_factory = None;
        self
    }

    pub fn openapi_info(mut self, openapi_info: Info) -> Self {
        self.openapi_info = Some(openapi_info);
        self
    }

    pub fn configure<F>(mut self, configurator: F) -> Self
    where
        F: Fn(&mut utoipa_actix_web::service_config::ServiceConfig) + Send + Sync + 'static,
    {
        self.configurator = Some(Arc::new(configurator));
        self
    }

    pub fn listen(mut self, listener: TcpListener) -> Self {
        self.bind = Bind::Listener(listener);
        self
    }

    pub fn bind(mut self, addr: impl Into<SocketAddr>) -> Self {
        self.bind = Bind::Address(addr.into());
        self
    }

    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn request_limit(mut self, request_limit: usize) -> Self {
        self.request_limit = Some(request_limit);
        self
    }

    pub async fn run(self) -> anyhow::Result<()> {
        if let Some(limit) = self.request_limit {
            log::info!("Payload limit: {limit} bytes");
        }

        let mut http = HttpServer::new(move || {
            let cors = self.cors_factory.as_ref().map(|factory| factory());

            let mut app = new_app(AppOptions {
                cors,
                logger: Some(Logger::default()),
            })
            .into_utoipa_app();

            // configure payload limit

            if let Some(limit) = self.request_limit {
                app = app.app_data(web::PayloadConfig::new(limit));
            }

            // configure application

            let app = app.configure(|svc| {
                if let Some(config) = &self.configurator {
                    config(svc);
                }
            });

            app.apply_openapi(self.openapi_info.clone())
        });

        if self.workers > 0 {
            log::info!("Using {} worker(s)", self.workers);
            http = http.workers(self.workers);
        }

        match self.bind {
            Bind::Listener(listener) => {
                log::info!("Binding to provided listener: {listener:?}");
                http = http.listen(listener).context("listen")?;
            }
            Bind::Address(addr) => {
                log::info!("Binding to: {addr}");
                http = http.bind(addr).context("bind")?;
            }
        }

        Ok(http.run().await?)
    }
}

pub trait ApplyOpenApi<T> {
    /// Turn a [`utoipa_actix_web::UtoipaApp`] into a [`App`] by serving its OpenAPI document
    fn apply_openapi(self, openapi_info: Option<Info>) -> App<T>;
}

impl<T> ApplyOpenApi<T> for utoipa_actix_web::UtoipaApp<T>
where
    T: ServiceFactory<ServiceRequest, Config = (), Error = actix_web::Error, InitError = ()>,
{
    fn apply_openapi(self, openapi_info: Option<Info>) -> App<T> {
        let (app, mut openapi) = self.split_for_parts();
        if let Some(info) = openapi_info {
            openapi.info = info;
        }

        // serves the document at `/openapi.json` and the UI at `/openapi/`
        app.service(RapiDoc::with_openapi("/openapi.json", openapi).path("/openapi/"))
            .service(web::redirect("/openapi", "/openapi/"))
    }
}
