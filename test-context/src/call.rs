use actix_http::Request;
use actix_web::{
    dev::{Service, ServiceResponse},
    http::StatusCode,
    App, Error,
};
use serde::de::DeserializeOwned;
use std::future::Future;
use utoipa_actix_web::{service_config::ServiceConfig, AppExt};

/// A trait wrapping an `impl Service` in a way that we can pass it as a reference.
pub trait CallService {
    fn call_service(&self, s: Request) -> impl Future<Output = ServiceResponse>;
    fn call_and_read_body_json<T: DeserializeOwned>(&self, r: Request) -> impl Future<Output = T>;
}

impl<S> CallService for S
where
    S: Service<Request, Response = ServiceResponse, Error = Error>,
{
    async fn call_service(&self, r: Request) -> ServiceResponse {
        actix_web::test::call_service(self, r).await
    }

    async fn call_and_read_body_json<T: DeserializeOwned>(&self, r: Request) -> T {
        actix_web::test::call_and_read_body_json(self, r).await
    }
}

/// Create a test service, mounting the services registered by `f` at the root.
pub async fn caller<F>(f: F) -> anyhow::Result<impl CallService>
where
    F: FnOnce(&mut ServiceConfig),
{
    Ok(actix_web::test::init_service(App::new().into_utoipa_app().configure(f).into_app()).await)
}

/// Read the status and the JSON body of a response.
pub async fn read_json(response: ServiceResponse) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let body = actix_web::test::read_body(response).await;
    (
        status,
        serde_json::from_slice(&body).expect("body must decode as JSON"),
    )
}
