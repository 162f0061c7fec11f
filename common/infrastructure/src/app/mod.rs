pub mod http;

use actix_cors::Cors;
use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::{Compress, Condition, Logger},
    App, Error,
};

#[derive(Default)]
pub struct AppOptions {
    pub cors: Option<Cors>,
    pub logger: Option<Logger>,
}

/// Build a new HTTP app in a consistent way.
///
/// Adding middleware to an HTTP app is tricky, as it requires to think about the order of adding.
/// This function should capture all the logic required to properly set up a common application,
/// allowing some choices in the process.
pub fn new_app(
    options: AppOptions,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    // The order of execution is last added becomes first to be executed. So if you read the
    // following lines, read them from end to start! Middleware for services will be executed after
    // the middleware here.
    App::new()
        // Handle CORS requests, this might finish early and not pass requests to the next entry
        .wrap(Condition::new(
            options.cors.is_some(),
            options.cors.unwrap_or_default(),
        ))
        // Compress everything
        .wrap(Compress::default())
        // First log the request, so that we know what happens (can't fail)
        .wrap(Condition::new(
            options.logger.is_some(),
            options.logger.unwrap_or_default(),
        ))
}
