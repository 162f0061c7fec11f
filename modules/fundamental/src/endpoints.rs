use actix_web::{error::InternalError, web, HttpResponse};
use heroes_common::{db::Database, error::ValidationErrors};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// The maximum size of a JSON request body, in bytes.
    pub json_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            json_limit: 256 * 1024,
        }
    }
}

pub fn configure(
    svc: &mut utoipa_actix_web::service_config::ServiceConfig,
    config: Config,
    db: Database,
) {
    svc.app_data(web::Data::new(db.clone()))
        .app_data(json_config(config.json_limit));

    crate::hero::endpoints::configure(svc);
    crate::power::endpoints::configure(svc, db.clone());
    crate::hero_power::endpoints::configure(svc, db);
}

/// Report request bodies which can't be read as the same kind of error as failed validation.
fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            log::debug!("rejecting request body: {err}");
            let response =
                HttpResponse::BadRequest().json(ValidationErrors::from([err.to_string()]));
            InternalError::from_response(err, response).into()
        })
}
