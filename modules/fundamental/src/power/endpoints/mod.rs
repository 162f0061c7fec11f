#[cfg(test)]
mod test;

use crate::{
    power::{
        model::{PowerDetails, PowerPatch, PowerSummary},
        service::PowerService,
    },
    Error,
};
use actix_web::{get, patch, web, HttpResponse, Responder};
use heroes_common::{
    db::Database,
    error::{ErrorInformation, ValidationErrors},
};

pub fn configure(config: &mut utoipa_actix_web::service_config::ServiceConfig, db: Database) {
    let service = PowerService::new(db);
    config
        .app_data(web::Data::new(service))
        .service(all)
        .service(get)
        .service(update);
}

#[utoipa::path(
    tag = "power",
    operation_id = "listPowers",
    responses(
        (status = 200, description = "All powers", body = Vec<PowerSummary>),
    ),
)]
#[get("/powers")]
/// List powers
pub async fn all(
    service: web::Data<PowerService>,
    db: web::Data<Database>,
) -> actix_web::Result<impl Responder> {
    Ok(HttpResponse::Ok().json(service.fetch_powers(db.get_ref()).await?))
}

#[utoipa::path(
    tag = "power",
    operation_id = "getPower",
    params(
        ("id", Path, description = "ID of the power")
    ),
    responses(
        (status = 200, description = "Matching power", body = PowerDetails),
        (status = 404, description = "Matching power not found", body = ErrorInformation),
    ),
)]
#[get("/powers/{id}")]
/// Retrieve power details
pub async fn get(
    service: web::Data<PowerService>,
    db: web::Data<Database>,
    id: web::Path<i32>,
) -> actix_web::Result<impl Responder> {
    match service.fetch_power(*id, db.get_ref()).await? {
        Some(power) => Ok(HttpResponse::Ok().json(power)),
        None => Err(Error::NotFound("Power").into()),
    }
}

#[utoipa::path(
    tag = "power",
    operation_id = "updatePower",
    params(
        ("id", Path, description = "ID of the power")
    ),
    request_body = PowerPatch,
    responses(
        (status = 200, description = "The updated power", body = PowerDetails),
        (status = 400, description = "The description is missing or too short", body = ValidationErrors),
        (status = 404, description = "Matching power not found", body = ErrorInformation),
    ),
)]
#[patch("/powers/{id}")]
/// Update the description of a power
pub async fn update(
    service: web::Data<PowerService>,
    id: web::Path<i32>,
    web::Json(patch): web::Json<PowerPatch>,
) -> actix_web::Result<impl Responder> {
    Ok(HttpResponse::Ok().json(service.update_power(*id, patch).await?))
}
