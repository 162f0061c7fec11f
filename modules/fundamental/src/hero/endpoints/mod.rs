#[cfg(test)]
mod test;

use crate::{
    hero::{
        model::{HeroDetails, HeroSummary},
        service::HeroService,
    },
    Error,
};
use actix_web::{get, web, HttpResponse, Responder};
use heroes_common::{db::Database, error::ErrorInformation};

pub fn configure(config: &mut utoipa_actix_web::service_config::ServiceConfig) {
    let service = HeroService::new();
    config
        .app_data(web::Data::new(service))
        .service(all)
        .service(get);
}

#[utoipa::path(
    tag = "hero",
    operation_id = "listHeroes",
    responses(
        (status = 200, description = "All heroes", body = Vec<HeroSummary>),
    ),
)]
#[get("/heroes")]
/// List heroes
pub async fn all(
    service: web::Data<HeroService>,
    db: web::Data<Database>,
) -> actix_web::Result<impl Responder> {
    Ok(HttpResponse::Ok().json(service.fetch_heroes(db.get_ref()).await?))
}

#[utoipa::path(
    tag = "hero",
    operation_id = "getHero",
    params(
        ("id", Path, description = "ID of the hero")
    ),
    responses(
        (status = 200, description = "Matching hero, with its powers", body = HeroDetails),
        (status = 404, description = "Matching hero not found", body = ErrorInformation),
    ),
)]
#[get("/heroes/{id}")]
/// Retrieve hero details
pub async fn get(
    service: web::Data<HeroService>,
    db: web::Data<Database>,
    id: web::Path<i32>,
) -> actix_web::Result<impl Responder> {
    match service.fetch_hero(*id, db.get_ref()).await? {
        Some(hero) => Ok(HttpResponse::Ok().json(hero)),
        None => Err(Error::NotFound("Hero").into()),
    }
}
