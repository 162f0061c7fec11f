
use crate::hero_power::{
    model::{HeroPowerDetails, NewHeroPower},
    service::HeroPowerService,
};
use actix_web::{post, web, HttpResponse, Responder};
use heroes_common::{db::Database, error::ValidationErrors};

pub fn configure(config: &mut utoipa_actix_web::service_config::ServiceConfig, db: Database) {
    let service = HeroPowerService::new(db);
    config.app_data(web::Data::new(service)).service(create);
}

#[utoipa::path(
    tag = "hero_power",
    operation_id = "createHeroPower",
    request_body = NewHeroPower,
    responses(
        (status = 201, description = "The created hero power, with its hero and power", body = HeroPowerDetails),
        (status = 400, description = "Missing fields, an invalid strength, or an unknown hero or power", body = ValidationErrors),
    ),
)]
#[post("/hero_powers")]
/// Give a hero a power
pub async fn create(
    service: web::Data<HeroPowerService>,
    web::Json(new): web::Json<NewHeroPower>,
) -> actix_web::Result<impl Responder> {
    let created = service.create_hero_power(new).await?;
    log::info!("created hero power {}", created.head.id);
    Ok(HttpResponse::Created().json(created))
}
