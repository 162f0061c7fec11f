use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::hero::endpoints::all,
        crate::hero::endpoints::get,
        crate::power::endpoints::all,
        crate::power::endpoints::get,
        crate::power::endpoints::update,
        crate::hero_power::endpoints::create,
    ),
    tags(
        (name = "hero", description = "Heroes and their powers"),
        (name = "power", description = "Powers a hero may have"),
        (name = "hero_power", description = "Associations of heroes and powers"),
    ),
)]
pub struct ApiDoc;

pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
