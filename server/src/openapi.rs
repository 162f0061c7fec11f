use utoipa::openapi::{Info, OpenApi};

pub fn info() -> Info {
    let mut info = Info::new("Heroes", env!("CARGO_PKG_VERSION"));
    info.description = Some("Heroes, their powers, and how strong they are in them".into());
    info
}

/// The OpenAPI document of the complete server.
pub fn openapi() -> OpenApi {
    let mut doc = heroes_module_fundamental::openapi();
    doc.info = info();
    doc
}
