pub mod endpoints;
pub mod error;
pub mod hero;
pub mod hero_power;
pub mod openapi;
pub mod power;
pub mod validation;

pub use endpoints::{configure, Config};
pub use error::Error;
pub use openapi::openapi;
