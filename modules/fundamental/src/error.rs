use crate::validation::Violations;
use actix_web::{body::BoxBody, HttpResponse, ResponseError};
use heroes_common::error::{ErrorInformation, ValidationErrors};
use sea_orm::DbErr;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested entity does not exist, carries the name of the entity type.
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("validation failed: {0}")]
    Validation(Violations),
    /// A reference to another entity could not be resolved.
    #[error("{0}")]
    Integrity(String),
    #[error(transparent)]
    Database(anyhow::Error),
}

impl From<DbErr> for Error {
    fn from(value: DbErr) -> Self {
        Self::Database(value.into())
    }
}

impl From<Violations> for Error {
    fn from(value: Violations) -> Self {
        Self::Validation(value)
    }
}

impl ResponseError for Error {
    fn error_response(&self) -> HttpResponse<BoxBody> {
        match self {
            Self::NotFound(_) => HttpResponse::NotFound().json(ErrorInformation::bare(self.to_string())),
            Self::Validation(violations) => {
                HttpResponse::BadRequest().json(ValidationErrors::from(violations.iter()))
            }
            Self::Integrity(msg) => HttpResponse::BadRequest().json(ValidationErrors::from([msg])),
            Self::Database(err) => {
                log::warn!("database error: {err}");
                HttpResponse::InternalServerError()
                    .json(ErrorInformation::new("Database error", err))
            }
        }
    }
}
