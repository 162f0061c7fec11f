use sea_orm::entity::prelude::*;

/// How strongly a hero wields a power.
///
/// Stored as plain text, so the schema stays portable across database backends.
#[derive(
    Debug,
    Copy,
    Clone,
    Hash,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    strum::Display,
    strum::EnumString,
    strum::VariantArray,
    serde::Serialize,
    serde::Deserialize,
    utoipa::ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Strength {
    #[sea_orm(string_value = "Strong")]
    Strong,
    #[sea_orm(string_value = "Weak")]
    Weak,
    #[sea_orm(string_value = "Average")]
    Average,
}
