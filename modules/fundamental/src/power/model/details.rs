use crate::power::model::PowerHead;
use heroes_entity::power;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema, PartialEq, Eq)]
pub struct PowerDetails {
    #[serde(flatten)]
    pub head: PowerHead,
}

impl PowerDetails {
    pub fn from_entity(power: &power::Model) -> Self {
        PowerDetails {
            head: PowerHead::from_entity(power),
        }
    }
}
