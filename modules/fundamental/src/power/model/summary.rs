use crate::power::model::PowerHead;
use heroes_entity::power;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema, PartialEq, Eq)]
pub struct PowerSummary {
    #[serde(flatten)]
    pub head: PowerHead,
}

impl PowerSummary {
    pub fn from_entities(powers: &[power::Model]) -> Vec<Self> {
        powers
            .iter()
            .map(|power| PowerSummary {
                head: PowerHead::from_entity(power),
            })
            .collect()
    }
}
