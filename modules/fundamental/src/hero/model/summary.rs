use crate::hero::model::HeroHead;
use heroes_entity::hero;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema, PartialEq, Eq)]
pub struct HeroSummary {
    #[serde(flatten)]
    pub head: HeroHead,
}

impl HeroSummary {
    pub fn from_entity(hero: &hero::Model) -> Self {
        HeroSummary {
            head: HeroHead::from_entity(hero),
        }
    }

    pub fn from_entities(heroes: &[hero::Model]) -> Vec<Self> {
        heroes.iter().map(Self::from_entity).collect()
    }
}
