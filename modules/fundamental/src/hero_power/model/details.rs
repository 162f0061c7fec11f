use crate::{hero::model::HeroHead, hero_power::model::HeroPowerHead, power::model::PowerHead};
use heroes_entity::{hero, hero_power, power};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A hero power with both ends of the association.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema, PartialEq, Eq)]
pub struct HeroPowerDetails {
    #[serde(flatten)]
    pub head: HeroPowerHead,

    pub hero: HeroHead,
    pub power: PowerHead,
}

impl HeroPowerDetails {
    pub fn from_entity(
        hero_power: &hero_power::Model,
        hero: &hero::Model,
        power: &power::Model,
    ) -> Self {
        HeroPowerDetails {
            head: HeroPowerHead::from_entity(hero_power),
            hero: HeroHead::from_entity(hero),
            power: PowerHead::from_entity(power),
        }
    }
}
