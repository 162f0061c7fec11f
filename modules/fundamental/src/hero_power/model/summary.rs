use crate::{hero_power::model::HeroPowerHead, power::model::PowerHead, Error};
use heroes_entity::{hero_power, power};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A hero power as seen from its hero, carrying the power but not the hero.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema, PartialEq, Eq)]
pub struct HeroPowerSummary {
    #[serde(flatten)]
    pub head: HeroPowerHead,

    pub power: PowerHead,
}

impl HeroPowerSummary {
    pub fn from_entity(hero_power: &hero_power::Model, power: &power::Model) -> Self {
        HeroPowerSummary {
            head: HeroPowerHead::from_entity(hero_power),
            power: PowerHead::from_entity(power),
        }
    }

    pub fn from_entities(
        hero_powers: &[(hero_power::Model, Option<power::Model>)],
    ) -> Result<Vec<Self>, Error> {
        hero_powers
            .iter()
            .map(|(hero_power, power)| match power {
                Some(power) => Ok(Self::from_entity(hero_power, power)),
                None => Err(Error::Database(anyhow::anyhow!(
                    "hero power {} references missing power {}",
                    hero_power.id,
                    hero_power.power_id
                ))),
            })
            .collect()
    }
}
