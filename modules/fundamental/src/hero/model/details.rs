use crate::{hero::model::HeroHead, hero_power::model::HeroPowerSummary, Error};
use heroes_entity::{hero, hero_power, power};
use sea_orm::{ConnectionTrait, ModelTrait, QueryOrder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema, PartialEq, Eq)]
pub struct HeroDetails {
    #[serde(flatten)]
    pub head: HeroHead,

    /// The powers of the hero, each with the power it refers to.
    pub hero_powers: Vec<HeroPowerSummary>,
}

impl HeroDetails {
    pub async fn from_entity<C: ConnectionTrait>(
        hero: &hero::Model,
        connection: &C,
    ) -> Result<Self, Error> {
        let hero_powers = hero
            .find_related(hero_power::Entity)
            .order_by_asc(hero_power::Column::Id)
            .find_also_related(power::Entity)
            .all(connection)
            .await?;

        Ok(HeroDetails {
            head: HeroHead::from_entity(hero),
            hero_powers: HeroPowerSummary::from_entities(&hero_powers)?,
        })
    }
}
