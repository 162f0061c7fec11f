use crate::{
    hero::model::{HeroDetails, HeroHead, HeroSummary},
    validation, Error,
};
use heroes_entity::hero;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, ConnectionTrait, EntityTrait, QueryOrder};
use tracing::instrument;

#[derive(Default)]
pub struct HeroService {}

impl HeroService {
    pub fn new() -> Self {
        Self {}
    }

    /// List all heroes, ordered by their ID.
    #[instrument(skip_all, err)]
    pub async fn fetch_heroes<C: ConnectionTrait>(
        &self,
        connection: &C,
    ) -> Result<Vec<HeroSummary>, Error> {
        let heroes = hero::Entity::find()
            .order_by_asc(hero::Column::Id)
            .all(connection)
            .await?;

        Ok(HeroSummary::from_entities(&heroes))
    }

    /// Fetch a single hero, including its powers.
    #[instrument(skip(self, connection), err)]
    pub async fn fetch_hero<C: ConnectionTrait>(
        &self,
        id: i32,
        connection: &C,
    ) -> Result<Option<HeroDetails>, Error> {
        if let Some(hero) = hero::Entity::find_by_id(id).one(connection).await? {
            Ok(Some(HeroDetails::from_entity(&hero, connection).await?))
        } else {
            Ok(None)
        }
    }

    /// Create a new hero, both names are required.
    #[instrument(skip(self, connection), err)]
    pub async fn create_hero<C: ConnectionTrait>(
        &self,
        name: &str,
        super_name: &str,
        connection: &C,
    ) -> Result<HeroHead, Error> {
        let name = validation::required("name", Some(name))?;
        let super_name = validation::required("super_name", Some(super_name))?;

        let hero = hero::ActiveModel {
            name: Set(name),
            super_name: Set(super_name),
            ..Default::default()
        }
        .insert(connection)
        .await?;

        log::debug!("created hero {}", hero.id);

        Ok(HeroHead::from_entity(&hero))
    }
}
