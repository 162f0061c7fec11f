use crate::{
    hero_power::model::{HeroPowerDetails, NewHeroPower, ValidatedHeroPower},
    Error,
};
use heroes_common::db::{Database, DatabaseErrors};
use heroes_entity::{hero, hero_power, power};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, ConnectionTrait, EntityTrait, TransactionTrait};
use tracing::instrument;

pub struct HeroPowerService {
    db: Database,
}

impl HeroPowerService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Give a hero a power.
    ///
    /// The request is validated before a transaction is started. The function will handle its
    /// own transaction, which is rolled back on any failure.
    #[instrument(skip(self), err)]
    pub async fn create_hero_power(&self, new: NewHeroPower) -> Result<HeroPowerDetails, Error> {
        let new = new.validate()?;

        let tx = self.db.begin().await?;

        match self.insert_hero_power(new, &tx).await {
            Ok(created) => {
                tx.commit().await?;
                Ok(created)
            }
            Err(err) => {
                tx.rollback().await?;
                Err(err)
            }
        }
    }

    /// Insert an already validated hero power, using the provided connection.
    ///
    /// Both the hero and the power must exist.
    pub async fn insert_hero_power<C: ConnectionTrait>(
        &self,
        new: ValidatedHeroPower,
        connection: &C,
    ) -> Result<HeroPowerDetails, Error> {
        let hero = hero::Entity::find_by_id(new.hero_id)
            .one(connection)
            .await?
            .ok_or_else(|| Error::Integrity(format!("Hero {} does not exist", new.hero_id)))?;

        let power = power::Entity::find_by_id(new.power_id)
            .one(connection)
            .await?
            .ok_or_else(|| Error::Integrity(format!("Power {} does not exist", new.power_id)))?;

        let hero_power = insert_checked(new, connection).await?;

        log::debug!(
            "hero {} now has power {} ({})",
            hero.id,
            power.id,
            hero_power.strength
        );

        Ok(HeroPowerDetails::from_entity(&hero_power, &hero, &power))
    }
}

/// Store the row, reporting a foreign key violation raised by the store as an integrity error.
async fn insert_checked<C: ConnectionTrait>(
    new: ValidatedHeroPower,
    connection: &C,
) -> Result<hero_power::Model, Error> {
    hero_power::ActiveModel {
        hero_id: Set(new.hero_id),
        power_id: Set(new.power_id),
        strength: Set(new.strength),
        ..Default::default()
    }
    .insert(connection)
    .await
    .map_err(|err| {
        if err.is_foreign_key_violation() {
            Error::Integrity(format!(
                "Hero {} or power {} does not exist",
                new.hero_id, new.power_id
            ))
        } else {
            err.into()
        }
    })
}
