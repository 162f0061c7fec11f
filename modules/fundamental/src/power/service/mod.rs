use crate::{
    power::model::{PowerDetails, PowerHead, PowerPatch, PowerSummary},
    validation, Error,
};
use heroes_common::db::Database;
use heroes_entity::power;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ConnectionTrait, EntityTrait, IntoActiveModel,
    QueryOrder, TransactionTrait,
};
use tracing::instrument;

pub struct PowerService {
    db: Database,
}

impl PowerService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// List all powers, ordered by their ID.
    #[instrument(skip_all, err)]
    pub async fn fetch_powers<C: ConnectionTrait>(
        &self,
        connection: &C,
    ) -> Result<Vec<PowerSummary>, Error> {
        let powers = power::Entity::find()
            .order_by_asc(power::Column::Id)
            .all(connection)
            .await?;

        Ok(PowerSummary::from_entities(&powers))
    }

    #[instrument(skip(self, connection), err)]
    pub async fn fetch_power<C: ConnectionTrait>(
        &self,
        id: i32,
        connection: &C,
    ) -> Result<Option<PowerDetails>, Error> {
        Ok(power::Entity::find_by_id(id)
            .one(connection)
            .await?
            .as_ref()
            .map(PowerDetails::from_entity))
    }

    /// Update the description of a power.
    ///
    /// The function will handle its own transaction. Nothing is written unless the new
    /// description is valid.
    #[instrument(skip(self), err)]
    pub async fn update_power(&self, id: i32, patch: PowerPatch) -> Result<PowerDetails, Error> {
        let tx = self.db.begin().await?;

        let Some(power) = power::Entity::find_by_id(id).one(&tx).await? else {
            return Err(Error::NotFound("Power"));
        };

        let description = match validation::power_description(patch.description.as_deref()) {
            Ok(description) => description,
            Err(violations) => {
                tx.rollback().await?;
                return Err(violations.into());
            }
        };

        let mut power = power.into_active_model();
        power.description = Set(description);
        let power = power.update(&tx).await?;

        tx.commit().await?;

        Ok(PowerDetails::from_entity(&power))
    }

    /// Create a new power, the description must be valid.
    #[instrument(skip(self, connection), err)]
    pub async fn create_power<C: ConnectionTrait>(
        &self,
        name: &str,
        description: &str,
        connection: &C,
    ) -> Result<PowerHead, Error> {
        let name = validation::required("name", Some(name))?;
        let description = validation::power_description(Some(description))?;

        let power = power::ActiveModel {
            name: Set(name),
            description: Set(description),
            ..Default::default()
        }
        .insert(connection)
        .await?;

        log::debug!("created power {}", power.id);

        Ok(PowerHead::from_entity(&power))
    }
}

#[cfg(test)]
mod test;
