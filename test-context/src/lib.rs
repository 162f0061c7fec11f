#![allow(clippy::expect_used)]

pub mod call;

use heroes_common::{config, db};
use heroes_entity::{hero, hero_power, power, strength::Strength};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait, PaginatorTrait};
use std::env;
use test_context::AsyncTestContext;
use tracing::instrument;

/// A migrated database, private to a single test.
pub struct HeroesContext {
    pub db: db::Database,
}

impl HeroesContext {
    /// Insert a hero, bypassing any validation.
    pub async fn hero(&self, name: &str, super_name: &str) -> Result<hero::Model, anyhow::Error> {
        Ok(hero::ActiveModel {
            name: Set(name.to_string()),
            super_name: Set(super_name.to_string()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?)
    }

    /// Insert a power, bypassing any validation.
    pub async fn power(&self, name: &str, description: &str) -> Result<power::Model, anyhow::Error> {
        Ok(power::ActiveModel {
            name: Set(name.to_string()),
            description: Set(description.to_string()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?)
    }

    /// Give a hero a power, bypassing any validation.
    pub async fn hero_power(
        &self,
        hero: &hero::Model,
        power: &power::Model,
        strength: Strength,
    ) -> Result<hero_power::Model, anyhow::Error> {
        Ok(hero_power::ActiveModel {
            hero_id: Set(hero.id),
            power_id: Set(power.id),
            strength: Set(strength),
            ..Default::default()
        }
        .insert(&self.db)
        .await?)
    }

    /// The number of stored hero powers.
    pub async fn hero_power_count(&self) -> Result<u64, anyhow::Error> {
        Ok(hero_power::Entity::find().count(&self.db).await?)
    }
}

impl AsyncTestContext for HeroesContext {
    #[instrument]
    async fn setup() -> HeroesContext {
        let (config, mode) = if env::var("EXTERNAL_TEST_DB").is_ok() {
            log::warn!("Using external database from 'DB_*' env vars");
            let config = config::Database::from_env().expect("DB config from env");
            // an external database is shared between runs, start from a clean schema
            (config, db::CreationMode::RefreshSchema)
        } else {
            (config::Database::in_memory(), db::CreationMode::Default)
        };

        let db = db::Database::with_config(&config, mode)
            .await
            .expect("Configuring the database");

        HeroesContext { db }
    }

    async fn teardown(self) {
        if let Err(err) = self.db.close().await {
            log::warn!("Failed to close the database: {err}");
        }
    }
}
