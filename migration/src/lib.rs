pub use sea_orm_migration::prelude::*;

mod m0000010_create_hero;
mod m0000020_create_power;
mod m0000030_create_hero_power;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m0000010_create_hero::Migration),
            Box::new(m0000020_create_power::Migration),
            Box::new(m0000030_create_hero_power::Migration),
        ]
    }
}
