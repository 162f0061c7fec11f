use crate::{m0000010_create_hero::Hero, m0000020_create_power::Power};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HeroPower::Table)
                    .col(
                        ColumnDef::new(HeroPower::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(HeroPower::HeroId).integer().not_null())
                    .col(ColumnDef::new(HeroPower::PowerId).integer().not_null())
                    // values are restricted by the application, see `Strength`
                    .col(ColumnDef::new(HeroPower::Strength).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from_col(HeroPower::HeroId)
                            .to(Hero::Table, Hero::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from_col(HeroPower::PowerId)
                            .to(Power::Table, Power::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(HeroPower::Table)
                    .name(Indexes::HeroPowerHeroIdIdx.to_string())
                    .col(HeroPower::HeroId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .if_exists()
                    .table(HeroPower::Table)
                    .name(Indexes::HeroPowerHeroIdIdx.to_string())
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().if_exists().table(HeroPower::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum HeroPower {
    Table,
    Id,
    HeroId,
    PowerId,
    Strength,
}

#[derive(DeriveIden)]
pub enum Indexes {
    HeroPowerHeroIdIdx,
}
