use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hero::Table)
                    .col(
                        ColumnDef::new(Hero::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Hero::Name).string().not_null())
                    .col(ColumnDef::new(Hero::SuperName).string().not_null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().if_exists().table(Hero::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Hero {
    Table,
    Id,
    Name,
    SuperName,
}
