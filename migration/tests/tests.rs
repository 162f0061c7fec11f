use heroes_migration::{Migrator, MigratorTrait};
use heroes_test_context::HeroesContext;
use sea_orm::DatabaseConnection;
use test_context::test_context;
use test_log::test;

#[test_context(HeroesContext)]
#[test(tokio::test)]
async fn test_migrations(ctx: &HeroesContext) -> Result<(), anyhow::Error> {
    let db: &DatabaseConnection = &ctx.db;

    // the context already applied all migrations
    let migrations = Migrator::get_applied_migrations(db).await?;
    assert_eq!(migrations.len(), 3);

    ctx.db.refresh().await?;

    let reapplied = Migrator::get_applied_migrations(db).await?;
    assert_eq!(reapplied.len(), 3);

    Ok(())
}

#[test_context(HeroesContext)]
#[test(tokio::test)]
async fn only_up_migration(_ctx: &HeroesContext) -> Result<(), anyhow::Error> {
    // the initialization of the context already calls `up`
    Ok(())
}
