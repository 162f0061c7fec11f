use super::PowerService;
use crate::{power::model::PowerPatch, validation::Violations, Error};
use heroes_test_context::HeroesContext;
use rstest::rstest;
use test_context::{test_context, AsyncTestContext};
use test_log::test;

const DESCRIPTION: &str = "gives the wielder super-human strengths";

fn patch(description: Option<&str>) -> PowerPatch {
    PowerPatch {
        description: description.map(ToString::to_string),
    }
}

#[test_context(HeroesContext)]
#[test(tokio::test)]
async fn all_powers(ctx: &HeroesContext) -> Result<(), anyhow::Error> {
    ctx.power("super strength", DESCRIPTION).await?;
    ctx.power("flight", "gives the wielder the ability to fly")
        .await?;

    let service = PowerService::new(ctx.db.clone());
    let powers = service.fetch_powers(&ctx.db).await?;

    assert_eq!(powers.len(), 2);
    assert_eq!(powers[0].head.name, "super strength");
    assert_eq!(powers[1].head.name, "flight");

    Ok(())
}

#[test_context(HeroesContext)]
#[test(tokio::test)]
async fn update_description(ctx: &HeroesContext) -> Result<(), anyhow::Error> {
    let power = ctx.power("flight", DESCRIPTION).await?;
    let service = PowerService::new(ctx.db.clone());

    let description = "lets the wielder soar above the clouds";
    let first = service
        .update_power(power.id, patch(Some(description)))
        .await?;
    assert_eq!(first.head.description, description);

    // applying the same change again yields the same result
    let second = service
        .update_power(power.id, patch(Some(description)))
        .await?;
    assert_eq!(first, second);

    let fetched = service.fetch_power(power.id, &ctx.db).await?;
    assert_eq!(fetched, Some(second));

    Ok(())
}

#[rstest]
#[case(None, "Invalid or missing fields")]
#[case(Some(""), "Invalid or missing fields")]
#[case(Some("short"), "description must be at least 20 characters long")]
#[tokio::test]
async fn invalid_description_is_not_stored(
    #[case] description: Option<&str>,
    #[case] message: &str,
) -> Result<(), anyhow::Error> {
    let ctx = HeroesContext::setup().await;

    let power = ctx.power("flight", DESCRIPTION).await?;
    let service = PowerService::new(ctx.db.clone());

    let result = service.update_power(power.id, patch(description)).await;
    match result {
        Err(Error::Validation(violations)) => assert_eq!(violations, Violations::new(message)),
        other => panic!("unexpected result: {other:?}"),
    }

    let fetched = service
        .fetch_power(power.id, &ctx.db)
        .await?
        .expect("power must still exist");
    assert_eq!(fetched.head.description, DESCRIPTION);

    ctx.teardown().await;

    Ok(())
}

#[test_context(HeroesContext)]
#[test(tokio::test)]
async fn update_missing_power(ctx: &HeroesContext) -> Result<(), anyhow::Error> {
    let service = PowerService::new(ctx.db.clone());

    let result = service.update_power(999, patch(Some(DESCRIPTION))).await;
    assert!(matches!(result, Err(Error::NotFound("Power"))));

    // a missing power wins over an invalid description
    let result = service.update_power(999, patch(Some("short"))).await;
    assert!(matches!(result, Err(Error::NotFound("Power"))));

    Ok(())
}

#[test_context(HeroesContext)]
#[test(tokio::test)]
async fn create_validates(ctx: &HeroesContext) -> Result<(), anyhow::Error> {
    let service = PowerService::new(ctx.db.clone());

    let created = service.create_power("flight", DESCRIPTION, &ctx.db).await?;
    assert_eq!(created.description, DESCRIPTION);

    let result = service.create_power("speed", "too short", &ctx.db).await;
    assert!(matches!(result, Err(Error::Validation(_))));

    let result = service.create_power("", DESCRIPTION, &ctx.db).await;
    assert!(matches!(result, Err(Error::Validation(_))));

    assert_eq!(service.fetch_powers(&ctx.db).await?.len(), 1);

    Ok(())
}
