use crate::test::caller;
use actix_http::StatusCode;
use actix_web::test::TestRequest;
use heroes_entity::strength::Strength;
use heroes_test_context::{
    call::{read_json, CallService},
    HeroesContext,
};
use serde_json::{json, Value};
use test_context::test_context;
use test_log::test;

#[test_context(HeroesContext)]
#[test(actix_web::test)]
async fn list_heroes(ctx: &HeroesContext) -> Result<(), anyhow::Error> {
    let app = caller(ctx).await?;

    let response: Value = app
        .call_and_read_body_json(TestRequest::get().uri("/heroes").to_request())
        .await;
    assert_eq!(response, json!([]));

    let kamala = ctx.hero("Kamala Khan", "Ms. Marvel").await?;
    let doreen = ctx.hero("Doreen Green", "Squirrel Girl").await?;
    let power = ctx
        .power("super strength", "gives the wielder super-human strengths")
        .await?;
    ctx.hero_power(&kamala, &power, Strength::Strong).await?;

    let response: Value = app
        .call_and_read_body_json(TestRequest::get().uri("/heroes").to_request())
        .await;

    // summaries never carry the powers
    assert_eq!(
        response,
        json!([
            {"id": kamala.id, "name": "Kamala Khan", "super_name": "Ms. Marvel"},
            {"id": doreen.id, "name": "Doreen Green", "super_name": "Squirrel Girl"},
        ])
    );

    Ok(())
}

#[test_context(HeroesContext)]
#[test(actix_web::test)]
async fn hero_with_two_powers(ctx: &HeroesContext) -> Result<(), anyhow::Error> {
    let app = caller(ctx).await?;

    let hero = ctx.hero("Kamala Khan", "Ms. Marvel").await?;
    let strength = ctx
        .power("super strength", "gives the wielder super-human strengths")
        .await?;
    let flight = ctx
        .power("flight", "gives the wielder the ability to fly through the skies")
        .await?;
    let first = ctx.hero_power(&hero, &strength, Strength::Strong).await?;
    let second = ctx.hero_power(&hero, &flight, Strength::Weak).await?;

    let uri = format!("/heroes/{}", hero.id);
    let response: Value = app
        .call_and_read_body_json(TestRequest::get().uri(&uri).to_request())
        .await;

    assert_eq!(
        response,
        json!({
            "id": hero.id,
            "name": "Kamala Khan",
            "super_name": "Ms. Marvel",
            "hero_powers": [
                {
                    "id": first.id,
                    "hero_id": hero.id,
                    "power_id": strength.id,
                    "strength": "Strong",
                    "power": {
                        "id": strength.id,
                        "name": "super strength",
                        "description": "gives the wielder super-human strengths",
                    },
                },
                {
                    "id": second.id,
                    "hero_id": hero.id,
                    "power_id": flight.id,
                    "strength": "Weak",
                    "power": {
                        "id": flight.id,
                        "name": "flight",
                        "description": "gives the wielder the ability to fly through the skies",
                    },
                },
            ],
        })
    );

    Ok(())
}

#[test_context(HeroesContext)]
#[test(actix_web::test)]
async fn hero_without_powers(ctx: &HeroesContext) -> Result<(), anyhow::Error> {
    let app = caller(ctx).await?;
    let hero = ctx.hero("Doreen Green", "Squirrel Girl").await?;

    let uri = format!("/heroes/{}", hero.id);
    let response: Value = app
        .call_and_read_body_json(TestRequest::get().uri(&uri).to_request())
        .await;
    assert_eq!(response["hero_powers"], json!([]));

    Ok(())
}

#[test_context(HeroesContext)]
#[test(actix_web::test)]
async fn hero_not_found(ctx: &HeroesContext) -> Result<(), anyhow::Error> {
    let app = caller(ctx).await?;

    let response = app
        .call_service(TestRequest::get().uri("/heroes/999").to_request())
        .await;

    assert_eq!(
        read_json(response).await,
        (StatusCode::NOT_FOUND, json!({"error": "Hero not found"}))
    );

    Ok(())
}
