use crate::test::caller;
use actix_http::StatusCode;
use actix_web::test::TestRequest;
use heroes_test_context::{
    call::{read_json, CallService},
    HeroesContext,
};
use serde_json::{json, Value};
use test_context::test_context;
use test_log::test;

const DESCRIPTION: &str = "gives the wielder super-human strengths";

#[test_context(HeroesContext)]
#[test(actix_web::test)]
async fn list_and_get(ctx: &HeroesContext) -> Result<(), anyhow::Error> {
    let app = caller(ctx).await?;

    let power = ctx.power("super strength", DESCRIPTION).await?;

    let response: Value = app
        .call_and_read_body_json(TestRequest::get().uri("/powers").to_request())
        .await;
    assert_eq!(
        response,
        json!([{"id": power.id, "name": "super strength", "description": DESCRIPTION}])
    );

    let uri = format!("/powers/{}", power.id);
    let response: Value = app
        .call_and_read_body_json(TestRequest::get().uri(&uri).to_request())
        .await;
    assert_eq!(
        response,
        json!({"id": power.id, "name": "super strength", "description": DESCRIPTION})
    );

    Ok(())
}

#[test_context(HeroesContext)]
#[test(actix_web::test)]
async fn power_not_found(ctx: &HeroesContext) -> Result<(), anyhow::Error> {
    let app = caller(ctx).await?;

    let response = app
        .call_service(TestRequest::get().uri("/powers/999").to_request())
        .await;
    assert_eq!(
        read_json(response).await,
        (StatusCode::NOT_FOUND, json!({"error": "Power not found"}))
    );

    let response = app
        .call_service(
            TestRequest::patch()
                .uri("/powers/999")
                .set_json(json!({"description": DESCRIPTION}))
                .to_request(),
        )
        .await;
    assert_eq!(
        read_json(response).await,
        (StatusCode::NOT_FOUND, json!({"error": "Power not found"}))
    );

    Ok(())
}

#[test_context(HeroesContext)]
#[test(actix_web::test)]
async fn update_is_idempotent(ctx: &HeroesContext) -> Result<(), anyhow::Error> {
    let app = caller(ctx).await?;
    let power = ctx.power("flight", DESCRIPTION).await?;
    let uri = format!("/powers/{}", power.id);

    let description = "lets the wielder soar above the clouds";
    let mut responses = vec![];
    for _ in 0..2 {
        let response = app
            .call_service(
                TestRequest::patch()
                    .uri(&uri)
                    .set_json(json!({"description": description}))
                    .to_request(),
            )
            .await;
        responses.push(read_json(response).await);
    }

    let expected = (
        StatusCode::OK,
        json!({"id": power.id, "name": "flight", "description": description}),
    );
    assert_eq!(responses, [expected.clone(), expected.clone()]);

    let fetched: Value = app
        .call_and_read_body_json(TestRequest::get().uri(&uri).to_request())
        .await;
    assert_eq!(fetched, expected.1);

    Ok(())
}

#[test_context(HeroesContext)]
#[test(actix_web::test)]
async fn short_description_is_rejected(ctx: &HeroesContext) -> Result<(), anyhow::Error> {
    let app = caller(ctx).await?;
    let power = ctx.power("flight", DESCRIPTION).await?;
    let uri = format!("/powers/{}", power.id);

    for (body, message) in [
        (
            json!({"description": "short"}),
            "description must be at least 20 characters long",
        ),
        (json!({"description": ""}), "Invalid or missing fields"),
        (json!({}), "Invalid or missing fields"),
    ] {
        let response = app
            .call_service(TestRequest::patch().uri(&uri).set_json(body).to_request())
            .await;
        assert_eq!(
            read_json(response).await,
            (StatusCode::BAD_REQUEST, json!({"errors": [message]}))
        );
    }

    let fetched: Value = app
        .call_and_read_body_json(TestRequest::get().uri(&uri).to_request())
        .await;
    assert_eq!(fetched["description"], json!(DESCRIPTION));

    Ok(())
}

#[test_context(HeroesContext)]
#[test(actix_web::test)]
async fn malformed_body(ctx: &HeroesContext) -> Result<(), anyhow::Error> {
    let app = caller(ctx).await?;
    let power = ctx.power("flight", DESCRIPTION).await?;
    let uri = format!("/powers/{}", power.id);

    // a description of the wrong type is treated as missing
    let response = app
        .call_service(
            TestRequest::patch()
                .uri(&uri)
                .set_json(json!({"description": 42}))
                .to_request(),
        )
        .await;
    assert_eq!(
        read_json(response).await,
        (
            StatusCode::BAD_REQUEST,
            json!({"errors": ["Invalid or missing fields"]})
        )
    );

    // a body which isn't JSON at all is rejected by the extractor
    let response = app
        .call_service(
            TestRequest::patch()
                .uri(&uri)
                .insert_header(("content-type", "application/json"))
                .set_payload("{\"description\": ")
                .to_request(),
        )
        .await;
    let (status, body) = read_json(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"].as_array().map(Vec::len), Some(1));

    let fetched: Value = app
        .call_and_read_body_json(TestRequest::get().uri(&uri).to_request())
        .await;
    assert_eq!(fetched["description"], json!(DESCRIPTION));

    Ok(())
}

#[test_context(HeroesContext)]
#[test(actix_web::test)]
async fn missing_power_wins_over_wrong_type(ctx: &HeroesContext) -> Result<(), anyhow::Error> {
    let app = caller(ctx).await?;

    let response = app
        .call_service(
            TestRequest::patch()
                .uri("/powers/999")
                .set_json(json!({"description": 42}))
                .to_request(),
        )
        .await;
    assert_eq!(
        read_json(response).await,
        (StatusCode::NOT_FOUND, json!({"error": "Power not found"}))
    );

    Ok(())
}
