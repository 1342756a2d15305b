mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn create_returns_plain_form_with_hashed_password() -> Result<()> {
    let app = common::test_app().await?;

    let (status, user) = common::post(
        &app,
        "/api/user",
        json!({ "name": "Ben", "email": "ben@tatooine.net", "password": "kenobi" }),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);

    assert_eq!(user["id"], 1);
    assert_eq!(user["name"], "Ben");
    assert_eq!(user["email"], "ben@tatooine.net");

    // Plain form exposes exactly id, name, email, password
    assert_eq!(user.as_object().unwrap().len(), 4);

    // Never stored or echoed as plaintext
    let password = user["password"].as_str().unwrap();
    assert_ne!(password, "kenobi");
    assert!(password.starts_with("$2"), "expected a bcrypt hash, got {}", password);

    Ok(())
}

#[tokio::test]
async fn create_requires_email_and_password() -> Result<()> {
    let app = common::test_app().await?;

    let (status, body) =
        common::post(&app, "/api/user", json!({ "password": "secret" })).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "email is required");

    let (status, body) =
        common::post(&app, "/api/user", json!({ "email": "a@b.c" })).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "password is required");

    Ok(())
}

#[tokio::test]
async fn duplicate_email_is_rejected() -> Result<()> {
    let app = common::test_app().await?;

    let body = json!({ "email": "leia@alderaan.gov", "password": "organa" });
    let (status, _) = common::post(&app, "/api/user", body.clone()).await?;
    assert_eq!(status, StatusCode::CREATED);

    let (status, response) = common::post(&app, "/api/user", body).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["msg"], "Email ya esta en uso !");

    Ok(())
}

#[tokio::test]
async fn register_rejects_reused_username_then_reused_email() -> Result<()> {
    let app = common::test_app().await?;

    let (status, user) = common::post(
        &app,
        "/api/register",
        json!({ "username": "luke", "password": "skywalker", "email": "luke@tatooine.net" }),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(user["name"], "luke");
    assert!(user["password"].as_str().unwrap().starts_with("$2"));

    // Same username, different email
    let (status, body) = common::post(
        &app,
        "/api/register",
        json!({ "username": "luke", "password": "x", "email": "other@tatooine.net" }),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "Username ya esta en uso !");

    // Different username, same email
    let (status, body) = common::post(
        &app,
        "/api/register",
        json!({ "username": "biggs", "password": "x", "email": "luke@tatooine.net" }),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "Email ya esta en uso !");

    Ok(())
}

#[tokio::test]
async fn register_requires_all_fields() -> Result<()> {
    let app = common::test_app().await?;

    let (status, body) = common::post(
        &app,
        "/api/register",
        json!({ "password": "x", "email": "a@b.c" }),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "username is required");

    Ok(())
}

#[tokio::test]
async fn delete_contract() -> Result<()> {
    let app = common::test_app().await?;

    common::post(
        &app,
        "/api/user",
        json!({ "email": "han@corellia.net", "password": "falcon" }),
    )
    .await?;

    let (status, body) = common::delete(&app, "/api/user/1").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": true, "msg": "User deleted" }));

    let (status, body) = common::delete(&app, "/api/user/1").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "status": false, "msg": "User doesn't exist" }));

    let (_, list) = common::get(&app, "/api/user").await?;
    assert_eq!(list, json!([]));

    Ok(())
}
