mod common;

use anyhow::Result;
use axum::http::StatusCode;
use axum::Router;
use serde_json::json;

/// One user, one planet, one character on that planet. Ids are all 1.
async fn seed(app: &Router) -> Result<()> {
    let (status, _) = common::post(
        app,
        "/api/user",
        json!({ "name": "luke", "email": "luke@tatooine.net", "password": "skywalker" }),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = common::post(app, "/api/planet", json!({ "name": "Tatooine" })).await?;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = common::post(
        app,
        "/api/character",
        json!({ "name": "Luke", "planet_id": 1 }),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);

    Ok(())
}

#[tokio::test]
async fn favorites_show_up_nested_under_the_user() -> Result<()> {
    let app = common::test_app().await?;
    seed(&app).await?;

    let (status, favorite) = common::post(
        &app,
        "/api/favorite/planet",
        json!({ "user_id": 1, "planet_id": 1 }),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(favorite, json!({ "user_id": 1, "planet_id": 1 }));

    let (status, favorite) = common::post(
        &app,
        "/api/favorite/character",
        json!({ "user_id": 1, "character_id": 1 }),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(favorite, json!({ "user_id": 1, "character_id": 1 }));

    let (status, users) = common::get(&app, "/api/user/favorites").await?;
    assert_eq!(status, StatusCode::OK);

    let user = &users[0];
    assert_eq!(user["id"], 1);
    assert_eq!(user["name"], "luke");
    assert_eq!(user["favorites_planets"][0]["name"], "Tatooine");
    assert_eq!(user["favorites_characters"][0]["name"], "Luke");
    assert_eq!(user["favorites_characters"][0]["homeworld"], "Tatooine");

    Ok(())
}

#[tokio::test]
async fn favorite_delete_matches_on_both_keys() -> Result<()> {
    let app = common::test_app().await?;
    seed(&app).await?;

    common::post(&app, "/api/favorite/planet", json!({ "user_id": 1, "planet_id": 1 })).await?;

    // Wrong pair first
    let (status, body) = common::delete(&app, "/api/favorite/planet/1/2").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "status": false, "msg": "Favorite Planet doesn't exist" }));

    let (status, body) = common::delete(&app, "/api/favorite/planet/1/1").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": true, "msg": "Favorite Planet deleted" }));

    let (status, _) = common::delete(&app, "/api/favorite/planet/1/1").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn favorite_character_delete_contract() -> Result<()> {
    let app = common::test_app().await?;
    seed(&app).await?;

    common::post(
        &app,
        "/api/favorite/character",
        json!({ "user_id": 1, "character_id": 1 }),
    )
    .await?;

    let (status, body) = common::delete(&app, "/api/favorite/character/1/1").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": true, "msg": "Favorite Character deleted" }));

    let (status, body) = common::delete(&app, "/api/favorite/character/1/1").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "status": false, "msg": "Favorite Character doesn't exist" }));

    Ok(())
}

#[tokio::test]
async fn dangling_references_are_reported_as_missing_entities() -> Result<()> {
    let app = common::test_app().await?;
    seed(&app).await?;

    let (status, body) = common::post(
        &app,
        "/api/favorite/planet",
        json!({ "user_id": 9, "planet_id": 1 }),
    )
    .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["msg"], "User doesn't exist");

    let (status, body) = common::post(
        &app,
        "/api/favorite/character",
        json!({ "user_id": 1, "character_id": 9 }),
    )
    .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["msg"], "Character doesn't exist");

    Ok(())
}

#[tokio::test]
async fn duplicate_favorite_is_rejected() -> Result<()> {
    let app = common::test_app().await?;
    seed(&app).await?;

    let body = json!({ "user_id": 1, "planet_id": 1 });
    common::post(&app, "/api/favorite/planet", body.clone()).await?;

    let (status, response) = common::post(&app, "/api/favorite/planet", body).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["msg"], "Planet is already a favorite");

    Ok(())
}

#[tokio::test]
async fn deleting_a_user_cascades_its_favorite_rows() -> Result<()> {
    let app = common::test_app().await?;
    seed(&app).await?;

    common::post(&app, "/api/favorite/planet", json!({ "user_id": 1, "planet_id": 1 })).await?;
    common::post(
        &app,
        "/api/favorite/character",
        json!({ "user_id": 1, "character_id": 1 }),
    )
    .await?;

    let (status, _) = common::delete(&app, "/api/user/1").await?;
    assert_eq!(status, StatusCode::OK);

    // Join rows are gone with the user
    let (status, _) = common::delete(&app, "/api/favorite/planet/1/1").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = common::delete(&app, "/api/favorite/character/1/1").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}
