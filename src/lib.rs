use axum::routing::get;
use axum::Router;
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod database;
pub mod error;
pub mod handlers;

/// Build the full router over an injected pool. Tests hand in an in-memory
/// database; `main` hands in the configured one.
pub fn app(pool: SqlitePool) -> Router {
    Router::new()
        .route("/", get(handlers::sitemap))
        .route("/health", get(handlers::health))
        .merge(user_routes())
        .merge(character_routes())
        .merge(planet_routes())
        .merge(favorite_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(pool)
}

fn user_routes() -> Router<SqlitePool> {
    use axum::routing::{delete, post};
    use handlers::users;

    Router::new()
        .route("/api/user", get(users::list).post(users::create))
        .route("/api/user/favorites", get(users::list_with_favorites))
        .route("/api/user/:id", delete(users::delete))
        .route("/api/register", post(users::register))
}

fn character_routes() -> Router<SqlitePool> {
    use handlers::characters;

    Router::new()
        .route("/api/character", get(characters::list).post(characters::create))
        .route(
            "/api/character/:id",
            get(characters::get)
                .put(characters::update)
                .delete(characters::delete),
        )
}

fn planet_routes() -> Router<SqlitePool> {
    use handlers::planets;

    Router::new()
        .route("/api/planet", get(planets::list).post(planets::create))
        .route(
            "/api/planet/:id",
            get(planets::get).put(planets::update).delete(planets::delete),
        )
}

fn favorite_routes() -> Router<SqlitePool> {
    use axum::routing::{delete, post};
    use handlers::favorites;

    Router::new()
        .route("/api/favorite/planet", post(favorites::create_planet))
        .route(
            "/api/favorite/planet/:user_id/:planet_id",
            delete(favorites::delete_planet),
        )
        .route("/api/favorite/character", post(favorites::create_character))
        .route(
            "/api/favorite/character/:user_id/:character_id",
            delete(favorites::delete_character),
        )
}
