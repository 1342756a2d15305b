use starwars_api::{app, config, database};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL and PORT
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();

    let pool = database::connect(&config.database_url).await?;
    database::init_schema(&pool).await?;

    let app = app(pool);

    let bind_addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!("Star Wars API listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
