use std::sync::Arc;

use auth::Authenticator;
use chrono::Duration;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use weather_api::config::Config;
use weather_api::domain::item::service::ItemService;
use weather_api::domain::user::service::UserService;
use weather_api::domain::weather::service::WeatherService;
use weather_api::inbound::http::router::create_router;
use weather_api::outbound::repositories::PostgresItemRepository;
use weather_api::outbound::repositories::PostgresUserRepository;
use weather_api::outbound::weather::OpenWeatherMapClient;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weather_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "weather-api",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_lifetime_minutes = config.jwt.expiration_minutes,
        weather_base_url = %config.weather.base_url,
        weather_api_key_configured = config.weather.api_key.is_some(),
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(
        config.jwt.secret.as_bytes(),
        Duration::minutes(config.jwt.expiration_minutes),
    ));

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let item_repository = Arc::new(PostgresItemRepository::new(pg_pool));
    let weather_client = Arc::new(OpenWeatherMapClient::new(&config.weather)?);

    let user_service = Arc::new(UserService::new(user_repository, authenticator));
    let item_service = Arc::new(ItemService::new(item_repository));
    let weather_service = Arc::new(WeatherService::new(weather_client));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(user_service, item_service, weather_service);
    axum::serve(http_listener, http_application).await?;

    tracing::info!("Server exited successfully");

    Ok(())
}
