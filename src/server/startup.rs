use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use sea_orm::DatabaseConnection;
use serenity::http::Http;
use time::Duration;
use tower_http::cors::CorsLayer;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    bot::discord::DiscordBridge,
    config::Config,
    error::{bridge::BridgeError, config::ConfigError, AppError},
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer, storing sessions in the application database.
///
/// Sessions expire after 7 days of inactivity.
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store.migrate().await?;

    Ok(SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// Builds the Discord-backed notification bridge.
///
/// Verifies the bot token by fetching the current bot user before the server starts
/// accepting requests.
pub async fn setup_discord_bridge(config: &Config) -> Result<DiscordBridge, AppError> {
    let http = Arc::new(Http::new(&config.discord_bot_token));

    let bot = http
        .get_current_user()
        .await
        .map_err(BridgeError::from)?;
    tracing::info!("Messaging bridge authenticated as {}", bot.name);

    Ok(DiscordBridge::new(
        http,
        config.discord_guild_id,
        config.bridge_timeout,
    ))
}

/// Allows the frontend at `APP_URL` to call the API with its session cookie.
pub fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let origin = config
        .app_url
        .trim_end_matches('/')
        .parse::<HeaderValue>()
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: "APP_URL".to_string(),
            value: config.app_url.clone(),
        })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true))
}
