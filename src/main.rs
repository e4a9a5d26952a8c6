mod model;
mod server;

use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::server::{
    bot::NotificationBridge, config::Config, error::AppError, router, scheduler::chat_backfill,
    startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "carclub=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let cors = startup::cors_layer(&config)?;
    let bridge: Arc<dyn NotificationBridge> =
        Arc::new(startup::setup_discord_bridge(&config).await?);

    tracing::info!("Starting server");

    // Start chat backfill scheduler
    let scheduler_db = db.clone();
    let scheduler_bridge = bridge.clone();
    let schedule = config.chat_backfill_schedule.clone();
    tokio::spawn(async move {
        if let Err(e) =
            chat_backfill::start_scheduler(scheduler_db, scheduler_bridge, &schedule).await
        {
            tracing::error!("Chat backfill scheduler error: {}", e);
        }
    });

    let app = router::router()
        .with_state(AppState::new(db, bridge, config.app_url.clone()))
        .layer(session)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
