use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    bot::NotificationBridge, error::AppError, model::group::EntityKind,
    service::chat::ChatService,
};

/// Entities of each kind retried per run.
const BACKFILL_BATCH: u64 = 20;

/// Starts the chat backfill scheduler
///
/// Each run retries chat provisioning for clubs and events created while the
/// messaging provider was unavailable.
///
/// # Arguments
/// - `db`: Database connection
/// - `bridge`: Messaging provider used to create the chats
/// - `schedule`: Cron expression with seconds, e.g. `0 */5 * * * *`
pub async fn start_scheduler(
    db: DatabaseConnection,
    bridge: Arc<dyn NotificationBridge>,
    schedule: &str,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(schedule, move |_uuid, _lock| {
        let db = db.clone();
        let bridge = bridge.clone();

        Box::pin(async move {
            if let Err(e) = backfill_chats(&db, bridge.as_ref()).await {
                tracing::error!("Error backfilling group chats: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Chat backfill scheduler started");

    Ok(())
}

/// Provisions chats for up to one batch of pending clubs and one of pending events.
pub async fn backfill_chats(
    db: &DatabaseConnection,
    bridge: &dyn NotificationBridge,
) -> Result<(), AppError> {
    let service = ChatService::new(db, bridge);

    for kind in [EntityKind::Club, EntityKind::Event] {
        let provisioned = service.backfill(kind, BACKFILL_BATCH).await?;
        if provisioned > 0 {
            tracing::info!("Provisioned {} pending {} chats", provisioned, kind);
        }
    }

    Ok(())
}
