use chrono::Utc;
use entity::complaint::ComplaintTarget;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::server::model::{complaint::CreateComplaintParams, group::EntityKind};

pub struct ComplaintRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ComplaintRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a complaint for moderators to review.
    pub async fn create(
        &self,
        params: CreateComplaintParams,
    ) -> Result<entity::complaint::Model, DbErr> {
        let target = match params.kind {
            EntityKind::Club => ComplaintTarget::Club,
            EntityKind::Event => ComplaintTarget::Event,
        };

        entity::complaint::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            target: ActiveValue::Set(target),
            target_id: ActiveValue::Set(params.target_id),
            text: ActiveValue::Set(params.text),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
