use sea_orm::DatabaseConnection;

use crate::server::{
    data::{complaint::ComplaintRepository, group::GroupRepository},
    error::AppError,
    model::complaint::CreateComplaintParams,
};

pub struct ComplaintService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ComplaintService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Files a complaint against an existing club or event.
    pub async fn create(&self, params: CreateComplaintParams) -> Result<(), AppError> {
        if params.text.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Complaint text must not be empty".to_string(),
            ));
        }

        if GroupRepository::new(self.db)
            .find(params.kind, params.target_id)
            .await?
            .is_none()
        {
            return Err(AppError::entity_not_found(params.kind, params.target_id));
        }

        let complaint = ComplaintRepository::new(self.db).create(params).await?;

        tracing::info!(
            "User {} filed complaint {} against {:?} {}",
            complaint.user_id,
            complaint.id,
            complaint.target,
            complaint.target_id
        );

        Ok(())
    }
}
