use crate::server::model::group::EntityKind;

/// A complaint filed by a user against a club or event.
#[derive(Debug, Clone)]
pub struct CreateComplaintParams {
    pub user_id: i64,
    pub kind: EntityKind,
    pub target_id: i32,
    pub text: String,
}
