use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// A tracked unit of work, owned by exactly one user.
///
/// `status` is an opaque string chosen by the caller; there is no enumerated
/// state machine and no validated transitions. Serialized in camelCase to
/// match the wire contract (`completionDate` etc.).
#[derive(Debug, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub status: String,
    pub completion_date: NaiveDate,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating or updating a task. All three fields are required;
/// updates overwrite the whole mutable record.
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TaskInput {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "status is required"))]
    pub status: String,

    /// Wire form is an ISO date, e.g. `"2024-01-01"`.
    pub completion_date: NaiveDate,
}
