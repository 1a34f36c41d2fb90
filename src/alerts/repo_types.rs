use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// A sent nutrition alert. Immutable once stored.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub healthcare_worker_id: Option<String>,
    pub phone: String,
    pub message: String,
    #[serde(with = "time::serde::rfc3339")]
    pub triggered_at: OffsetDateTime,
}
