use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// One inbound SMS as received. Written once, never updated.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct FoodLogEntry {
    pub id: Uuid,
    pub raw_body: String,
    #[serde(with = "time::serde::rfc3339")]
    pub received_at: OffsetDateTime,
    pub sender_phone: String,
    /// `None` when the sender matched no patient; such logs are never aggregated.
    pub linked_patient_id: Option<Uuid>,
    pub parsed_food: Option<String>,
    pub quantity: Option<String>,
}

#[derive(Debug)]
pub struct NewFoodLog<'a> {
    pub raw_body: &'a str,
    pub sender_phone: &'a str,
    pub linked_patient_id: Option<Uuid>,
    pub parsed_food: Option<&'a str>,
    pub quantity: Option<&'a str>,
}
