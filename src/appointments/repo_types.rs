use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Uuid,
    pub patient_name: String,
    pub patient_id: Uuid,
    #[serde(rename = "appointmentDateTime", with = "time::serde::rfc3339")]
    pub appointment_at: OffsetDateTime,
    pub doctor_name: String,
    pub condition: String,
    pub assigned_to: String,
    /// scheduled, completed or cancelled
    pub status: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub message: String,
    pub healthcare_worker_id: String,
    pub patient_id: Option<Uuid>,
    pub appointment_id: Option<Uuid>,
    pub is_read: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug)]
pub struct NewAppointment<'a> {
    pub patient_name: &'a str,
    pub patient_id: Uuid,
    pub appointment_at: OffsetDateTime,
    pub doctor_name: &'a str,
    pub condition: &'a str,
    pub assigned_to: &'a str,
}
