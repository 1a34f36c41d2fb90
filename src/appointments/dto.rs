use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    pub patient_name: Option<String>,
    pub patient_id: Option<Uuid>,
    /// RFC 3339 timestamp.
    pub appointment_date_time: Option<String>,
    pub doctor_name: Option<String>,
    pub condition: Option<String>,
    pub assigned_to: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerQuery {
    pub healthcare_worker_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreatedAppointmentResponse {
    pub id: Uuid,
    pub message: String,
}
