use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendAlertRequest {
    pub patient_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerAlertsQuery {
    pub healthcare_worker_id: Option<String>,
    pub days: Option<i64>,
}
