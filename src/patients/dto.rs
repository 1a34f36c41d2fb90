use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for patient registration. Fields are optional so that
/// missing ones produce a 400 rather than a deserialization rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPatientRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub language: Option<String>,
    pub trimester: Option<i32>,
    pub assigned_to: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePatientRequest {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub phone: Option<String>,
    pub trimester: Option<i32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientsQuery {
    pub assigned_to: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredPatientResponse {
    pub id: Uuid,
    pub message: String,
    pub message_sid: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
