use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{post, put},
    Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::{
    dto::{
        MessageResponse, PatientsQuery, RegisterPatientRequest, RegisteredPatientResponse,
        UpdatePatientRequest,
    },
    repo_types::{Patient, PatientUpdate},
    services::{register_patient, Registration},
};
use crate::{
    auth::extractors::AuthWorker,
    error::{bad_request, internal},
    state::AppState,
};

pub fn patient_routes() -> Router<AppState> {
    Router::new()
        .route("/patients", post(register).get(list_patients))
        .route("/patients/:id", put(update_patient).delete(delete_patient))
}

fn required(v: &Option<String>) -> Option<&str> {
    v.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterPatientRequest>,
) -> Result<(StatusCode, Json<RegisteredPatientResponse>), (StatusCode, String)> {
    let (Some(name), Some(phone), Some(language), Some(trimester)) = (
        required(&payload.name),
        required(&payload.phone),
        required(&payload.language),
        payload.trimester,
    ) else {
        warn!("patient registration missing fields");
        return Err(bad_request("Missing required fields"));
    };

    let (patient, sid) = register_patient(
        &state,
        Registration {
            name,
            phone,
            language,
            trimester,
            assigned_to: payload.assigned_to.as_deref(),
        },
    )
    .await
    .map_err(internal)?;

    Ok((
        StatusCode::CREATED,
        Json(RegisteredPatientResponse {
            id: patient.id,
            message: "SMS sent and logged.".into(),
            message_sid: sid,
        }),
    ))
}

#[instrument(skip(state))]
pub async fn list_patients(
    State(state): State<AppState>,
    Query(q): Query<PatientsQuery>,
) -> Result<Json<Vec<Patient>>, (StatusCode, String)> {
    let Some(assigned_to) = required(&q.assigned_to) else {
        return Err(bad_request("Missing assignedTo"));
    };
    let patients = Patient::list_by_assignee(&state.db, assigned_to)
        .await
        .map_err(internal)?;
    Ok(Json(patients))
}

#[instrument(skip(state, payload))]
pub async fn update_patient(
    State(state): State<AppState>,
    AuthWorker(worker_id): AuthWorker,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePatientRequest>,
) -> Result<Json<MessageResponse>, (StatusCode, String)> {
    let (Some(name), Some(age), Some(phone), Some(trimester)) = (
        required(&payload.name),
        payload.age,
        required(&payload.phone),
        payload.trimester,
    ) else {
        return Err(bad_request("Missing required fields"));
    };

    let updated = Patient::update(
        &state.db,
        id,
        PatientUpdate {
            name,
            age,
            phone,
            trimester,
        },
    )
    .await
    .map_err(internal)?;

    match updated {
        Some(p) => {
            info!(patient_id = %p.id, %worker_id, "patient updated");
            Ok(Json(MessageResponse::new("Patient updated successfully")))
        }
        None => Err((StatusCode::NOT_FOUND, "Patient not found".into())),
    }
}

#[instrument(skip(state))]
pub async fn delete_patient(
    State(state): State<AppState>,
    AuthWorker(worker_id): AuthWorker,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, (StatusCode, String)> {
    if !Patient::delete(&state.db, id).await.map_err(internal)? {
        return Err((StatusCode::NOT_FOUND, "Patient not found".into()));
    }
    info!(patient_id = %id, %worker_id, "patient deleted");
    Ok(Json(MessageResponse::new("Patient deleted successfully")))
}
