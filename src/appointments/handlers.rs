use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use time::{format_description::well_known::Rfc3339, OffsetDateTime};
use tracing::{instrument, warn};

use super::{
    dto::{CreateAppointmentRequest, CreatedAppointmentResponse, WorkerQuery},
    repo::{list_appointments, list_notifications},
    repo_types::{Appointment, NewAppointment, Notification},
    services::schedule_appointment,
};
use crate::{
    auth::extractors::AuthWorker,
    error::{bad_request, internal},
    state::AppState,
};

const NOTIFICATION_LIMIT: i64 = 50;

pub fn appointment_routes() -> Router<AppState> {
    Router::new()
        .route("/appointments", get(get_appointments).post(create_appointment))
        .route("/notifications", get(get_notifications))
}

fn non_blank(v: &Option<String>) -> Option<&str> {
    v.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

#[instrument(skip(state, payload))]
pub async fn create_appointment(
    State(state): State<AppState>,
    AuthWorker(worker_id): AuthWorker,
    Json(payload): Json<CreateAppointmentRequest>,
) -> Result<(StatusCode, HeaderMap, Json<CreatedAppointmentResponse>), (StatusCode, String)> {
    let (
        Some(patient_name),
        Some(patient_id),
        Some(when),
        Some(doctor_name),
        Some(condition),
        Some(assigned_to),
    ) = (
        non_blank(&payload.patient_name),
        payload.patient_id,
        non_blank(&payload.appointment_date_time),
        non_blank(&payload.doctor_name),
        non_blank(&payload.condition),
        non_blank(&payload.assigned_to),
    )
    else {
        warn!(%worker_id, "appointment missing fields");
        return Err(bad_request("Missing required fields"));
    };

    let appointment_at = OffsetDateTime::parse(when, &Rfc3339)
        .map_err(|_| bad_request("appointmentDateTime must be RFC 3339"))?;

    let appt = schedule_appointment(
        &state,
        NewAppointment {
            patient_name,
            patient_id,
            appointment_at,
            doctor_name,
            condition,
            assigned_to,
        },
    )
    .await
    .map_err(internal)?;

    let mut headers = HeaderMap::new();
    if let Ok(location) = format!("/appointments/{}", appt.id).parse() {
        headers.insert(axum::http::header::LOCATION, location);
    }

    Ok((
        StatusCode::CREATED,
        headers,
        Json(CreatedAppointmentResponse {
            id: appt.id,
            message: "Appointment created successfully".into(),
        }),
    ))
}

#[instrument(skip(state))]
pub async fn get_appointments(
    State(state): State<AppState>,
    AuthWorker(_): AuthWorker,
    Query(q): Query<WorkerQuery>,
) -> Result<Json<Vec<Appointment>>, (StatusCode, String)> {
    let Some(worker_id) = non_blank(&q.healthcare_worker_id) else {
        return Err(bad_request("Missing healthcareWorkerId"));
    };
    let rows = list_appointments(&state.db, worker_id)
        .await
        .map_err(internal)?;
    Ok(Json(rows))
}

#[instrument(skip(state))]
pub async fn get_notifications(
    State(state): State<AppState>,
    AuthWorker(_): AuthWorker,
    Query(q): Query<WorkerQuery>,
) -> Result<Json<Vec<Notification>>, (StatusCode, String)> {
    let Some(worker_id) = non_blank(&q.healthcare_worker_id) else {
        return Err(bad_request("Missing healthcareWorkerId"));
    };
    let rows = list_notifications(&state.db, worker_id, NOTIFICATION_LIMIT)
        .await
        .map_err(internal)?;
    Ok(Json(rows))
}
