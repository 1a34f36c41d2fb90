use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use time::OffsetDateTime;
use tracing::{debug, instrument, warn};

use super::{
    dto::{SendAlertRequest, WorkerAlertsQuery},
    repo::list_for_worker_since,
    repo_types::Alert,
    services::{send_alert, AlertOutcome},
};
use crate::{
    auth::extractors::AuthWorker,
    error::{bad_request, internal, AnalysisError},
    nutrition::summary::{window_cutoff, DEFAULT_WINDOW_DAYS},
    patients::dto::MessageResponse,
    state::AppState,
};

pub fn alert_routes() -> Router<AppState> {
    Router::new()
        .route("/send-alert", post(trigger_alert))
        .route("/hcw-alerts", get(worker_alerts))
}

#[instrument(skip(state, payload))]
pub async fn trigger_alert(
    State(state): State<AppState>,
    Json(payload): Json<SendAlertRequest>,
) -> Result<Json<MessageResponse>, (StatusCode, String)> {
    let Some(patient_id) = payload.patient_id else {
        return Err(bad_request("Missing patientId"));
    };

    match send_alert(&state, patient_id).await {
        Ok(AlertOutcome::NoFlags) => Ok(Json(MessageResponse::new(
            "No critical flags, no SMS sent.",
        ))),
        Ok(AlertOutcome::Sent(alert)) => {
            debug!(alert_id = %alert.id, %patient_id, "alert recorded");
            Ok(Json(MessageResponse::new("Alert sent successfully.")))
        }
        Err(e) => {
            warn!(error = %e, %patient_id, "send alert failed");
            Err(e.into())
        }
    }
}

#[instrument(skip(state))]
pub async fn worker_alerts(
    State(state): State<AppState>,
    AuthWorker(_): AuthWorker,
    Query(q): Query<WorkerAlertsQuery>,
) -> Result<Json<Vec<Alert>>, (StatusCode, String)> {
    let Some(worker_id) = q.healthcare_worker_id.filter(|s| !s.trim().is_empty()) else {
        return Err(bad_request("Missing healthcareWorkerId"));
    };
    let days = q.days.unwrap_or(DEFAULT_WINDOW_DAYS);
    if days <= 0 {
        return Err(AnalysisError::InvalidWindow(days).into());
    }

    let cutoff = window_cutoff(OffsetDateTime::now_utc(), days)?;
    let alerts = list_for_worker_since(&state.db, &worker_id, cutoff)
        .await
        .map_err(internal)?;
    Ok(Json(alerts))
}

#[cfg(test)]
mod alert_handler_tests {
    use super::*;
    use crate::auth::claims::Claims;
    use axum::body::Body;
    use axum::http::{header, Request};
    use jsonwebtoken::{encode, EncodingKey, Header};
    use tower::ServiceExt;

    fn bearer() -> String {
        let now = OffsetDateTime::now_utc().unix_timestamp();
        let claims = Claims {
            sub: "hcw-1".into(),
            iat: now as usize,
            exp: (now + 300) as usize,
            iss: "test".into(),
            aud: "test".into(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test"),
        )
        .unwrap();
        format!("Bearer {}", token)
    }

    async fn worker_alerts_status(days: &str) -> StatusCode {
        let app = crate::app::build_app(AppState::fake());
        app.oneshot(
            Request::get(format!(
                "/api/v1/hcw-alerts?healthcareWorkerId=hcw-1&days={}",
                days
            ))
            .header(header::AUTHORIZATION, bearer())
            .body(Body::empty())
            .unwrap(),
        )
        .await
        .unwrap()
        .status()
    }

    #[tokio::test]
    async fn send_alert_requires_patient_id() {
        let app = crate::app::build_app(AppState::fake());
        let res = app
            .oneshot(
                Request::post("/api/v1/send-alert")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn worker_alerts_require_token() {
        let app = crate::app::build_app(AppState::fake());
        let res = app
            .oneshot(
                Request::get("/api/v1/hcw-alerts?healthcareWorkerId=hcw-1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn non_positive_days_is_bad_request() {
        assert_eq!(worker_alerts_status("0").await, StatusCode::BAD_REQUEST);
        assert_eq!(worker_alerts_status("-2").await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn days_beyond_calendar_range_is_bad_request() {
        assert_eq!(
            worker_alerts_status("1000000000").await,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            worker_alerts_status(&i64::MAX.to_string()).await,
            StatusCode::BAD_REQUEST
        );
    }
}
