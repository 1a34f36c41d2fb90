use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::{instrument, warn};
use uuid::Uuid;

use super::services::nutrition_summary;
use super::summary::{NutritionSummary, DEFAULT_WINDOW_DAYS};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct WindowQuery {
    pub days: Option<i64>,
}

pub fn summary_routes() -> Router<AppState> {
    Router::new().route("/nutrition-summary/:patient_id", get(get_summary))
}

#[instrument(skip(state))]
pub async fn get_summary(
    State(state): State<AppState>,
    Path(patient_id): Path<Uuid>,
    Query(q): Query<WindowQuery>,
) -> Result<Json<NutritionSummary>, (StatusCode, String)> {
    let days = q.days.unwrap_or(DEFAULT_WINDOW_DAYS);
    let summary = nutrition_summary(&state, patient_id, days)
        .await
        .map_err(|e| {
            warn!(error = %e, %patient_id, days, "nutrition summary failed");
            e
        })?;
    Ok(Json(summary))
}

#[cfg(test)]
mod summary_handler_tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    #[tokio::test]
    async fn zero_day_window_is_bad_request() {
        let app = crate::app::build_app(AppState::fake());
        let res = app
            .oneshot(
                Request::get(format!(
                    "/api/v1/nutrition-summary/{}?days=0",
                    Uuid::new_v4()
                ))
                .body(Body::empty())
                .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
