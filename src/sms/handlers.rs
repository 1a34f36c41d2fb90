use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use tracing::instrument;

use super::repo::list_recent;
use super::repo_types::SmsLog;
use crate::{error::internal, state::AppState};

const RECENT_LIMIT: i64 = 50;

pub fn sms_log_routes() -> Router<AppState> {
    Router::new().route("/sms-logs", get(list_sms_logs))
}

#[instrument(skip(state))]
pub async fn list_sms_logs(
    State(state): State<AppState>,
) -> Result<Json<Vec<SmsLog>>, (StatusCode, String)> {
    let logs = list_recent(&state.db, RECENT_LIMIT).await.map_err(internal)?;
    Ok(Json(logs))
}
