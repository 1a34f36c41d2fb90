use time::OffsetDateTime;
use tracing::debug;
use uuid::Uuid;

use super::summary::{analyze, window_cutoff, NutritionSummary};
use crate::{
    error::AnalysisError, food_logs::repo::list_for_patient_since,
    patients::repo_types::Patient, state::AppState,
};

/// Loads a patient's logs for the trailing window and analyzes them.
pub async fn nutrition_summary(
    st: &AppState,
    patient_id: Uuid,
    window_days: i64,
) -> Result<NutritionSummary, AnalysisError> {
    check_window(window_days)?;
    Patient::find_by_id(&st.db, patient_id)
        .await?
        .ok_or(AnalysisError::PatientNotFound(patient_id))?;
    summary_for(st, patient_id, window_days).await
}

/// As [`nutrition_summary`], for a patient already known to exist.
pub async fn summary_for(
    st: &AppState,
    patient_id: Uuid,
    window_days: i64,
) -> Result<NutritionSummary, AnalysisError> {
    let cutoff = window_cutoff(OffsetDateTime::now_utc(), window_days)?;
    let logs = list_for_patient_since(&st.db, patient_id, cutoff).await?;
    debug!(%patient_id, window_days, logs = logs.len(), "analyzing food logs");
    analyze(patient_id, &logs, window_days, &st.foods)
}

fn check_window(window_days: i64) -> Result<(), AnalysisError> {
    if window_days <= 0 {
        return Err(AnalysisError::InvalidWindow(window_days));
    }
    Ok(())
}

#[cfg(test)]
mod service_tests {
    use super::*;

    #[tokio::test]
    async fn rejects_window_before_touching_storage() {
        let st = AppState::fake();
        let err = nutrition_summary(&st, Uuid::new_v4(), -1).await.unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidWindow(-1)));
    }
}
