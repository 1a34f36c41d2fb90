use tracing::info;
use uuid::Uuid;

use super::repo::insert_alert;
use super::repo_types::Alert;
use crate::{
    error::AnalysisError,
    nutrition::{alert::decide_alert, services::summary_for, summary::DEFAULT_WINDOW_DAYS},
    patients::{repo_types::Patient, services::UNASSIGNED},
    sms::{repo::SmsKind, services::send_and_log},
    state::AppState,
};

#[derive(Debug)]
pub enum AlertOutcome {
    NoFlags,
    Sent(Alert),
}

/// Evaluates the patient's last week and, when anything is flagged, texts
/// the top concern to the patient and records the alert.
pub async fn send_alert(st: &AppState, patient_id: Uuid) -> Result<AlertOutcome, AnalysisError> {
    let patient = Patient::find_by_id(&st.db, patient_id)
        .await?
        .ok_or(AnalysisError::PatientNotFound(patient_id))?;

    let summary = summary_for(st, patient_id, DEFAULT_WINDOW_DAYS).await?;
    let Some(alert) = decide_alert(&summary) else {
        info!(%patient_id, "no critical flags, alert skipped");
        return Ok(AlertOutcome::NoFlags);
    };

    send_and_log(st, &patient.phone, &alert.body, SmsKind::Alert).await?;

    let worker = Some(patient.assigned_to.as_str()).filter(|w| *w != UNASSIGNED);
    let stored = insert_alert(&st.db, patient_id, worker, &patient.phone, &alert.body).await?;
    info!(%patient_id, alert_id = %stored.id, "nutrition alert sent");
    Ok(AlertOutcome::Sent(stored))
}
