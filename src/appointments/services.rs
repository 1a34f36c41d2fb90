use anyhow::Context;
use tracing::{debug, info};

use super::repo::{insert_appointment_notification_tx, insert_appointment_tx, relink_patient_tx};
use super::repo_types::{Appointment, NewAppointment};
use crate::{patients::repo_types::Patient, state::AppState};

/// Stores a scheduled appointment with its worker notification in one
/// transaction. When a registered patient carries exactly this name the
/// appointment is linked to that patient.
pub async fn schedule_appointment(
    st: &AppState,
    new: NewAppointment<'_>,
) -> anyhow::Result<Appointment> {
    let by_name = Patient::find_by_name(&st.db, new.patient_name).await?;

    let mut tx = st.db.begin().await.context("begin tx")?;
    let mut appt = insert_appointment_tx(&mut tx, &new).await?;
    insert_appointment_notification_tx(&mut tx, &appt).await?;
    if let Some(patient) = by_name.filter(|p| p.id != appt.patient_id) {
        debug!(appointment_id = %appt.id, patient_id = %patient.id, "appointment linked by name");
        relink_patient_tx(&mut tx, appt.id, patient.id).await?;
        appt.patient_id = patient.id;
    }
    tx.commit().await.context("commit tx")?;

    info!(appointment_id = %appt.id, assigned_to = %appt.assigned_to, "appointment scheduled");
    Ok(appt)
}
