use anyhow::Context;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use super::repo_types::{Appointment, NewAppointment, Notification};

const APPOINTMENT_COLUMNS: &str = "id, patient_name, patient_id, appointment_at, doctor_name, \
     condition, assigned_to, status, created_at, updated_at";

const NOTIFICATION_COLUMNS: &str = "id, kind, title, message, healthcare_worker_id, patient_id, \
     appointment_id, is_read, created_at";

pub async fn insert_appointment_tx(
    tx: &mut Transaction<'_, Postgres>,
    new: &NewAppointment<'_>,
) -> anyhow::Result<Appointment> {
    let sql = format!(
        r#"
        INSERT INTO appointments
               (patient_name, patient_id, appointment_at, doctor_name, condition, assigned_to, status)
        VALUES ($1, $2, $3, $4, $5, $6, 'scheduled')
        RETURNING {APPOINTMENT_COLUMNS}
        "#
    );
    let row = sqlx::query_as::<_, Appointment>(&sql)
        .bind(new.patient_name)
        .bind(new.patient_id)
        .bind(new.appointment_at)
        .bind(new.doctor_name)
        .bind(new.condition)
        .bind(new.assigned_to)
        .fetch_one(&mut **tx)
        .await
        .context("insert appointment")?;
    Ok(row)
}

/// Points an appointment at a different patient record.
pub async fn relink_patient_tx(
    tx: &mut Transaction<'_, Postgres>,
    appointment_id: Uuid,
    patient_id: Uuid,
) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        UPDATE appointments
           SET patient_id = $2, updated_at = now()
         WHERE id = $1
        "#,
    )
    .bind(appointment_id)
    .bind(patient_id)
    .execute(&mut **tx)
    .await
    .context("relink appointment patient")?;
    Ok(())
}

pub async fn insert_appointment_notification_tx(
    tx: &mut Transaction<'_, Postgres>,
    appt: &Appointment,
) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO notifications
               (kind, title, message, healthcare_worker_id, patient_id, appointment_id)
        VALUES ('appointment', 'New Appointment Scheduled', $1, $2, $3, $4)
        "#,
    )
    .bind(appointment_notice(&appt.doctor_name, &appt.patient_name))
    .bind(&appt.assigned_to)
    .bind(appt.patient_id)
    .bind(appt.id)
    .execute(&mut **tx)
    .await
    .context("insert appointment notification")?;
    Ok(())
}

pub fn appointment_notice(doctor_name: &str, patient_name: &str) -> String {
    format!("Appointment with {} for {}", doctor_name, patient_name)
}

pub async fn list_appointments(db: &PgPool, worker_id: &str) -> anyhow::Result<Vec<Appointment>> {
    let sql = format!(
        "SELECT {APPOINTMENT_COLUMNS} FROM appointments WHERE assigned_to = $1 ORDER BY appointment_at ASC"
    );
    let rows = sqlx::query_as::<_, Appointment>(&sql)
        .bind(worker_id)
        .fetch_all(db)
        .await
        .context("list appointments")?;
    Ok(rows)
}

/// Newest notifications for a worker.
pub async fn list_notifications(
    db: &PgPool,
    worker_id: &str,
    limit: i64,
) -> anyhow::Result<Vec<Notification>> {
    let sql = format!(
        r#"
        SELECT {NOTIFICATION_COLUMNS}
          FROM notifications
         WHERE healthcare_worker_id = $1
         ORDER BY created_at DESC
         LIMIT $2
        "#
    );
    let rows = sqlx::query_as::<_, Notification>(&sql)
        .bind(worker_id)
        .bind(limit)
        .fetch_all(db)
        .await
        .context("list notifications")?;
    Ok(rows)
}

#[cfg(test)]
mod appointment_repo_tests {
    use super::*;

    #[test]
    fn notice_names_doctor_and_patient() {
        assert_eq!(
            appointment_notice("Dr. Uwase", "Amina"),
            "Appointment with Dr. Uwase for Amina"
        );
    }
}
