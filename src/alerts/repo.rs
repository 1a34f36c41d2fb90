use anyhow::Context;
use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

use super::repo_types::Alert;

pub async fn insert_alert(
    db: &PgPool,
    patient_id: Uuid,
    healthcare_worker_id: Option<&str>,
    phone: &str,
    message: &str,
) -> anyhow::Result<Alert> {
    let row = sqlx::query_as::<_, Alert>(
        r#"
        INSERT INTO alerts_sent (patient_id, healthcare_worker_id, phone, message)
        VALUES ($1, $2, $3, $4)
        RETURNING id, patient_id, healthcare_worker_id, phone, message, triggered_at
        "#,
    )
    .bind(patient_id)
    .bind(healthcare_worker_id)
    .bind(phone)
    .bind(message)
    .fetch_one(db)
    .await
    .context("insert alert")?;
    Ok(row)
}

/// Alerts for every patient currently assigned to `worker_id`, newest first.
pub async fn list_for_worker_since(
    db: &PgPool,
    worker_id: &str,
    cutoff: OffsetDateTime,
) -> anyhow::Result<Vec<Alert>> {
    let rows = sqlx::query_as::<_, Alert>(
        r#"
        SELECT a.id, a.patient_id, a.healthcare_worker_id, a.phone, a.message, a.triggered_at
          FROM alerts_sent a
          JOIN patients p ON p.id = a.patient_id
         WHERE p.assigned_to = $1
           AND a.triggered_at >= $2
         ORDER BY a.triggered_at DESC
        "#,
    )
    .bind(worker_id)
    .bind(cutoff)
    .fetch_all(db)
    .await
    .context("list alerts for worker")?;
    Ok(rows)
}
