use anyhow::Context;
use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

use super::repo_types::{FoodLogEntry, NewFoodLog};

pub async fn insert_food_log(db: &PgPool, log: NewFoodLog<'_>) -> anyhow::Result<FoodLogEntry> {
    let row = sqlx::query_as::<_, FoodLogEntry>(
        r#"
        INSERT INTO food_logs (raw_body, sender_phone, linked_patient_id, parsed_food, quantity)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, raw_body, received_at, sender_phone, linked_patient_id, parsed_food, quantity
        "#,
    )
    .bind(log.raw_body)
    .bind(log.sender_phone)
    .bind(log.linked_patient_id) // Option<Uuid> → NULL allowed
    .bind(log.parsed_food)
    .bind(log.quantity)
    .fetch_one(db)
    .await
    .context("insert food log")?;
    Ok(row)
}

/// Logs linked to `patient_id` received at or after `cutoff`.
pub async fn list_for_patient_since(
    db: &PgPool,
    patient_id: Uuid,
    cutoff: OffsetDateTime,
) -> anyhow::Result<Vec<FoodLogEntry>> {
    let rows = sqlx::query_as::<_, FoodLogEntry>(
        r#"
        SELECT id, raw_body, received_at, sender_phone, linked_patient_id, parsed_food, quantity
          FROM food_logs
         WHERE linked_patient_id = $1
           AND received_at >= $2
         ORDER BY received_at ASC
        "#,
    )
    .bind(patient_id)
    .bind(cutoff)
    .fetch_all(db)
    .await
    .context("list food logs for patient")?;
    Ok(rows)
}
