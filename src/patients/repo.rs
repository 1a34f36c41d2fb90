use anyhow::Context;
use sqlx::PgPool;
use uuid::Uuid;

use super::repo_types::{NewPatient, Patient, PatientUpdate};

const PATIENT_COLUMNS: &str =
    "id, name, phone, language, trimester, age, assigned_to, created_at, updated_at";

impl Patient {
    pub async fn create(db: &PgPool, new: NewPatient<'_>) -> anyhow::Result<Patient> {
        let sql = format!(
            r#"
            INSERT INTO patients (name, phone, language, trimester, assigned_to)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {PATIENT_COLUMNS}
            "#
        );
        let patient = sqlx::query_as::<_, Patient>(&sql)
            .bind(new.name)
            .bind(new.phone)
            .bind(new.language)
            .bind(new.trimester)
            .bind(new.assigned_to)
            .fetch_one(db)
            .await
            .context("insert patient")?;
        Ok(patient)
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<Patient>> {
        let sql = format!("SELECT {PATIENT_COLUMNS} FROM patients WHERE id = $1");
        let patient = sqlx::query_as::<_, Patient>(&sql)
            .bind(id)
            .fetch_optional(db)
            .await
            .context("find patient by id")?;
        Ok(patient)
    }

    /// Exact match on the stored (trimmed) phone number.
    pub async fn find_by_phone(db: &PgPool, phone: &str) -> anyhow::Result<Option<Patient>> {
        let sql = format!(
            "SELECT {PATIENT_COLUMNS} FROM patients WHERE phone = $1 ORDER BY created_at ASC LIMIT 1"
        );
        let patient = sqlx::query_as::<_, Patient>(&sql)
            .bind(phone)
            .fetch_optional(db)
            .await
            .context("find patient by phone")?;
        Ok(patient)
    }

    pub async fn find_by_name(db: &PgPool, name: &str) -> anyhow::Result<Option<Patient>> {
        let sql = format!(
            "SELECT {PATIENT_COLUMNS} FROM patients WHERE name = $1 ORDER BY created_at ASC LIMIT 1"
        );
        let patient = sqlx::query_as::<_, Patient>(&sql)
            .bind(name)
            .fetch_optional(db)
            .await
            .context("find patient by name")?;
        Ok(patient)
    }

    pub async fn list_by_assignee(db: &PgPool, assigned_to: &str) -> anyhow::Result<Vec<Patient>> {
        let sql = format!(
            "SELECT {PATIENT_COLUMNS} FROM patients WHERE assigned_to = $1 ORDER BY created_at DESC"
        );
        let rows = sqlx::query_as::<_, Patient>(&sql)
            .bind(assigned_to)
            .fetch_all(db)
            .await
            .context("list patients by assignee")?;
        Ok(rows)
    }

    /// Returns `None` when no patient has this id.
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        upd: PatientUpdate<'_>,
    ) -> anyhow::Result<Option<Patient>> {
        let sql = format!(
            r#"
            UPDATE patients
               SET name = $2, age = $3, phone = $4, trimester = $5, updated_at = now()
             WHERE id = $1
            RETURNING {PATIENT_COLUMNS}
            "#
        );
        let patient = sqlx::query_as::<_, Patient>(&sql)
            .bind(id)
            .bind(upd.name)
            .bind(upd.age)
            .bind(upd.phone)
            .bind(upd.trimester)
            .fetch_optional(db)
            .await
            .context("update patient")?;
        Ok(patient)
    }

    /// Returns whether a row was removed.
    pub async fn delete(db: &PgPool, id: Uuid) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM patients WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("delete patient")?;
        Ok(res.rows_affected() > 0)
    }
}
