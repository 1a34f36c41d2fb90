use anyhow::Context;
use sqlx::PgPool;

use super::repo_types::SmsLog;

/// Why an outbound message was sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmsKind {
    Onboarding,
    Confirmation,
    Alert,
}

impl SmsKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SmsKind::Onboarding => "onboarding",
            SmsKind::Confirmation => "confirmation",
            SmsKind::Alert => "alert",
        }
    }
}

pub async fn insert_sms_log(
    db: &PgPool,
    phone: &str,
    message: &str,
    message_sid: &str,
    status: &str,
    kind: SmsKind,
) -> anyhow::Result<SmsLog> {
    let row = sqlx::query_as::<_, SmsLog>(
        r#"
        INSERT INTO sms_logs (phone, message, message_sid, status, kind)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, phone, message, message_sid, status, kind, created_at
        "#,
    )
    .bind(phone)
    .bind(message)
    .bind(message_sid)
    .bind(status)
    .bind(kind.as_str())
    .fetch_one(db)
    .await
    .context("insert sms log")?;
    Ok(row)
}

/// Newest outbound messages first.
pub async fn list_recent(db: &PgPool, limit: i64) -> anyhow::Result<Vec<SmsLog>> {
    let rows = sqlx::query_as::<_, SmsLog>(
        r#"
        SELECT id, phone, message, message_sid, status, kind, created_at
          FROM sms_logs
         ORDER BY created_at DESC
         LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(db)
    .await
    .context("list sms logs")?;
    Ok(rows)
}
