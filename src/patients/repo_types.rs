use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub language: String,
    pub trimester: i32,
    pub age: Option<i32>,
    /// Health worker id, or `unassigned`.
    pub assigned_to: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

#[derive(Debug)]
pub struct NewPatient<'a> {
    pub name: &'a str,
    pub phone: &'a str,
    pub language: &'a str,
    pub trimester: i32,
    pub assigned_to: &'a str,
}

#[derive(Debug)]
pub struct PatientUpdate<'a> {
    pub name: &'a str,
    pub age: i32,
    pub phone: &'a str,
    pub trimester: i32,
}
