use tracing::info;

use super::repo_types::{NewPatient, Patient};
use crate::{
    sms::{repo::SmsKind, services::send_and_log},
    state::AppState,
};

pub const UNASSIGNED: &str = "unassigned";

/// Welcome text in the patient's language; unknown languages get English.
pub fn onboarding_message(language: &str) -> &'static str {
    match language.trim().to_lowercase().as_str() {
        "swahili" => "Karibu NutriTrack MAMA 🌸 Tafadhali tuma chakula kama: MAHARAGE 1C",
        "kinyarwanda" => "Murakaza neza kuri NutriTrack MAMA 🌸 Andika: IBISHYIMO 1C buri munsi.",
        _ => "Welcome to NutriTrack MAMA 🌸 Log meals like: BEANS 1C or MILK 1C.",
    }
}

pub struct Registration<'a> {
    pub name: &'a str,
    pub phone: &'a str,
    pub language: &'a str,
    pub trimester: i32,
    pub assigned_to: Option<&'a str>,
}

/// Sends the onboarding SMS, then stores the patient. Nothing is stored
/// if the SMS cannot be sent.
pub async fn register_patient(
    st: &AppState,
    reg: Registration<'_>,
) -> anyhow::Result<(Patient, String)> {
    let phone = reg.phone.trim();
    let message = onboarding_message(reg.language);
    let sent = send_and_log(st, phone, message, SmsKind::Onboarding).await?;

    let assigned_to = reg
        .assigned_to
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(UNASSIGNED);

    let patient = Patient::create(
        &st.db,
        NewPatient {
            name: reg.name.trim(),
            phone,
            language: reg.language,
            trimester: reg.trimester,
            assigned_to,
        },
    )
    .await?;

    info!(patient_id = %patient.id, assigned_to = %patient.assigned_to, "patient registered");
    Ok((patient, sent.sid))
}
