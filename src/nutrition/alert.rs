use super::summary::NutritionSummary;

/// Outbound alert text for a patient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertMessage {
    pub body: String,
}

/// Only the highest-priority flag is surfaced; no flags means no alert.
pub fn decide_alert(summary: &NutritionSummary) -> Option<AlertMessage> {
    let flag = summary.flags.first()?;
    let advice = summary.recommendations.first()?;
    Some(AlertMessage {
        body: format!("⚠️ Nutrition Alert:\n{}\nAdvice: {}", flag, advice),
    })
}
