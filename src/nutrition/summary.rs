use serde::Serialize;
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use super::aggregate::{aggregate, NutrientTotals};
use super::evaluate::{evaluate, PercentMet};
use super::flags::generate_flags;
use super::foods::NutrientTable;
use crate::error::AnalysisError;
use crate::food_logs::repo_types::FoodLogEntry;

pub const DEFAULT_WINDOW_DAYS: i64 = 7;

const SECONDS_PER_DAY: i64 = 86_400;

/// Computed per request, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionSummary {
    pub patient_id: Uuid,
    pub days_analyzed: i64,
    pub logs_analyzed: usize,
    pub totals: NutrientTotals,
    pub targets: NutrientTotals,
    pub percent_met: PercentMet,
    pub flags: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Runs the pure pipeline over logs already filtered to one patient and window.
pub fn analyze(
    patient_id: Uuid,
    logs: &[FoodLogEntry],
    window_days: i64,
    table: &NutrientTable,
) -> Result<NutritionSummary, AnalysisError> {
    let totals = aggregate(logs.iter().map(|l| l.raw_body.as_str()), table);
    let adequacy = evaluate(&totals, window_days)?;
    let flags = generate_flags(&adequacy.percent_met);

    Ok(NutritionSummary {
        patient_id,
        days_analyzed: window_days,
        logs_analyzed: logs.len(),
        totals,
        targets: adequacy.targets,
        percent_met: adequacy.percent_met,
        flags: flags.flags,
        recommendations: flags.recommendations,
    })
}

/// Start of a trailing window of `days` ending at `now`, inclusive.
///
/// A window reaching past the earliest representable instant is rejected.
pub fn window_cutoff(now: OffsetDateTime, days: i64) -> Result<OffsetDateTime, AnalysisError> {
    days.checked_mul(SECONDS_PER_DAY)
        .map(Duration::seconds)
        .and_then(|span| now.checked_sub(span))
        .ok_or(AnalysisError::InvalidWindow(days))
}
