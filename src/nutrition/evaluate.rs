use serde::Serialize;

use super::aggregate::NutrientTotals;
use crate::error::AnalysisError;

/// Recommended intake for one person-day.
pub const DAILY_TARGETS: NutrientTotals = NutrientTotals {
    calories: 2500.0,
    protein: 71.0,
    iron: 27.0,
};

/// Whole-number share of each target reached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PercentMet {
    pub calories: i64,
    pub protein: i64,
    pub iron: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Adequacy {
    pub targets: NutrientTotals,
    pub percent_met: PercentMet,
}

/// Scales the daily targets to `window_days` and reports how much of each was met.
pub fn evaluate(totals: &NutrientTotals, window_days: i64) -> Result<Adequacy, AnalysisError> {
    if window_days <= 0 {
        return Err(AnalysisError::InvalidWindow(window_days));
    }
    let days = window_days as f64;
    let targets = NutrientTotals {
        calories: DAILY_TARGETS.calories * days,
        protein: DAILY_TARGETS.protein * days,
        iron: DAILY_TARGETS.iron * days,
    };
    let percent_met = PercentMet {
        calories: percent(totals.calories, targets.calories),
        protein: percent(totals.protein, targets.protein),
        iron: percent(totals.iron, targets.iron),
    };
    Ok(Adequacy {
        targets,
        percent_met,
    })
}

// round half up
fn percent(actual: f64, target: f64) -> i64 {
    (actual * 100.0 / target + 0.5).floor() as i64
}

#[cfg(test)]
mod evaluate_tests {
    use super::*;

    fn totals(calories: f64, protein: f64, iron: f64) -> NutrientTotals {
        NutrientTotals {
            calories,
            protein,
            iron,
        }
    }

    #[test]
    fn targets_scale_with_window() {
        let a = evaluate(&NutrientTotals::default(), 7).unwrap();
        assert_eq!(a.targets.calories, 17500.0);
        assert_eq!(a.targets.protein, 497.0);
        assert_eq!(a.targets.iron, 189.0);
    }

    #[test]
    fn single_day_targets_equal_daily_constants() {
        let a = evaluate(&NutrientTotals::default(), 1).unwrap();
        assert_eq!(a.targets, DAILY_TARGETS);
    }

    #[test]
    fn percent_is_rounded_to_nearest() {
        let a = evaluate(&totals(120.0, 8.0, 2.0), 1).unwrap();
        assert_eq!(
            a.percent_met,
            PercentMet {
                calories: 5,
                protein: 11,
                iron: 7
            }
        );
    }

    #[test]
    fn exact_half_rounds_up() {
        // 12.5 / 2500 = 0.5%
        let a = evaluate(&totals(12.5, 0.0, 0.0), 1).unwrap();
        assert_eq!(a.percent_met.calories, 1);
    }

    #[test]
    fn can_exceed_one_hundred_percent() {
        let a = evaluate(&totals(5000.0, 71.0, 27.0), 1).unwrap();
        assert_eq!(a.percent_met.calories, 200);
        assert_eq!(a.percent_met.protein, 100);
        assert_eq!(a.percent_met.iron, 100);
    }

    #[test]
    fn zero_and_negative_windows_are_rejected() {
        for days in [0, -1, -30] {
            match evaluate(&NutrientTotals::default(), days) {
                Err(AnalysisError::InvalidWindow(d)) => assert_eq!(d, days),
                other => panic!("expected InvalidWindow, got {:?}", other),
            }
        }
    }
}
