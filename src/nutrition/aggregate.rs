use serde::Serialize;
use tracing::debug;

use super::foods::NutrientTable;
use super::parser::parse_food_log;

/// Calories, protein and iron for some span of intake or target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct NutrientTotals {
    pub calories: f64,
    pub protein: f64,
    pub iron: f64,
}

/// Sums nutrient contributions over already-filtered message bodies.
///
/// Window and patient filtering happen at the storage boundary; anything
/// passed in here is counted. Lines that do not parse and foods missing
/// from `table` contribute nothing.
pub fn aggregate<'a, I>(bodies: I, table: &NutrientTable) -> NutrientTotals
where
    I: IntoIterator<Item = &'a str>,
{
    let mut totals = NutrientTotals::default();
    for body in bodies {
        let Some(item) = parse_food_log(body) else {
            debug!(body, "unparsed food log skipped");
            continue;
        };
        let Some(profile) = table.lookup(&item.food_name) else {
            debug!(food = %item.food_name, "unknown food skipped");
            continue;
        };
        totals.calories += profile.calories * item.quantity;
        totals.protein += profile.protein * item.quantity;
        totals.iron += profile.iron * item.quantity;
    }
    totals
}
