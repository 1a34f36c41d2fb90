pub mod aggregate;
pub mod alert;
pub mod evaluate;
pub mod flags;
pub mod foods;
mod handlers;
pub mod parser;
pub mod summary;
pub mod services;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::summary_routes()
}

#[cfg(test)]
pub(crate) fn test_table() -> foods::NutrientTable {
    use foods::NutrientProfile;

    [
        (
            "beans".to_string(),
            NutrientProfile {
                calories: 120.0,
                protein: 8.0,
                iron: 2.0,
            },
        ),
        (
            "milk".to_string(),
            NutrientProfile {
                calories: 150.0,
                protein: 8.0,
                iron: 0.0,
            },
        ),
    ]
    .into_iter()
    .collect()
}
