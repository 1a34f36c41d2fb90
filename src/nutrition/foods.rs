use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Nutrients supplied by one unit of a food. Missing fields count as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientProfile {
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub iron: f64,
}

/// Reference table keyed by lowercase food name.
#[derive(Debug, Clone, Default)]
pub struct NutrientTable {
    foods: HashMap<String, NutrientProfile>,
}

impl NutrientTable {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let parsed: HashMap<String, NutrientProfile> =
            serde_json::from_str(raw).context("parse nutrient table")?;
        let foods = parsed
            .into_iter()
            .map(|(name, profile)| (name.trim().to_lowercase(), profile))
            .collect();
        Ok(Self { foods })
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read nutrient table {}", path.display()))?;
        let table = Self::from_json(&raw)?;
        tracing::info!(path = %path.display(), foods = table.len(), "nutrient table loaded");
        Ok(table)
    }

    pub fn lookup(&self, food_name: &str) -> Option<&NutrientProfile> {
        self.foods.get(food_name)
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }
}

impl FromIterator<(String, NutrientProfile)> for NutrientTable {
    fn from_iter<I: IntoIterator<Item = (String, NutrientProfile)>>(iter: I) -> Self {
        Self {
            foods: iter.into_iter().collect(),
        }
    }
}
