use serde::{Deserialize, Serialize};

/// A fruit record as served by the upstream catalog.
///
/// Field names mirror the upstream JSON so records pass through the proxy
/// and decode here without renaming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fruit {
    pub id: u32,
    pub name: String,
    pub family: String,
    pub order: String,
    pub genus: String,
    pub nutritions: Nutritions,
}

/// Nutrition values per single fruit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutritions {
    pub calories: f64,
    pub fat: f64,
    pub sugar: f64,
    pub carbohydrates: f64,
    pub protein: f64,
}

impl Fruit {
    #[inline]
    pub fn calories(&self) -> f64 {
        self.nutritions.calories
    }

    /// True when any of the searchable text fields contains `needle`.
    ///
    /// `needle` must already be lower-cased.
    pub fn matches(&self, needle: &str) -> bool {
        [&self.name, &self.family, &self.order, &self.genus]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}
