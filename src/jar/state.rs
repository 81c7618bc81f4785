use serde::Serialize;

use crate::catalog::Fruit;
use crate::mvi::UiState;

/// A fruit in the jar together with how many of it were picked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JarItem {
    pub fruit: Fruit,
    /// Always at least 1 while the item is in the jar.
    pub quantity: u64,
}

impl JarItem {
    pub fn new(fruit: Fruit) -> Self {
        Self { fruit, quantity: 1 }
    }

    pub fn id(&self) -> u32 {
        self.fruit.id
    }

    /// Calories contributed by this line: quantity × per-fruit calories.
    pub fn line_calories(&self) -> f64 {
        self.quantity as f64 * self.fruit.calories()
    }
}

/// Contents of the jar and its running totals.
///
/// Items keep the order in which each fruit was first added. Totals are
/// derived from the items every time a state is built, so the fields are
/// private and only [`JarState::from_items`] can produce a non-empty state.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct JarState {
    items: Vec<JarItem>,
    total_items: u64,
    total_calories: f64,
}

impl UiState for JarState {}

impl JarState {
    pub fn from_items(items: Vec<JarItem>) -> Self {
        debug_assert!(items.iter().all(|item| item.quantity >= 1));
        let total_items = items
            .iter()
            .fold(0u64, |sum, item| sum.saturating_add(item.quantity));
        let total_calories = items.iter().map(JarItem::line_calories).sum();
        Self {
            items,
            total_items,
            total_calories,
        }
    }

    pub fn items(&self) -> &[JarItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<JarItem> {
        self.items
    }

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    pub fn total_calories(&self) -> f64 {
        self.total_calories
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, fruit_id: u32) -> Option<&JarItem> {
        self.items.iter().find(|item| item.id() == fruit_id)
    }

    pub fn contains(&self, fruit_id: u32) -> bool {
        self.get(fruit_id).is_some()
    }

    /// Each item's share of the total calories, in item order.
    ///
    /// Shares are 0 when the jar holds no calories at all.
    pub fn calorie_shares(&self) -> Vec<(&JarItem, f64)> {
        self.items
            .iter()
            .map(|item| {
                let share = if self.total_calories > 0.0 {
                    item.line_calories() / self.total_calories
                } else {
                    0.0
                };
                (item, share)
            })
            .collect()
    }
}
