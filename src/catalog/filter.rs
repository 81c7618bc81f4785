//! Client-side search and grouping over the fetched catalog.
//!
//! Filtering runs first, grouping partitions whatever the filter kept.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::model::Fruit;

/// Name of the single bucket produced by [`GroupBy::None`].
pub const ALL_FRUITS_GROUP: &str = "All Fruits";

/// Taxonomic attribute used to partition the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupBy {
    #[default]
    None,
    Family,
    Order,
    Genus,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown grouping key '{0}' (expected none, family, order or genus)")]
pub struct UnknownGroupKey(pub String);

impl GroupBy {
    pub const ALL: [GroupBy; 4] = [GroupBy::None, GroupBy::Family, GroupBy::Order, GroupBy::Genus];

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupBy::None => "none",
            GroupBy::Family => "family",
            GroupBy::Order => "order",
            GroupBy::Genus => "genus",
        }
    }

    /// The following key in selector order, wrapping back to `None`.
    pub fn next(self) -> Self {
        match self {
            GroupBy::None => GroupBy::Family,
            GroupBy::Family => GroupBy::Order,
            GroupBy::Order => GroupBy::Genus,
            GroupBy::Genus => GroupBy::None,
        }
    }

    /// Bucket key of `fruit`, or `None` when not grouping.
    pub fn key_of<'a>(&self, fruit: &'a Fruit) -> Option<&'a str> {
        match self {
            GroupBy::None => None,
            GroupBy::Family => Some(&fruit.family),
            GroupBy::Order => Some(&fruit.order),
            GroupBy::Genus => Some(&fruit.genus),
        }
    }
}

impl fmt::Display for GroupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GroupBy {
    type Err = UnknownGroupKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        GroupBy::ALL
            .into_iter()
            .find(|key| key.as_str() == wanted)
            .ok_or_else(|| UnknownGroupKey(s.to_string()))
    }
}

/// One named bucket of fruits, borrowed from the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct FruitGroup<'a> {
    pub name: String,
    pub fruits: Vec<&'a Fruit>,
}

/// Fruits whose name, family, order or genus contains `query`,
/// case-insensitively. A blank query keeps the whole catalog.
///
/// Catalog order is preserved.
pub fn filter_fruits<'a>(fruits: &'a [Fruit], query: &str) -> Vec<&'a Fruit> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return fruits.iter().collect();
    }
    fruits.iter().filter(|fruit| fruit.matches(&needle)).collect()
}

/// Partition `fruits` by `group_by`.
///
/// Buckets appear in the order their key is first seen. `GroupBy::None`
/// always yields exactly one bucket, even for an empty input.
pub fn group_fruits<'a>(fruits: &[&'a Fruit], group_by: GroupBy) -> Vec<FruitGroup<'a>> {
    if group_by == GroupBy::None {
        return vec![FruitGroup {
            name: ALL_FRUITS_GROUP.to_string(),
            fruits: fruits.to_vec(),
        }];
    }

    let mut groups: Vec<FruitGroup<'a>> = Vec::new();
    for &fruit in fruits {
        let key = group_by.key_of(fruit).unwrap_or_default();
        match groups.iter_mut().find(|group| group.name == key) {
            Some(group) => group.fruits.push(fruit),
            None => groups.push(FruitGroup {
                name: key.to_string(),
                fruits: vec![fruit],
            }),
        }
    }
    groups
}

/// Groups as one JSON object keyed by group name, keeping bucket order.
pub fn groups_to_json(
    groups: &[FruitGroup<'_>],
) -> serde_json::Result<serde_json::Map<String, serde_json::Value>> {
    groups
        .iter()
        .map(|group| Ok((group.name.clone(), serde_json::to_value(&group.fruits)?)))
        .collect()
}

/// Result counter shown above the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogSummary {
    pub shown: usize,
    pub total: usize,
    pub filtered: bool,
}

impl CatalogSummary {
    pub fn new(shown: usize, total: usize, query: &str) -> Self {
        Self {
            shown,
            total,
            filtered: !query.trim().is_empty(),
        }
    }

    pub fn no_matches(&self) -> bool {
        self.filtered && self.shown == 0
    }
}

impl fmt::Display for CatalogSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.filtered {
            return write!(f, "Showing {} fruits", self.total);
        }
        write!(f, "Showing {} of {} fruits", self.shown, self.total)?;
        if self.no_matches() {
            f.write_str(" - No fruits match your search")?;
        }
        Ok(())
    }
}
