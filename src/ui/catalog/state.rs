use crate::catalog::{filter_fruits, group_fruits, CatalogSummary, Fruit, FruitGroup, GroupBy};
use crate::mvi::UiState;

/// How fruits are laid out inside the catalog panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewType {
    #[default]
    List,
    Table,
}

impl ViewType {
    pub fn toggled(self) -> Self {
        match self {
            ViewType::List => ViewType::Table,
            ViewType::Table => ViewType::List,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewType::List => "List",
            ViewType::Table => "Table",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogViewState {
    pub query: String,
    /// Keystrokes edit the query while set.
    pub searching: bool,
    pub group_by: GroupBy,
    pub view_type: ViewType,
    /// Index into the rows returned by [`CatalogProjection::rows`].
    pub cursor: usize,
    /// At most one group is open at a time.
    pub expanded_group: Option<String>,
}

impl UiState for CatalogViewState {}

impl CatalogViewState {
    pub fn is_grouped(&self) -> bool {
        self.group_by != GroupBy::None
    }

    /// Filter and group `fruits` according to this view.
    pub fn project<'a>(&self, fruits: &'a [Fruit]) -> CatalogProjection<'a> {
        let visible = filter_fruits(fruits, &self.query);
        CatalogProjection {
            summary: CatalogSummary::new(visible.len(), fruits.len(), &self.query),
            groups: group_fruits(&visible, self.group_by),
            grouped: self.is_grouped(),
            expanded_group: self.expanded_group.clone(),
        }
    }
}

/// One selectable line of the catalog panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CatalogRow<'a> {
    Group {
        name: &'a str,
        count: usize,
        expanded: bool,
    },
    Fruit(&'a Fruit),
}

/// Filtered and grouped catalog, ready to render.
#[derive(Debug, Clone)]
pub struct CatalogProjection<'a> {
    pub summary: CatalogSummary,
    pub groups: Vec<FruitGroup<'a>>,
    grouped: bool,
    expanded_group: Option<String>,
}

impl<'a> CatalogProjection<'a> {
    /// Flattened rows. Ungrouped views list every fruit; grouped views list
    /// one header per group plus the fruits of the expanded group.
    pub fn rows(&self) -> Vec<CatalogRow<'_>> {
        if !self.grouped {
            return self
                .groups
                .iter()
                .flat_map(|group| group.fruits.iter().map(|&fruit| CatalogRow::Fruit(fruit)))
                .collect();
        }

        let mut rows = Vec::new();
        for group in &self.groups {
            let expanded = self.expanded_group.as_deref() == Some(group.name.as_str());
            rows.push(CatalogRow::Group {
                name: &group.name,
                count: group.fruits.len(),
                expanded,
            });
            if expanded {
                rows.extend(group.fruits.iter().map(|&fruit| CatalogRow::Fruit(fruit)));
            }
        }
        rows
    }

    pub fn group(&self, name: &str) -> Option<&FruitGroup<'a>> {
        self.groups.iter().find(|group| group.name == name)
    }
}
