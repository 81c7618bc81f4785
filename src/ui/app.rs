use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::catalog::{Fruit, DEFAULT_STALE_TIME};
use crate::jar::{JarIntent, JarReducer, JarState};
use crate::mvi::Reducer;
use crate::ui::catalog::{CatalogRow, CatalogViewIntent, CatalogViewReducer, CatalogViewState};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Catalog,
    Jar,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub enum JarView {
    #[default]
    List,
    Chart,
}

/// Where the catalog fetch stands.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CatalogLoad {
    Loading,
    Ready,
    /// No catalog could be loaded at all.
    Failed(String),
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Everything the terminal UI shows. The jar lives here and nowhere else.
pub struct App {
    should_quit: bool,
    focus: Focus,
    fruits: Arc<Vec<Fruit>>,
    load: CatalogLoad,
    /// A fetch was started and has not reported back yet.
    refreshing: bool,
    refresh_requested: bool,
    last_settled: Option<Instant>,
    stale_time: Duration,
    /// Shown in the footer, e.g. a failed background refresh.
    notice: Option<String>,
    catalog_view: CatalogViewState,
    jar: JarState,
    jar_view: JarView,
    jar_cursor: usize,
}

impl Default for App {
    fn default() -> Self {
        Self::new(DEFAULT_STALE_TIME)
    }
}

impl App {
    pub fn new(stale_time: Duration) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Catalog,
            fruits: Arc::new(Vec::new()),
            load: CatalogLoad::Loading,
            refreshing: true,
            refresh_requested: false,
            last_settled: None,
            stale_time,
            notice: None,
            catalog_view: CatalogViewState::default(),
            jar: JarState::default(),
            jar_view: JarView::default(),
            jar_cursor: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn fruits(&self) -> &[Fruit] {
        &self.fruits
    }

    pub fn load(&self) -> &CatalogLoad {
        &self.load
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn catalog_view(&self) -> &CatalogViewState {
        &self.catalog_view
    }

    pub fn jar(&self) -> &JarState {
        &self.jar
    }

    pub fn jar_view(&self) -> JarView {
        self.jar_view
    }

    pub fn jar_cursor(&self) -> usize {
        self.jar_cursor
    }

    /// Mark a fetch as started. Keeps showing the current catalog if any.
    pub fn begin_refresh(&mut self) {
        self.refreshing = true;
        if matches!(self.load, CatalogLoad::Failed(_)) {
            self.load = CatalogLoad::Loading;
        }
    }

    pub fn on_catalog_loaded(&mut self, result: Result<Arc<Vec<Fruit>>, String>) {
        self.refreshing = false;
        self.last_settled = Some(Instant::now());
        match result {
            Ok(fruits) => {
                self.fruits = fruits;
                self.load = CatalogLoad::Ready;
                self.notice = None;
                self.clamp_catalog_cursor();
            }
            Err(message) if self.load == CatalogLoad::Ready => {
                self.notice = Some(format!("Refresh failed: {}", message));
            }
            Err(message) => {
                self.load = CatalogLoad::Failed(message);
            }
        }
    }

    /// True when the loaded catalog is old enough to revalidate.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        let due = self.load == CatalogLoad::Ready
            && !self.refreshing
            && self
                .last_settled
                .is_some_and(|at| now.saturating_duration_since(at) >= self.stale_time);
        if due {
            self.refreshing = true;
        }
        due
    }

    /// Returns and clears a pending user refresh request.
    pub fn take_refresh_request(&mut self) -> bool {
        std::mem::take(&mut self.refresh_requested)
    }

    pub fn dispatch_jar(&mut self, intent: JarIntent) {
        tracing::debug!(?intent, "Jar intent");
        dispatch_mvi!(self, jar, JarReducer, intent);
        self.jar_cursor = self.jar_cursor.min(self.jar.items().len().saturating_sub(1));
    }

    fn dispatch_catalog(&mut self, intent: CatalogViewIntent) {
        dispatch_mvi!(self, catalog_view, CatalogViewReducer, intent);
        self.clamp_catalog_cursor();
    }

    /// Rows shrink when a group collapses or a refresh returns fewer fruits.
    fn clamp_catalog_cursor(&mut self) {
        let row_count = self.catalog_row_count();
        dispatch_mvi!(
            self,
            catalog_view,
            CatalogViewReducer,
            CatalogViewIntent::ClampCursor { row_count }
        );
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.request_quit();
            return;
        }

        if self.catalog_view.searching {
            self.on_search_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.request_quit(),
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Catalog => Focus::Jar,
                    Focus::Jar => Focus::Catalog,
                };
            }
            KeyCode::Char('r') if !self.refreshing => self.refresh_requested = true,
            _ => match self.focus {
                Focus::Catalog => self.on_catalog_key(key),
                Focus::Jar => self.on_jar_key(key),
            },
        }
    }

    fn on_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.dispatch_catalog(CatalogViewIntent::FinishSearch),
            KeyCode::Backspace => self.dispatch_catalog(CatalogViewIntent::Backspace),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.dispatch_catalog(CatalogViewIntent::ClearQuery)
            }
            KeyCode::Char(c) => self.dispatch_catalog(CatalogViewIntent::InsertChar(c)),
            _ => {}
        }
    }

    fn on_catalog_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('/') => self.dispatch_catalog(CatalogViewIntent::StartSearch),
            KeyCode::Esc if !self.catalog_view.query.is_empty() => {
                self.dispatch_catalog(CatalogViewIntent::ClearQuery)
            }
            KeyCode::Char('g') => self.dispatch_catalog(CatalogViewIntent::CycleGroupBy),
            KeyCode::Char('v') => self.dispatch_catalog(CatalogViewIntent::ToggleViewType),
            KeyCode::Up | KeyCode::Char('k') => self.dispatch_catalog(CatalogViewIntent::MoveUp),
            KeyCode::Down | KeyCode::Char('j') => {
                let row_count = self.catalog_row_count();
                self.dispatch_catalog(CatalogViewIntent::MoveDown { row_count });
            }
            KeyCode::Enter => match self.selected_row() {
                Some(SelectedRow::Group(name)) => {
                    self.dispatch_catalog(CatalogViewIntent::ToggleGroup(name))
                }
                Some(SelectedRow::Fruit(fruit)) => self.dispatch_jar(JarIntent::AddFruit(fruit)),
                None => {}
            },
            KeyCode::Char('a') => {
                if let Some(SelectedRow::Fruit(fruit)) = self.selected_row() {
                    self.dispatch_jar(JarIntent::AddFruit(fruit));
                }
            }
            KeyCode::Char('A') => {
                if let Some(SelectedRow::Group(name)) = self.selected_row() {
                    let fruits = self.group_fruits(&name);
                    if !fruits.is_empty() {
                        self.dispatch_jar(JarIntent::AddGroup(fruits));
                    }
                }
            }
            _ => {}
        }
    }

    fn on_jar_key(&mut self, key: KeyEvent) {
        let selected = self
            .jar
            .items()
            .get(self.jar_cursor)
            .map(|item| (item.id(), item.quantity));

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.jar_cursor = self.jar_cursor.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                let last = self.jar.items().len().saturating_sub(1);
                self.jar_cursor = (self.jar_cursor + 1).min(last);
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                if let Some((fruit_id, quantity)) = selected {
                    self.dispatch_jar(JarIntent::UpdateQuantity {
                        fruit_id,
                        quantity: i64::try_from(quantity).unwrap_or(i64::MAX).saturating_add(1),
                    });
                }
            }
            KeyCode::Char('-') => {
                // Decrementing stops at one; removal is an explicit action.
                if let Some((fruit_id, quantity)) = selected.filter(|&(_, q)| q > 1) {
                    self.dispatch_jar(JarIntent::UpdateQuantity {
                        fruit_id,
                        quantity: i64::try_from(quantity - 1).unwrap_or(i64::MAX),
                    });
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some((fruit_id, _)) = selected {
                    self.dispatch_jar(JarIntent::RemoveFruit { fruit_id });
                }
            }
            KeyCode::Char('c') => self.dispatch_jar(JarIntent::ClearJar),
            KeyCode::Char('v') => {
                self.jar_view = match self.jar_view {
                    JarView::List => JarView::Chart,
                    JarView::Chart => JarView::List,
                };
            }
            _ => {}
        }
    }

    fn catalog_row_count(&self) -> usize {
        self.catalog_view.project(&self.fruits).rows().len()
    }

    /// Row under the cursor, clamped to the rows that exist.
    fn selected_row(&self) -> Option<SelectedRow> {
        let projection = self.catalog_view.project(&self.fruits);
        let rows = projection.rows();
        let index = self.catalog_view.cursor.min(rows.len().checked_sub(1)?);
        Some(match rows[index] {
            CatalogRow::Group { name, .. } => SelectedRow::Group(name.to_string()),
            CatalogRow::Fruit(fruit) => SelectedRow::Fruit(fruit.clone()),
        })
    }

    fn group_fruits(&self, name: &str) -> Vec<Fruit> {
        self.catalog_view
            .project(&self.fruits)
            .group(name)
            .map(|group| group.fruits.iter().map(|&fruit| fruit.clone()).collect())
            .unwrap_or_default()
    }
}

enum SelectedRow {
    Group(String),
    Fruit(Fruit),
}
