use crate::catalog::GroupBy;
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CatalogViewIntent {
    StartSearch,
    FinishSearch,
    InsertChar(char),
    Backspace,
    ClearQuery,
    CycleGroupBy,
    SetGroupBy(GroupBy),
    ToggleViewType,
    MoveUp,
    /// `row_count` is the number of rows currently displayed.
    MoveDown { row_count: usize },
    /// Expand the named group, or collapse it if it is already open.
    ToggleGroup(String),
    /// Pull the cursor back onto the last row after the rows shrank.
    ClampCursor { row_count: usize },
}

impl Intent for CatalogViewIntent {}
