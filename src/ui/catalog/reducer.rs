use crate::mvi::Reducer;

use super::intent::CatalogViewIntent;
use super::state::CatalogViewState;

pub struct CatalogViewReducer;

impl Reducer for CatalogViewReducer {
    type State = CatalogViewState;
    type Intent = CatalogViewIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CatalogViewIntent::StartSearch => CatalogViewState {
                searching: true,
                ..state
            },
            CatalogViewIntent::FinishSearch => CatalogViewState {
                searching: false,
                ..state
            },
            CatalogViewIntent::InsertChar(c) => {
                let mut query = state.query;
                query.push(c);
                CatalogViewState {
                    query,
                    cursor: 0,
                    ..state
                }
            }
            CatalogViewIntent::Backspace => {
                let mut query = state.query;
                if query.pop().is_none() {
                    return CatalogViewState { query, ..state };
                }
                CatalogViewState {
                    query,
                    cursor: 0,
                    ..state
                }
            }
            CatalogViewIntent::ClearQuery => CatalogViewState {
                query: String::new(),
                cursor: 0,
                ..state
            },
            CatalogViewIntent::CycleGroupBy => {
                let group_by = state.group_by.next();
                Self::reduce(state, CatalogViewIntent::SetGroupBy(group_by))
            }
            CatalogViewIntent::SetGroupBy(group_by) => CatalogViewState {
                group_by,
                cursor: 0,
                expanded_group: None,
                ..state
            },
            CatalogViewIntent::ToggleViewType => CatalogViewState {
                view_type: state.view_type.toggled(),
                ..state
            },
            CatalogViewIntent::MoveUp => CatalogViewState {
                cursor: state.cursor.saturating_sub(1),
                ..state
            },
            CatalogViewIntent::MoveDown { row_count } => {
                let last = row_count.saturating_sub(1);
                CatalogViewState {
                    cursor: (state.cursor + 1).min(last),
                    ..state
                }
            }
            CatalogViewIntent::ClampCursor { row_count } => CatalogViewState {
                cursor: state.cursor.min(row_count.saturating_sub(1)),
                ..state
            },
            CatalogViewIntent::ToggleGroup(name) => {
                let expanded_group = if state.expanded_group.as_deref() == Some(name.as_str()) {
                    None
                } else {
                    Some(name)
                };
                CatalogViewState {
                    expanded_group,
                    ..state
                }
            }
        }
    }
}
