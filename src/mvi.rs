//! Unidirectional state primitives shared by the jar and the terminal views.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! A state value is never edited in place by callers. Whoever owns it hands
//! the current value and an intent to the reducer and keeps what comes back.

/// Marker for values that describe something the user or the system did.
pub trait Intent: Send + 'static {}

/// Marker for state snapshots.
///
/// `Default` is the initial state, `PartialEq` lets owners detect no-op
/// transitions and `Clone` lets views keep a snapshot.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// A pure `(State, Intent) -> State` transition.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Must not perform I/O or touch anything but its arguments.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
