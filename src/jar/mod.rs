//! The jar: fruits the user picked, with quantities and running totals.
//!
//! All changes go through [`JarReducer`]; totals are recomputed from the
//! item list on every transition.

mod intent;
mod reducer;
mod state;

pub use intent::JarIntent;
pub use reducer::JarReducer;
pub use state::{JarItem, JarState};
