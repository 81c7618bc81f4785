use crate::catalog::Fruit;
use crate::mvi::Reducer;

use super::intent::JarIntent;
use super::state::{JarItem, JarState};

pub struct JarReducer;

impl Reducer for JarReducer {
    type State = JarState;
    type Intent = JarIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            JarIntent::AddFruit(fruit) => {
                let mut items = state.into_items();
                add_one(&mut items, fruit);
                JarState::from_items(items)
            }
            JarIntent::AddGroup(fruits) => {
                let mut items = state.into_items();
                for fruit in fruits {
                    add_one(&mut items, fruit);
                }
                JarState::from_items(items)
            }
            JarIntent::RemoveFruit { fruit_id } => remove(state, fruit_id),
            JarIntent::UpdateQuantity { fruit_id, quantity } if quantity <= 0 => {
                remove(state, fruit_id)
            }
            JarIntent::UpdateQuantity { fruit_id, quantity } => {
                if !state.contains(fruit_id) {
                    return state;
                }
                let mut items = state.into_items();
                for item in items.iter_mut().filter(|item| item.id() == fruit_id) {
                    item.quantity = quantity.unsigned_abs();
                }
                JarState::from_items(items)
            }
            JarIntent::ClearJar => JarState::default(),
        }
    }
}

fn add_one(items: &mut Vec<JarItem>, fruit: Fruit) {
    match items.iter_mut().find(|item| item.id() == fruit.id) {
        Some(item) => item.quantity = item.quantity.saturating_add(1),
        None => items.push(JarItem::new(fruit)),
    }
}

fn remove(state: JarState, fruit_id: u32) -> JarState {
    if !state.contains(fruit_id) {
        return state;
    }
    let mut items = state.into_items();
    items.retain(|item| item.id() != fruit_id);
    JarState::from_items(items)
}
