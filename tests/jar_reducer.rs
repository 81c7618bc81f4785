//! Jar transitions driven through the reducer, the way the UI dispatches them.

mod common;

use common::{fruit, sample_catalog};
use fruitjar::jar::{JarIntent, JarReducer, JarState};
use fruitjar::mvi::Reducer;

fn apply(state: JarState, intents: Vec<JarIntent>) -> JarState {
    intents.into_iter().fold(state, JarReducer::reduce)
}

fn assert_totals_consistent(state: &JarState) {
    let items: u64 = state.items().iter().map(|item| item.quantity).sum();
    let calories: f64 = state.items().iter().map(|item| item.line_calories()).sum();
    assert_eq!(state.total_items(), items);
    assert!((state.total_calories() - calories).abs() < 1e-9);
    assert!(state.items().iter().all(|item| item.quantity >= 1));
}

#[test]
fn adding_the_same_fruit_twice_bumps_quantity() {
    let apple = fruit(6, "Apple", "Rosaceae", "Rosales", "Malus", 52.0);

    let state = apply(
        JarState::default(),
        vec![
            JarIntent::AddFruit(apple.clone()),
            JarIntent::AddFruit(apple),
        ],
    );

    assert_eq!(state.items().len(), 1);
    assert_eq!(state.get(6).unwrap().quantity, 2);
    assert_eq!(state.total_items(), 2);
    assert_eq!(state.total_calories(), 104.0);
}

#[test]
fn totals_hold_after_every_step() {
    let catalog = sample_catalog();
    let intents = vec![
        JarIntent::AddFruit(catalog[0].clone()),
        JarIntent::AddFruit(catalog[1].clone()),
        JarIntent::AddGroup(catalog[3..6].to_vec()),
        JarIntent::UpdateQuantity {
            fruit_id: catalog[1].id,
            quantity: 4,
        },
        JarIntent::RemoveFruit {
            fruit_id: catalog[0].id,
        },
        JarIntent::AddFruit(catalog[4].clone()),
        JarIntent::UpdateQuantity {
            fruit_id: catalog[3].id,
            quantity: 0,
        },
    ];

    let mut state = JarState::default();
    for intent in intents {
        state = JarReducer::reduce(state, intent);
        assert_totals_consistent(&state);
    }

    // Banana x4, Pear x2, Cherry x1
    assert_eq!(state.total_items(), 7);
    assert_eq!(state.total_calories(), 96.0 * 4.0 + 57.0 * 2.0 + 50.0);
}

#[test]
fn non_positive_quantity_removes_the_item() {
    let catalog = sample_catalog();
    let seeded = apply(
        JarState::default(),
        vec![
            JarIntent::AddFruit(catalog[0].clone()),
            JarIntent::AddFruit(catalog[1].clone()),
        ],
    );

    for quantity in [0, -1, -50] {
        let state = JarReducer::reduce(
            seeded.clone(),
            JarIntent::UpdateQuantity {
                fruit_id: catalog[0].id,
                quantity,
            },
        );
        assert!(!state.contains(catalog[0].id));
        assert_eq!(state.total_items(), 1);
        assert_eq!(state.total_calories(), 96.0);
    }
}

#[test]
fn clear_jar_empties_everything() {
    let catalog = sample_catalog();
    let state = apply(
        JarState::default(),
        vec![
            JarIntent::AddGroup(catalog.clone()),
            JarIntent::ClearJar,
        ],
    );

    assert!(state.is_empty());
    assert_eq!(state.total_items(), 0);
    assert_eq!(state.total_calories(), 0.0);
    assert_eq!(state, JarState::default());
}

#[test]
fn removing_or_updating_an_absent_fruit_is_a_no_op() {
    let catalog = sample_catalog();
    let state = apply(
        JarState::default(),
        vec![JarIntent::AddFruit(catalog[0].clone())],
    );

    let removed = JarReducer::reduce(state.clone(), JarIntent::RemoveFruit { fruit_id: 999 });
    assert_eq!(removed, state);

    let updated = JarReducer::reduce(
        state.clone(),
        JarIntent::UpdateQuantity {
            fruit_id: 999,
            quantity: 5,
        },
    );
    assert_eq!(updated, state);
}

#[test]
fn add_group_with_repeats_matches_sequential_adds() {
    let a = fruit(1, "A", "F", "O", "G", 10.0);
    let b = fruit(2, "B", "F", "O", "G", 20.0);

    let bulk = JarReducer::reduce(
        JarState::default(),
        JarIntent::AddGroup(vec![a.clone(), a.clone(), b.clone()]),
    );
    let sequential = apply(
        JarState::default(),
        vec![
            JarIntent::AddFruit(a.clone()),
            JarIntent::AddFruit(a),
            JarIntent::AddFruit(b),
        ],
    );

    assert_eq!(bulk, sequential);
    assert_eq!(bulk.get(1).unwrap().quantity, 2);
    assert_eq!(bulk.get(2).unwrap().quantity, 1);
    assert_eq!(bulk.total_calories(), 40.0);
}

#[test]
fn items_keep_first_insertion_order() {
    let catalog = sample_catalog();
    let state = apply(
        JarState::default(),
        vec![
            JarIntent::AddFruit(catalog[2].clone()),
            JarIntent::AddFruit(catalog[0].clone()),
            JarIntent::AddFruit(catalog[2].clone()),
        ],
    );

    let ids: Vec<u32> = state.items().iter().map(|item| item.id()).collect();
    assert_eq!(ids, vec![catalog[2].id, catalog[0].id]);
}

#[test]
fn calorie_shares_sum_to_one() {
    let catalog = sample_catalog();
    let state = apply(
        JarState::default(),
        vec![
            JarIntent::AddFruit(catalog[0].clone()),
            JarIntent::AddFruit(catalog[1].clone()),
            JarIntent::AddFruit(catalog[1].clone()),
        ],
    );

    let total: f64 = state.calorie_shares().iter().map(|(_, share)| share).sum();
    assert!((total - 1.0).abs() < 1e-9);
}
