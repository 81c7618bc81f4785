//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use fruitjar::catalog::{Fruit, Nutritions};
use std::net::TcpListener;

/// Find a free local port.
pub fn free_port() -> u16 {
    TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind to find free port")
        .local_addr()
        .unwrap()
        .port()
}

pub fn fruit(id: u32, name: &str, family: &str, order: &str, genus: &str, calories: f64) -> Fruit {
    Fruit {
        id,
        name: name.to_string(),
        family: family.to_string(),
        order: order.to_string(),
        genus: genus.to_string(),
        nutritions: Nutritions {
            calories,
            fat: 0.2,
            sugar: 5.0,
            carbohydrates: 10.0,
            protein: 0.5,
        },
    }
}

/// A small catalog resembling the upstream data.
pub fn sample_catalog() -> Vec<Fruit> {
    vec![
        fruit(6, "Apple", "Rosaceae", "Rosales", "Malus", 52.0),
        fruit(1, "Banana", "Musaceae", "Zingiberales", "Musa", 96.0),
        fruit(10, "Pineapple", "Bromeliaceae", "Poales", "Ananas", 50.0),
        fruit(3, "Strawberry", "Rosaceae", "Rosales", "Fragaria", 29.0),
        fruit(4, "Pear", "Rosaceae", "Rosales", "Pyrus", 57.0),
        fruit(9, "Cherry", "Rosaceae", "Rosales", "Prunus", 50.0),
        fruit(25, "Custard apple", "Annonaceae", "Magnoliales", "Annona", 101.0),
    ]
}

pub fn sample_catalog_json() -> String {
    serde_json::to_string(&sample_catalog()).unwrap()
}
