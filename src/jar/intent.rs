use crate::catalog::Fruit;
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum JarIntent {
    /// Add one of this fruit, bumping its quantity if already present.
    AddFruit(Fruit),
    /// Add each fruit in order, as if by repeated `AddFruit`.
    AddGroup(Vec<Fruit>),
    RemoveFruit { fruit_id: u32 },
    /// Set an absolute quantity. Zero or less removes the fruit.
    UpdateQuantity { fruit_id: u32, quantity: i64 },
    ClearJar,
}

impl Intent for JarIntent {}
