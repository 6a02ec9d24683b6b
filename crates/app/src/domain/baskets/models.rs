//! Basket Models

use crate::domain::menu::models::PizzaId;

/// A requested quantity of a single pizza.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasketItem {
    pub pizza_id: PizzaId,
    pub quantity: i64,
}

/// Snapshot of the basket contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Basket {
    pub items: Vec<BasketItem>,
}

impl Basket {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn quantity_of(&self, pizza: PizzaId) -> Option<i64> {
        self.items
            .iter()
            .find(|item| item.pizza_id == pizza)
            .map(|item| item.quantity)
    }
}

/// New Basket Item Data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewBasketItem {
    pub pizza_id: PizzaId,
    pub quantity: i64,
}
