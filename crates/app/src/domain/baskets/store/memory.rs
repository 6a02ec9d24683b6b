//! In-memory basket store.

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use tokio::sync::Mutex;

use crate::domain::{
    baskets::{
        errors::BasketStoreError,
        models::{Basket, BasketItem},
        store::BasketStore,
    },
    menu::models::PizzaId,
};

/// Basket held in process memory.
///
/// Every operation takes the same lock, so concurrent requests see each
/// mutation as a whole.
#[derive(Debug, Default)]
pub struct InMemoryBasketStore {
    items: Mutex<FxHashMap<PizzaId, i64>>,
}

impl InMemoryBasketStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BasketStore for InMemoryBasketStore {
    async fn add_item(&self, pizza: PizzaId, quantity: i64) -> Result<(), BasketStoreError> {
        let mut items = self.items.lock().await;

        let entry = items.entry(pizza).or_insert(0);

        *entry = entry.saturating_add(quantity);

        Ok(())
    }

    async fn update_quantity(
        &self,
        pizza: PizzaId,
        quantity: i64,
    ) -> Result<bool, BasketStoreError> {
        let mut items = self.items.lock().await;

        if !items.contains_key(&pizza) {
            return Ok(false);
        }

        if quantity <= 0 {
            items.remove(&pizza);
        } else {
            items.insert(pizza, quantity);
        }

        Ok(true)
    }

    async fn remove_item(&self, pizza: PizzaId) -> Result<bool, BasketStoreError> {
        Ok(self.items.lock().await.remove(&pizza).is_some())
    }

    async fn get_basket(&self) -> Result<Basket, BasketStoreError> {
        let items = self.items.lock().await;

        Ok(sorted_basket(
            items.iter().map(|(pizza_id, quantity)| (*pizza_id, *quantity)),
        ))
    }

    async fn clear(&self) -> Result<(), BasketStoreError> {
        self.items.lock().await.clear();

        Ok(())
    }

    async fn take(&self) -> Result<Basket, BasketStoreError> {
        let mut items = self.items.lock().await;

        Ok(sorted_basket(items.drain()))
    }
}

fn sorted_basket(entries: impl Iterator<Item = (PizzaId, i64)>) -> Basket {
    let mut items: Vec<BasketItem> = entries
        .map(|(pizza_id, quantity)| BasketItem { pizza_id, quantity })
        .collect();

    items.sort_unstable_by_key(|item| item.pizza_id);

    Basket { items }
}
