//! Baskets service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::domain::{
    baskets::{
        errors::BasketsServiceError,
        models::{Basket, NewBasketItem},
        store::BasketStore,
    },
    menu::{MenuService, MenuServiceError, models::PizzaId},
};

/// Basket operations backed by a [`BasketStore`], validated against the menu.
#[derive(Clone)]
pub struct StoreBasketsService {
    menu: Arc<dyn MenuService>,
    store: Arc<dyn BasketStore>,
}

impl StoreBasketsService {
    #[must_use]
    pub fn new(menu: Arc<dyn MenuService>, store: Arc<dyn BasketStore>) -> Self {
        Self { menu, store }
    }
}

#[async_trait]
impl BasketsService for StoreBasketsService {
    async fn get_basket(&self) -> Result<Basket, BasketsServiceError> {
        Ok(self.store.get_basket().await?)
    }

    async fn add_item(&self, item: NewBasketItem) -> Result<Basket, BasketsServiceError> {
        if item.quantity < 1 {
            return Err(BasketsServiceError::InvalidQuantity);
        }

        self.menu
            .get_pizza(item.pizza_id)
            .await
            .map_err(|MenuServiceError::NotFound| BasketsServiceError::PizzaNotFound)?;

        self.store.add_item(item.pizza_id, item.quantity).await?;

        debug!(pizza_id = %item.pizza_id, quantity = item.quantity, "added basket item");

        Ok(self.store.get_basket().await?)
    }

    async fn update_quantity(
        &self,
        pizza: PizzaId,
        quantity: i64,
    ) -> Result<Basket, BasketsServiceError> {
        if !self.store.update_quantity(pizza, quantity).await? {
            return Err(BasketsServiceError::ItemNotFound);
        }

        Ok(self.store.get_basket().await?)
    }

    async fn remove_item(&self, pizza: PizzaId) -> Result<Basket, BasketsServiceError> {
        if !self.store.remove_item(pizza).await? {
            return Err(BasketsServiceError::ItemNotFound);
        }

        Ok(self.store.get_basket().await?)
    }

    async fn clear(&self) -> Result<(), BasketsServiceError> {
        Ok(self.store.clear().await?)
    }

    async fn take_basket(&self) -> Result<Basket, BasketsServiceError> {
        Ok(self.store.take().await?)
    }
}

#[automock]
#[async_trait]
pub trait BasketsService: Send + Sync {
    /// Retrieve the current basket.
    async fn get_basket(&self) -> Result<Basket, BasketsServiceError>;

    /// Add a pizza from the menu to the basket, merging with any existing
    /// quantity. Returns the resulting basket.
    async fn add_item(&self, item: NewBasketItem) -> Result<Basket, BasketsServiceError>;

    /// Set the quantity of a pizza already in the basket; zero or less
    /// removes it. Returns the resulting basket.
    async fn update_quantity(
        &self,
        pizza: PizzaId,
        quantity: i64,
    ) -> Result<Basket, BasketsServiceError>;

    /// Remove a pizza from the basket. Returns the resulting basket.
    async fn remove_item(&self, pizza: PizzaId) -> Result<Basket, BasketsServiceError>;

    /// Empty the basket.
    async fn clear(&self) -> Result<(), BasketsServiceError>;

    /// Empty the basket in one step, returning what it held.
    async fn take_basket(&self) -> Result<Basket, BasketsServiceError>;
}
