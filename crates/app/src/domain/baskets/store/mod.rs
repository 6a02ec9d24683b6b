//! Basket Stores
//!
//! A basket store owns the mapping from pizza to requested quantity for the
//! single, process-wide basket. Stores never check pizza ids against the
//! menu; callers do.
//!
//! `add_item` merges additively and does not validate the sign of
//! `quantity`, so a negative value can drive an existing entry to zero or
//! below. `update_quantity` treats non-positive values as removal. The
//! asymmetry is kept on purpose; see `BasketsService::add_item` for the
//! validated entry point.

use async_trait::async_trait;
use mockall::automock;

use crate::domain::{
    baskets::{errors::BasketStoreError, models::Basket},
    menu::models::PizzaId,
};

#[cfg(test)]
mod contract;
mod memory;
mod postgres;

pub use memory::InMemoryBasketStore;
pub use postgres::PgBasketStore;

#[automock]
#[async_trait]
pub trait BasketStore: Send + Sync {
    /// Add `quantity` to the entry for `pizza`, creating it when absent.
    async fn add_item(&self, pizza: PizzaId, quantity: i64) -> Result<(), BasketStoreError>;

    /// Replace the quantity for `pizza`, removing the entry when
    /// `quantity <= 0`.
    ///
    /// Returns `false`, without mutating anything, when there was no entry.
    async fn update_quantity(&self, pizza: PizzaId, quantity: i64)
    -> Result<bool, BasketStoreError>;

    /// Remove the entry for `pizza`, returning whether it was present.
    async fn remove_item(&self, pizza: PizzaId) -> Result<bool, BasketStoreError>;

    /// Snapshot the current basket.
    async fn get_basket(&self) -> Result<Basket, BasketStoreError>;

    /// Empty the basket.
    async fn clear(&self) -> Result<(), BasketStoreError>;

    /// Empty the basket, returning everything it held at that instant.
    ///
    /// An item added concurrently lands either in the returned basket or in
    /// the emptied one, never in neither.
    async fn take(&self) -> Result<Basket, BasketStoreError>;
}
