//! Basket errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BasketStoreError {
    #[error("storage error")]
    Sql(#[from] sqlx::Error),
}

#[derive(Debug, Error)]
pub enum BasketsServiceError {
    #[error("pizza not found")]
    PizzaNotFound,

    #[error("basket item not found")]
    ItemNotFound,

    #[error("quantity must be at least 1")]
    InvalidQuantity,

    #[error("basket storage failed")]
    Storage(#[from] BasketStoreError),
}
