//! Baskets

pub mod errors;
pub mod models;
pub mod service;
pub mod store;

pub use errors::{BasketStoreError, BasketsServiceError};
pub use service::*;
pub use store::{BasketStore, InMemoryBasketStore, MockBasketStore, PgBasketStore};
