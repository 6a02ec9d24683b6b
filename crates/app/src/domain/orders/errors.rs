//! Orders service errors.

use thiserror::Error;

use crate::domain::baskets::BasketsServiceError;

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("cannot confirm an order for an empty basket")]
    EmptyBasket,

    #[error("basket unavailable")]
    Basket(#[from] BasketsServiceError),
}
