//! Orders service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::info;

use crate::domain::{
    baskets::BasketsService,
    orders::{
        errors::OrdersServiceError,
        models::{ORDER_CONFIRMED_MESSAGE, OrderConfirmation, OrderUuid},
    },
};

/// Confirms orders from the shared basket.
#[derive(Clone)]
pub struct BasketOrdersService {
    baskets: Arc<dyn BasketsService>,
}

impl BasketOrdersService {
    #[must_use]
    pub fn new(baskets: Arc<dyn BasketsService>) -> Self {
        Self { baskets }
    }
}

#[async_trait]
impl OrdersService for BasketOrdersService {
    async fn confirm_order(&self) -> Result<OrderConfirmation, OrdersServiceError> {
        let basket = self.baskets.take_basket().await?;

        if basket.is_empty() {
            return Err(OrdersServiceError::EmptyBasket);
        }

        let uuid = OrderUuid::new();

        info!(order_uuid = %uuid, items = basket.items.len(), "confirmed order");

        Ok(OrderConfirmation {
            uuid,
            message: ORDER_CONFIRMED_MESSAGE.to_owned(),
            item_count: basket.items.len(),
            confirmed_at: Timestamp::now(),
        })
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Turn the current basket into an order and empty the basket.
    async fn confirm_order(&self) -> Result<OrderConfirmation, OrdersServiceError>;
}
