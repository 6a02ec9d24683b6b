//! Order Models

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Order UUID
pub type OrderUuid = TypedUuid<OrderConfirmation>;

/// Message returned with every confirmed order.
pub const ORDER_CONFIRMED_MESSAGE: &str = "Order confirmed";

/// Order Confirmation Model
///
/// Only the identifier survives confirmation; the basket contents are
/// discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderConfirmation {
    pub uuid: OrderUuid,
    pub message: String,
    pub item_count: usize,
    pub confirmed_at: Timestamp,
}
