//! Confirm Order Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pizzeria_app::domain::orders::models::OrderConfirmation;

use crate::{
    extensions::*, observability::record_order_confirmed, orders::errors::into_status_error,
};

/// Order Confirmed Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderConfirmedResponse {
    /// The identifier issued for this order
    pub order_uuid: Uuid,

    /// Human readable confirmation
    pub message: String,

    /// Number of distinct pizzas that were in the basket
    pub item_count: usize,

    /// The date and time the order was confirmed
    pub confirmed_at: String,
}

impl From<OrderConfirmation> for OrderConfirmedResponse {
    fn from(confirmation: OrderConfirmation) -> Self {
        Self {
            order_uuid: confirmation.uuid.into_uuid(),
            message: confirmation.message,
            item_count: confirmation.item_count,
            confirmed_at: confirmation.confirmed_at.to_string(),
        }
    }
}

/// Confirm Order Handler
///
/// Confirms the current basket as an order and empties it.
#[endpoint(
    tags("orders"),
    summary = "Confirm Order",
    responses(
        (status_code = StatusCode::CREATED, description = "Order confirmed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Basket is empty"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "orders.confirm",
    skip(depot, res),
    fields(order_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderConfirmedResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let confirmation = state
        .app
        .orders
        .confirm_order()
        .await
        .map_err(into_status_error)?;

    tracing::Span::current().record("order_uuid", tracing::field::display(confirmation.uuid));

    record_order_confirmed();

    res.status_code(StatusCode::CREATED);

    Ok(Json(confirmation.into()))
}
