//! Get Basket Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use pizzeria_app::domain::baskets::models::{Basket, BasketItem};

use crate::{basket::errors::into_status_error, extensions::*};

/// Basket Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BasketResponse {
    /// The items in the basket
    pub items: Vec<BasketItemResponse>,
}

impl From<Basket> for BasketResponse {
    fn from(basket: Basket) -> Self {
        Self {
            items: basket
                .items
                .into_iter()
                .map(BasketItemResponse::from)
                .collect(),
        }
    }
}

/// Basket Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BasketItemResponse {
    /// The menu identifier of the pizza
    pub pizza_id: u32,

    /// How many of this pizza are in the basket
    pub quantity: i64,
}

impl From<BasketItem> for BasketItemResponse {
    fn from(item: BasketItem) -> Self {
        Self {
            pizza_id: item.pizza_id.get(),
            quantity: item.quantity,
        }
    }
}

/// Get Basket Handler
///
/// Returns the current basket.
#[endpoint(
    tags("basket"),
    summary = "Get Basket",
    responses(
        (status_code = StatusCode::OK, description = "Current basket"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    )
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<BasketResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let basket = state
        .app
        .baskets
        .get_basket()
        .await
        .map_err(into_status_error)?;

    Ok(Json(basket.into()))
}
