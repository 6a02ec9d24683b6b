//! Remove Basket Item Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use pizzeria_app::domain::menu::models::PizzaId;

use crate::{basket::errors::into_status_error, basket::get::BasketResponse, extensions::*};

/// Remove Basket Item Handler
///
/// Removes a pizza from the basket and returns the resulting basket.
#[endpoint(
    tags("basket"),
    summary = "Remove Basket Item",
    responses(
        (status_code = StatusCode::OK, description = "Item removed"),
        (status_code = StatusCode::NOT_FOUND, description = "Pizza is not in the basket"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    )
)]
#[tracing::instrument(
    name = "basket.items.remove",
    skip(pizza, depot),
    fields(pizza_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    pizza: PathParam<u32>,
    depot: &mut Depot,
) -> Result<Json<BasketResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let pizza = pizza.into_inner();

    tracing::Span::current().record("pizza_id", pizza);

    let basket = state
        .app
        .baskets
        .remove_item(PizzaId::new(pizza))
        .await
        .map_err(into_status_error)?;

    Ok(Json(basket.into()))
}
