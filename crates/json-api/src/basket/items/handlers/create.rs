//! Add Basket Item Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use pizzeria_app::domain::{baskets::models::NewBasketItem, menu::models::PizzaId};

use crate::{basket::errors::into_status_error, basket::get::BasketResponse, extensions::*};

/// Add Basket Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddBasketItemRequest {
    /// The menu identifier of the pizza to add
    pub pizza_id: u32,

    /// How many to add; merged with any quantity already in the basket
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

fn default_quantity() -> i64 {
    1
}

impl From<AddBasketItemRequest> for NewBasketItem {
    fn from(request: AddBasketItemRequest) -> Self {
        NewBasketItem {
            pizza_id: PizzaId::new(request.pizza_id),
            quantity: request.quantity,
        }
    }
}

/// Add Basket Item Handler
///
/// Adds a pizza to the basket and returns the resulting basket.
#[endpoint(
    tags("basket"),
    summary = "Add Basket Item",
    responses(
        (status_code = StatusCode::CREATED, description = "Item added"),
        (status_code = StatusCode::NOT_FOUND, description = "Pizza not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "basket.items.add",
    skip(json, depot, res),
    fields(
        pizza_id = tracing::field::Empty,
        quantity = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<AddBasketItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<BasketResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let item: NewBasketItem = json.into_inner().into();

    let span = tracing::Span::current();

    span.record("pizza_id", item.pizza_id.get());
    span.record("quantity", item.quantity);

    let basket = state
        .app
        .baskets
        .add_item(item)
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(basket.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use pizzeria_app::domain::baskets::{BasketsServiceError, MockBasketsService};

    use crate::test_helpers::{baskets_service, make_basket};

    use super::*;

    fn make_service(baskets: MockBasketsService) -> Service {
        baskets_service(baskets, Router::with_path("basket/items").post(handler))
    }

    #[tokio::test]
    async fn test_add_item_returns_201_with_basket() -> TestResult {
        let mut baskets = MockBasketsService::new();

        baskets
            .expect_add_item()
            .once()
            .withf(|item| {
                *item
                    == NewBasketItem {
                        pizza_id: PizzaId::new(2),
                        quantity: 3,
                    }
            })
            .return_once(|_| Ok(make_basket(&[(2, 3)])));

        let mut res = TestClient::post("http://example.com/basket/items")
            .json(&json!({ "pizza_id": 2, "quantity": 3 }))
            .send(&make_service(baskets))
            .await;

        let body: BasketResponse = res.take_json().await?;
        let items: Vec<(u32, i64)> = body
            .items
            .iter()
            .map(|item| (item.pizza_id, item.quantity))
            .collect();

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(items, vec![(2, 3)]);

        Ok(())
    }

    #[tokio::test]
    async fn test_add_item_defaults_quantity_to_one() {
        let mut baskets = MockBasketsService::new();

        baskets
            .expect_add_item()
            .once()
            .withf(|item| item.quantity == 1)
            .return_once(|_| Ok(make_basket(&[(1, 1)])));

        let res = TestClient::post("http://example.com/basket/items")
            .json(&json!({ "pizza_id": 1 }))
            .send(&make_service(baskets))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
    }

    #[tokio::test]
    async fn test_add_unknown_pizza_returns_404() {
        let mut baskets = MockBasketsService::new();

        baskets
            .expect_add_item()
            .once()
            .return_once(|_| Err(BasketsServiceError::PizzaNotFound));

        let res = TestClient::post("http://example.com/basket/items")
            .json(&json!({ "pizza_id": 42, "quantity": 1 }))
            .send(&make_service(baskets))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_add_zero_quantity_returns_400() {
        let mut baskets = MockBasketsService::new();

        baskets
            .expect_add_item()
            .once()
            .withf(|item| item.quantity == 0)
            .return_once(|_| Err(BasketsServiceError::InvalidQuantity));

        let res = TestClient::post("http://example.com/basket/items")
            .json(&json!({ "pizza_id": 1, "quantity": 0 }))
            .send(&make_service(baskets))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_add_malformed_body_returns_400() {
        let mut baskets = MockBasketsService::new();

        baskets.expect_add_item().never();

        let res = TestClient::post("http://example.com/basket/items")
            .json(&json!({ "pizza_id": "margherita" }))
            .send(&make_service(baskets))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
