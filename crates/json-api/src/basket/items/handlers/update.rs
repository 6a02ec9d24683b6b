//! Update Basket Item Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use pizzeria_app::domain::menu::models::PizzaId;

use crate::{basket::errors::into_status_error, basket::get::BasketResponse, extensions::*};

/// Update Basket Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateBasketItemRequest {
    /// The new quantity; zero or less removes the item
    pub quantity: i64,
}

/// Update Basket Item Handler
///
/// Replaces the quantity of a pizza already in the basket.
#[endpoint(
    tags("basket"),
    summary = "Update Basket Item",
    responses(
        (status_code = StatusCode::OK, description = "Item updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Pizza is not in the basket"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "basket.items.update",
    skip(pizza, json, depot),
    fields(
        pizza_id = tracing::field::Empty,
        quantity = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    pizza: PathParam<u32>,
    json: JsonBody<UpdateBasketItemRequest>,
    depot: &mut Depot,
) -> Result<Json<BasketResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let pizza = pizza.into_inner();
    let quantity = json.into_inner().quantity;

    let span = tracing::Span::current();

    span.record("pizza_id", pizza);
    span.record("quantity", quantity);

    let basket = state
        .app
        .baskets
        .update_quantity(PizzaId::new(pizza), quantity)
        .await
        .map_err(into_status_error)?;

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
        baskets_service(
            baskets,
            Router::with_path("basket/items/{pizza}").put(handler),
        )
    }

    #[tokio::test]
    async fn test_update_returns_200_with_basket() -> TestResult {
        let mut baskets = MockBasketsService::new();

        baskets
            .expect_update_quantity()
            .once()
            .withf(|pizza, quantity| *pizza == PizzaId::new(4) && *quantity == 5)
            .return_once(|_, _| Ok(make_basket(&[(4, 5)])));

        let mut res = TestClient::put("http://example.com/basket/items/4")
            .json(&json!({ "quantity": 5 }))
            .send(&make_service(baskets))
            .await;

        let body: BasketResponse = res.take_json().await?;
        let quantity = body.items.first().map(|item| item.quantity);

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(quantity, Some(5));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_to_zero_is_forwarded() -> TestResult {
        let mut baskets = MockBasketsService::new();

        baskets
            .expect_update_quantity()
            .once()
            .withf(|pizza, quantity| *pizza == PizzaId::new(4) && *quantity == 0)
            .return_once(|_, _| Ok(make_basket(&[])));

        let mut res = TestClient::put("http://example.com/basket/items/4")
            .json(&json!({ "quantity": 0 }))
            .send(&make_service(baskets))
            .await;

        let body: BasketResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.items.is_empty(), "expected item to be removed");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_absent_item_returns_404() {
        let mut baskets = MockBasketsService::new();

        baskets
            .expect_update_quantity()
            .once()
            .return_once(|_, _| Err(BasketsServiceError::ItemNotFound));

        let res = TestClient::put("http://example.com/basket/items/2")
            .json(&json!({ "quantity": 1 }))
            .send(&make_service(baskets))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_update_missing_quantity_returns_400() {
        let mut baskets = MockBasketsService::new();

        baskets.expect_update_quantity().never();

        let res = TestClient::put("http://example.com/basket/items/2")
            .json(&json!({}))
            .send(&make_service(baskets))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
