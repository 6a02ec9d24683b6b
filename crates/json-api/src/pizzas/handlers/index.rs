//! Pizza Index Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, pizzas::get::PizzaResponse};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PizzasResponse {
    /// The menu, in catalog order
    pub pizzas: Vec<PizzaResponse>,
}

/// Pizza Index Handler
///
/// Returns the full menu.
#[endpoint(tags("pizzas"), summary = "List Pizzas")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<PizzasResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let pizzas = state.app.menu.list_pizzas().await;

    Ok(Json(PizzasResponse {
        pizzas: pizzas.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::{
        affix_state::inject,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use pizzeria_app::{context::AppContext, domain::menu::MockMenuService};

    use crate::{
        state::State,
        test_helpers::{make_pizza, menu_service},
    };

    use super::*;

    fn make_service(menu: MockMenuService) -> Service {
        menu_service(menu, Router::with_path("pizzas").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_200() -> TestResult {
        let mut menu = MockMenuService::new();

        menu.expect_list_pizzas()
            .once()
            .return_once(|| vec![make_pizza(1), make_pizza(2)]);

        menu.expect_get_pizza().never();

        let mut res = TestClient::get("http://example.com/pizzas")
            .send(&make_service(menu))
            .await;

        let body: PizzasResponse = res.take_json().await?;
        let ids: Vec<u32> = body.pizzas.iter().map(|pizza| pizza.id).collect();

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(ids, vec![1, 2]);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_serves_standard_menu_in_order() -> TestResult {
        let service = Service::new(
            Router::new()
                .hoop(inject(State::from_app_context(AppContext::in_memory())))
                .push(Router::with_path("pizzas").get(handler)),
        );

        let body: PizzasResponse = TestClient::get("http://example.com/pizzas")
            .send(&service)
            .await
            .take_json()
            .await?;

        let ids: Vec<u32> = body.pizzas.iter().map(|pizza| pizza.id).collect();

        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(
            body.pizzas.first().map(|pizza| pizza.name.as_str()),
            Some("Margherita")
        );

        Ok(())
    }
}
