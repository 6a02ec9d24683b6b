//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use pizzeria_app::{
    context::AppContext,
    domain::{
        baskets::{
            MockBasketsService,
            models::{Basket, BasketItem},
        },
        menu::{
            MockMenuService,
            models::{Pizza, PizzaId},
        },
        orders::MockOrdersService,
    },
};

use crate::state::State;

fn strict_menu_mock() -> MockMenuService {
    let mut menu = MockMenuService::new();

    menu.expect_list_pizzas().never();
    menu.expect_get_pizza().never();

    menu
}

fn strict_baskets_mock() -> MockBasketsService {
    let mut baskets = MockBasketsService::new();

    baskets.expect_get_basket().never();
    baskets.expect_add_item().never();
    baskets.expect_update_quantity().never();
    baskets.expect_remove_item().never();
    baskets.expect_clear().never();
    baskets.expect_take_basket().never();

    baskets
}

fn strict_orders_mock() -> MockOrdersService {
    let mut orders = MockOrdersService::new();

    orders.expect_confirm_order().never();

    orders
}

fn state(
    menu: MockMenuService,
    baskets: MockBasketsService,
    orders: MockOrdersService,
) -> Arc<State> {
    State::from_app_context(AppContext {
        menu: Arc::new(menu),
        baskets: Arc::new(baskets),
        orders: Arc::new(orders),
    })
}

fn service(state: Arc<State>, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state)).push(route))
}

pub(crate) fn menu_service(menu: MockMenuService, route: Router) -> Service {
    service(state(menu, strict_baskets_mock(), strict_orders_mock()), route)
}

pub(crate) fn baskets_service(baskets: MockBasketsService, route: Router) -> Service {
    service(state(strict_menu_mock(), baskets, strict_orders_mock()), route)
}

pub(crate) fn orders_service(orders: MockOrdersService, route: Router) -> Service {
    service(state(strict_menu_mock(), strict_baskets_mock(), orders), route)
}

pub(crate) fn make_pizza(id: u32) -> Pizza {
    Pizza {
        id: PizzaId::new(id),
        name: format!("Pizza {id}"),
        description: "Test pizza".to_owned(),
        ingredients: vec!["tomato sauce".to_owned(), "mozzarella".to_owned()].into(),
    }
}

pub(crate) fn make_basket(items: &[(u32, i64)]) -> Basket {
    Basket {
        items: items
            .iter()
            .map(|(pizza_id, quantity)| BasketItem {
                pizza_id: PizzaId::new(*pizza_id),
                quantity: *quantity,
            })
            .collect(),
    }
}
