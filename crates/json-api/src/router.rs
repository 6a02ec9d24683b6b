//! App Router

use salvo::Router;

use crate::{basket, orders, pizzas};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(
            Router::with_path("pizzas")
                .get(pizzas::index::handler)
                .push(Router::with_path("{pizza}").get(pizzas::get::handler)),
        )
        .push(
            Router::with_path("basket")
                .get(basket::get::handler)
                .delete(basket::clear::handler)
                .push(
                    Router::with_path("items")
                        .post(basket::items::create::handler)
                        .push(
                            Router::with_path("{pizza}")
                                .put(basket::items::update::handler)
                                .delete(basket::items::delete::handler),
                        ),
                ),
        )
        .push(Router::with_path("orders").post(orders::create::handler))
}
