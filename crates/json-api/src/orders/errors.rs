//! Errors

use salvo::http::StatusError;

use pizzeria_app::domain::orders::OrdersServiceError;

use crate::basket;

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::EmptyBasket => StatusError::bad_request().brief("Basket is empty"),
        OrdersServiceError::Basket(source) => basket::errors::into_status_error(source),
    }
}
