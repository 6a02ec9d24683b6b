//! Errors

use salvo::http::StatusError;
use tracing::error;

use pizzeria_app::domain::baskets::BasketsServiceError;

pub(crate) fn into_status_error(error: BasketsServiceError) -> StatusError {
    match error {
        BasketsServiceError::PizzaNotFound => StatusError::not_found().brief("Pizza not found"),
        BasketsServiceError::ItemNotFound => {
            StatusError::not_found().brief("Pizza is not in the basket")
        }
        BasketsServiceError::InvalidQuantity => {
            StatusError::bad_request().brief("Quantity must be at least 1")
        }
        BasketsServiceError::Storage(source) => {
            error!("basket storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
