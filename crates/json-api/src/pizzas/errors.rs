//! Errors

use salvo::http::StatusError;

use pizzeria_app::domain::menu::MenuServiceError;

pub(crate) fn into_status_error(error: MenuServiceError) -> StatusError {
    match error {
        MenuServiceError::NotFound => StatusError::not_found().brief("Pizza not found"),
    }
}
