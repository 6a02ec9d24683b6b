//! Clear Basket Handler

use salvo::prelude::*;

use crate::{basket::errors::into_status_error, extensions::*};

/// Clear Basket Handler
#[endpoint(
    tags("basket"),
    summary = "Clear Basket",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Basket cleared"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    )
)]
#[tracing::instrument(name = "basket.clear", skip(depot), err)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<StatusCode, StatusError> {
    let state = depot.state_or_500()?;

    state
        .app
        .baskets
        .clear()
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}
