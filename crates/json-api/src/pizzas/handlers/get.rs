//! Get Pizza Handler

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use pizzeria_app::domain::menu::models::{Pizza, PizzaId};

use crate::{extensions::*, pizzas::errors::into_status_error};

/// Pizza Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PizzaResponse {
    /// The menu identifier of the pizza
    pub id: u32,

    /// The display name of the pizza
    pub name: String,

    /// A short description of the pizza
    pub description: String,

    /// The ingredients, in menu order
    pub ingredients: Vec<String>,
}

impl From<Pizza> for PizzaResponse {
    fn from(pizza: Pizza) -> Self {
        Self {
            id: pizza.id.get(),
            name: pizza.name,
            description: pizza.description,
            ingredients: pizza.ingredients.into_vec(),
        }
    }
}

/// Get Pizza Handler
///
/// Returns a single pizza from the menu.
#[endpoint(
    tags("pizzas"),
    summary = "Get Pizza",
    responses(
        (status_code = StatusCode::OK, description = "Pizza found"),
        (status_code = StatusCode::NOT_FOUND, description = "Pizza not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    )
)]
pub(crate) async fn handler(
    pizza: PathParam<u32>,
    depot: &mut Depot,
) -> Result<Json<PizzaResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let pizza = state
        .app
        .menu
        .get_pizza(PizzaId::new(pizza.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(pizza.into()))
}
