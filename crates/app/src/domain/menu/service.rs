//! Menu service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::domain::menu::{
    catalog::Catalog,
    errors::MenuServiceError,
    models::{Pizza, PizzaId},
};

#[derive(Debug, Clone)]
pub struct StaticMenuService {
    catalog: Arc<Catalog>,
}

impl StaticMenuService {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

impl Default for StaticMenuService {
    fn default() -> Self {
        Self::new(Catalog::standard())
    }
}

#[async_trait]
impl MenuService for StaticMenuService {
    async fn list_pizzas(&self) -> Vec<Pizza> {
        self.catalog.list().to_vec()
    }

    async fn get_pizza(&self, pizza: PizzaId) -> Result<Pizza, MenuServiceError> {
        self.catalog
            .find(pizza)
            .cloned()
            .ok_or(MenuServiceError::NotFound)
    }
}

#[automock]
#[async_trait]
pub trait MenuService: Send + Sync {
    /// Retrieves every pizza on the menu, in menu order.
    async fn list_pizzas(&self) -> Vec<Pizza>;

    /// Retrieve a single pizza.
    async fn get_pizza(&self, pizza: PizzaId) -> Result<Pizza, MenuServiceError>;
}
