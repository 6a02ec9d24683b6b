//! App Context

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::{
    database,
    domain::{
        baskets::{
            BasketStore, BasketsService, InMemoryBasketStore, PgBasketStore, StoreBasketsService,
        },
        menu::{Catalog, MenuService, StaticMenuService},
        orders::{BasketOrdersService, OrdersService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

/// Composition root: one menu, one basket and the services over them.
#[derive(Clone)]
pub struct AppContext {
    pub menu: Arc<dyn MenuService>,
    pub baskets: Arc<dyn BasketsService>,
    pub orders: Arc<dyn OrdersService>,
}

impl AppContext {
    /// Wire the services over the given basket store.
    #[must_use]
    pub fn with_store(store: Arc<dyn BasketStore>) -> Self {
        let menu: Arc<dyn MenuService> = Arc::new(StaticMenuService::new(Catalog::standard()));
        let baskets: Arc<dyn BasketsService> =
            Arc::new(StoreBasketsService::new(Arc::clone(&menu), store));
        let orders = Arc::new(BasketOrdersService::new(Arc::clone(&baskets)));

        Self {
            menu,
            baskets,
            orders,
        }
    }

    /// Build an application context holding the basket in process memory.
    #[must_use]
    pub fn in_memory() -> Self {
        info!("using in-memory basket store");

        Self::with_store(Arc::new(InMemoryBasketStore::new()))
    }

    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or preparing
    /// the schema fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        database::ensure_schema(&pool)
            .await
            .map_err(AppInitError::Database)?;

        info!("using postgres basket store");

        Ok(Self::with_store(Arc::new(PgBasketStore::new(pool))))
    }
}
