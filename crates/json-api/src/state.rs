//! State

use std::sync::Arc;

use thiserror::Error;

use pizzeria_app::context::{AppContext, AppInitError};

use crate::config::store::{BasketStoreKind, StoreConfig};

#[derive(Debug, Error)]
pub(crate) enum StateInitError {
    #[error("DATABASE_URL is required for the postgres basket store")]
    MissingDatabaseUrl,

    #[error(transparent)]
    App(#[from] AppInitError),
}

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext) -> Self {
        Self { app }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self::new(app))
    }
}

/// Build the application context for the configured basket store.
pub(crate) async fn build_app_context(config: &StoreConfig) -> Result<AppContext, StateInitError> {
    match config.basket_store {
        BasketStoreKind::Memory => Ok(AppContext::in_memory()),
        BasketStoreKind::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .ok_or(StateInitError::MissingDatabaseUrl)?;

            Ok(AppContext::from_database_url(url).await?)
        }
    }
}
