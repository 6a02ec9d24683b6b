//! Basket Store Config

use clap::Args;

/// Where the basket lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum BasketStoreKind {
    /// Process memory; emptied on restart.
    Memory,

    /// A `basket_items` table in `PostgreSQL`.
    Postgres,
}

/// Basket storage settings.
#[derive(Debug, Args)]
pub struct StoreConfig {
    /// Basket storage backend (memory, postgres)
    #[arg(long, env = "BASKET_STORE", value_enum, default_value_t = BasketStoreKind::Memory)]
    pub basket_store: BasketStoreKind,

    /// `PostgreSQL` connection string, required for the postgres backend
    #[arg(
        long,
        env = "DATABASE_URL",
        hide_env_values = true,
        required_if_eq("basket_store", "postgres")
    )]
    pub database_url: Option<String>,
}
