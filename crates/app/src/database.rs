//! Database connection management

use sqlx::{PgPool, query};

/// Schema for the persistent basket store.
const CREATE_BASKET_ITEMS_SQL: &str = include_str!("../migrations/0001_create_basket_items.sql");

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPool::connect(database_url).await
}

/// Create the tables the basket store needs when they are missing.
///
/// # Errors
///
/// Returns an error if the schema statement fails.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    query(CREATE_BASKET_ITEMS_SQL).execute(pool).await?;

    Ok(())
}
