//! `PostgreSQL` basket store.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};

use crate::domain::{
    baskets::{
        errors::BasketStoreError,
        models::{Basket, BasketItem},
        store::BasketStore,
    },
    menu::models::PizzaId,
};

const ADD_BASKET_ITEM_SQL: &str = include_str!("../sql/add_basket_item.sql");
const UPDATE_BASKET_ITEM_SQL: &str = include_str!("../sql/update_basket_item.sql");
const DELETE_BASKET_ITEM_SQL: &str = include_str!("../sql/delete_basket_item.sql");
const GET_BASKET_ITEMS_SQL: &str = include_str!("../sql/get_basket_items.sql");
const CLEAR_BASKET_ITEMS_SQL: &str = include_str!("../sql/clear_basket_items.sql");
const TAKE_BASKET_ITEMS_SQL: &str = include_str!("../sql/take_basket_items.sql");

/// Basket persisted in the `basket_items` table.
///
/// All statements are static and take their values as bound parameters.
#[derive(Debug, Clone)]
pub struct PgBasketStore {
    pool: PgPool,
}

impl PgBasketStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn delete_item(&self, pizza: PizzaId) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_BASKET_ITEM_SQL)
            .bind(i64::from(pizza.get()))
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

#[async_trait]
impl BasketStore for PgBasketStore {
    async fn add_item(&self, pizza: PizzaId, quantity: i64) -> Result<(), BasketStoreError> {
        query(ADD_BASKET_ITEM_SQL)
            .bind(i64::from(pizza.get()))
            .bind(quantity)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn update_quantity(
        &self,
        pizza: PizzaId,
        quantity: i64,
    ) -> Result<bool, BasketStoreError> {
        if quantity <= 0 {
            return Ok(self.delete_item(pizza).await? > 0);
        }

        let rows_affected = query(UPDATE_BASKET_ITEM_SQL)
            .bind(i64::from(pizza.get()))
            .bind(quantity)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected > 0)
    }

    async fn remove_item(&self, pizza: PizzaId) -> Result<bool, BasketStoreError> {
        Ok(self.delete_item(pizza).await? > 0)
    }

    async fn get_basket(&self) -> Result<Basket, BasketStoreError> {
        let items = query_as::<Postgres, BasketItem>(GET_BASKET_ITEMS_SQL)
            .fetch_all(&self.pool)
            .await?;

        Ok(Basket { items })
    }

    async fn clear(&self) -> Result<(), BasketStoreError> {
        query(CLEAR_BASKET_ITEMS_SQL).execute(&self.pool).await?;

        Ok(())
    }

    async fn take(&self) -> Result<Basket, BasketStoreError> {
        let mut items = query_as::<Postgres, BasketItem>(TAKE_BASKET_ITEMS_SQL)
            .fetch_all(&self.pool)
            .await?;

        // RETURNING has no ORDER BY.
        items.sort_unstable_by_key(|item| item.pizza_id);

        Ok(Basket { items })
    }
}

impl<'r> FromRow<'r, PgRow> for BasketItem {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            pizza_id: try_get_pizza_id(row, "pizza_id")?,
            quantity: row.try_get("quantity")?,
        })
    }
}

fn try_get_pizza_id(row: &PgRow, col: &str) -> Result<PizzaId, sqlx::Error> {
    let id_i64: i64 = row.try_get(col)?;

    u32::try_from(id_i64)
        .map(PizzaId::new)
        .map_err(|e| sqlx::Error::ColumnDecode {
            index: col.to_string(),
            source: Box::new(e),
        })
}
