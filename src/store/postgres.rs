//! PostgreSQL store. Schema lives in [`crate::migration`].

use super::{Store, StoreError, StoreResult};
use crate::model::{Id, NewPizza, NewRestaurant, NewRestaurantPizza, Pizza, Restaurant, RestaurantPizza};
use async_trait::async_trait;
use sqlx::error::ErrorKind;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Sort constraint violations out of generic database errors.
fn classify(e: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db) = &e {
        match db.kind() {
            ErrorKind::ForeignKeyViolation => return StoreError::ForeignKey(db.message().to_string()),
            ErrorKind::CheckViolation => return StoreError::Check(db.message().to_string()),
            _ => {}
        }
    }
    StoreError::Db(e)
}

#[async_trait]
impl Store for PgStore {
    async fn insert_restaurant(&self, new: NewRestaurant) -> StoreResult<Restaurant> {
        let row = sqlx::query_as::<_, Restaurant>(
            "INSERT INTO restaurants (name, address) VALUES ($1, $2) RETURNING id, name, address",
        )
        .bind(&new.name)
        .bind(&new.address)
        .fetch_one(&self.pool)
        .await
        .map_err(classify)?;
        tracing::debug!(id = row.id, "restaurant inserted");
        Ok(row)
    }

    async fn insert_pizza(&self, new: NewPizza) -> StoreResult<Pizza> {
        let row = sqlx::query_as::<_, Pizza>(
            "INSERT INTO pizzas (name, ingredients) VALUES ($1, $2) RETURNING id, name, ingredients",
        )
        .bind(&new.name)
        .bind(&new.ingredients)
        .fetch_one(&self.pool)
        .await
        .map_err(classify)?;
        tracing::debug!(id = row.id, "pizza inserted");
        Ok(row)
    }

    async fn insert_restaurant_pizza(&self, new: NewRestaurantPizza) -> StoreResult<RestaurantPizza> {
        let row = sqlx::query_as::<_, RestaurantPizza>(
            r#"
            INSERT INTO restaurant_pizzas (price, restaurant_id, pizza_id)
            VALUES ($1, $2, $3)
            RETURNING id, price, restaurant_id, pizza_id
            "#,
        )
        .bind(new.price().get())
        .bind(new.restaurant_id)
        .bind(new.pizza_id)
        .fetch_one(&self.pool)
        .await
        .map_err(classify)?;
        tracing::debug!(id = row.id, "restaurant_pizza inserted");
        Ok(row)
    }

    async fn get_restaurant(&self, id: Id) -> StoreResult<Option<Restaurant>> {
        sqlx::query_as::<_, Restaurant>("SELECT id, name, address FROM restaurants WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(classify)
    }

    async fn get_pizza(&self, id: Id) -> StoreResult<Option<Pizza>> {
        sqlx::query_as::<_, Pizza>("SELECT id, name, ingredients FROM pizzas WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(classify)
    }

    async fn list_restaurants(&self) -> StoreResult<Vec<Restaurant>> {
        sqlx::query_as::<_, Restaurant>("SELECT id, name, address FROM restaurants ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(classify)
    }

    async fn list_pizzas(&self) -> StoreResult<Vec<Pizza>> {
        sqlx::query_as::<_, Pizza>("SELECT id, name, ingredients FROM pizzas ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(classify)
    }

    async fn restaurant_pizzas_for_restaurant(&self, restaurant_id: Id) -> StoreResult<Vec<RestaurantPizza>> {
        sqlx::query_as::<_, RestaurantPizza>(
            "SELECT id, price, restaurant_id, pizza_id FROM restaurant_pizzas WHERE restaurant_id = $1 ORDER BY id",
        )
        .bind(restaurant_id)
        .fetch_all(&self.pool)
        .await
        .map_err(classify)
    }

    async fn delete_restaurant(&self, id: Id) -> StoreResult<bool> {
        let mut tx = self.pool.begin().await?;
        let associations = sqlx::query("DELETE FROM restaurant_pizzas WHERE restaurant_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(classify)?
            .rows_affected();
        let deleted = sqlx::query("DELETE FROM restaurants WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(classify)?
            .rows_affected();
        if deleted == 0 {
            tx.rollback().await?;
            return Ok(false);
        }
        tx.commit().await?;
        tracing::debug!(id, associations, "restaurant deleted");
        Ok(true)
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migration::{apply_schema, ensure_database_exists};
    use sqlx::postgres::PgPoolOptions;

    #[test]
    fn non_database_errors_stay_generic() {
        assert!(matches!(classify(sqlx::Error::RowNotFound), StoreError::Db(_)));
    }

    #[tokio::test]
    #[ignore = "needs DATABASE_URL pointing at a live PostgreSQL"]
    async fn check_violation_is_classified() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for postgres tests");
        ensure_database_exists(&url).await.unwrap();
        let pool = PgPoolOptions::new().max_connections(1).connect(&url).await.unwrap();
        apply_schema(&pool).await.unwrap();
        let store = PgStore::new(pool);
        let r = store.insert_restaurant(NewRestaurant::new("r", "a")).await.unwrap();
        let p = store.insert_pizza(NewPizza::new("p", "i")).await.unwrap();

        let err = sqlx::query("INSERT INTO restaurant_pizzas (price, restaurant_id, pizza_id) VALUES (50, $1, $2)")
            .bind(r.id)
            .bind(p.id)
            .execute(store.pool())
            .await
            .unwrap_err();
        match classify(err) {
            StoreError::Check(msg) => assert!(msg.contains("price_between_1_and_30"), "{msg}"),
            other => panic!("expected check violation, got {other:?}"),
        }

        let err = sqlx::query("INSERT INTO restaurant_pizzas (price, restaurant_id, pizza_id) VALUES (5, $1, $2)")
            .bind(r.id)
            .bind(i64::MAX)
            .execute(store.pool())
            .await
            .unwrap_err();
        assert!(matches!(classify(err), StoreError::ForeignKey(_)));
    }
}
