//! Persistence for restaurants, pizzas, and restaurant_pizzas.
//!
//! Both backends enforce the same integrity rules: association rows must point at
//! existing parents, prices stay within the check range, and deleting a restaurant
//! removes its associations with it.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use crate::model::{Id, NewPizza, NewRestaurant, NewRestaurantPizza, Pizza, Restaurant, RestaurantPizza};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// Referenced parent row does not exist.
    #[error("{0}")]
    ForeignKey(String),
    /// Row rejected by a CHECK constraint.
    #[error("{0}")]
    Check(String),
    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait Store: Send + Sync {
    async fn insert_restaurant(&self, new: NewRestaurant) -> StoreResult<Restaurant>;

    async fn insert_pizza(&self, new: NewPizza) -> StoreResult<Pizza>;

    /// Fails with [`StoreError::ForeignKey`] when either parent is missing.
    async fn insert_restaurant_pizza(&self, new: NewRestaurantPizza) -> StoreResult<RestaurantPizza>;

    async fn get_restaurant(&self, id: Id) -> StoreResult<Option<Restaurant>>;

    async fn get_pizza(&self, id: Id) -> StoreResult<Option<Pizza>>;

    async fn list_restaurants(&self) -> StoreResult<Vec<Restaurant>>;

    async fn list_pizzas(&self) -> StoreResult<Vec<Pizza>>;

    async fn restaurant_pizzas_for_restaurant(&self, restaurant_id: Id) -> StoreResult<Vec<RestaurantPizza>>;

    /// Deletes the restaurant and its associations together. Returns `false` when
    /// no restaurant had that id.
    async fn delete_restaurant(&self, id: Id) -> StoreResult<bool>;

    async fn ping(&self) -> StoreResult<()>;
}
