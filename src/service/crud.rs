//! Operations behind the HTTP endpoints, independent of the store backend.

use crate::error::AppError;
use crate::model::{Id, NewPizza, NewRestaurant, NewRestaurantPizza, Pizza, Restaurant, RestaurantPizza};
use crate::store::Store;

pub struct CrudService;

impl CrudService {
    pub async fn list_restaurants(store: &dyn Store) -> Result<Vec<Restaurant>, AppError> {
        Ok(store.list_restaurants().await?)
    }

    /// Restaurant plus its associations ordered by id.
    pub async fn restaurant_with_pizzas(
        store: &dyn Store,
        id: Id,
    ) -> Result<(Restaurant, Vec<RestaurantPizza>), AppError> {
        let restaurant = store
            .get_restaurant(id)
            .await?
            .ok_or(AppError::NotFound("Restaurant"))?;
        let restaurant_pizzas = store.restaurant_pizzas_for_restaurant(id).await?;
        Ok((restaurant, restaurant_pizzas))
    }

    /// Deletes the restaurant together with its associations.
    pub async fn delete_restaurant(store: &dyn Store, id: Id) -> Result<(), AppError> {
        if !store.delete_restaurant(id).await? {
            return Err(AppError::NotFound("Restaurant"));
        }
        tracing::info!(id, "restaurant deleted");
        Ok(())
    }

    pub async fn list_pizzas(store: &dyn Store) -> Result<Vec<Pizza>, AppError> {
        Ok(store.list_pizzas().await?)
    }

    pub async fn create_restaurant(store: &dyn Store, new: NewRestaurant) -> Result<Restaurant, AppError> {
        Ok(store.insert_restaurant(new).await?)
    }

    pub async fn create_pizza(store: &dyn Store, new: NewPizza) -> Result<Pizza, AppError> {
        Ok(store.insert_pizza(new).await?)
    }

    /// Persists an already validated association and loads both parents for the
    /// response. Missing parents are rejected by the store.
    pub async fn create_restaurant_pizza(
        store: &dyn Store,
        new: NewRestaurantPizza,
    ) -> Result<(RestaurantPizza, Pizza, Restaurant), AppError> {
        let rp = store.insert_restaurant_pizza(new).await?;
        // Parents can vanish between insert and read under a concurrent delete.
        let pizza = store
            .get_pizza(rp.pizza_id)
            .await?
            .ok_or_else(|| AppError::ForeignKey(format!("pizza {} no longer exists", rp.pizza_id)))?;
        let restaurant = store.get_restaurant(rp.restaurant_id).await?.ok_or_else(|| {
            AppError::ForeignKey(format!("restaurant {} no longer exists", rp.restaurant_id))
        })?;
        tracing::info!(
            id = rp.id,
            restaurant_id = rp.restaurant_id,
            pizza_id = rp.pizza_id,
            price = rp.price,
            "restaurant_pizza created"
        );
        Ok((rp, pizza, restaurant))
    }
}
