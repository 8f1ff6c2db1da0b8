//! Demo data for a fresh database.

use crate::error::AppError;
use crate::model::{NewPizza, NewRestaurant, NewRestaurantPizza};
use crate::service::CrudService;
use crate::store::Store;

const RESTAURANTS: &[(&str, &str)] = &[
    ("Karen's Pizza Shack", "address1"),
    ("Sanjay's Pizza", "address2"),
    ("Kiki's Pizza", "address3"),
];

const PIZZAS: &[(&str, &str)] = &[
    ("Emma", "Dough, Tomato Sauce, Cheese"),
    ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
];

/// (restaurant index, pizza index, price)
const MENU: &[(usize, usize, i64)] = &[(0, 0, 1), (0, 1, 4), (1, 1, 5), (2, 2, 10)];

/// Inserts demo rows when there are no restaurants yet. Returns whether anything was written.
pub async fn seed_demo_data(store: &dyn Store) -> Result<bool, AppError> {
    if !store.list_restaurants().await?.is_empty() {
        tracing::info!("store already has restaurants, skipping seed");
        return Ok(false);
    }

    let mut restaurants = Vec::with_capacity(RESTAURANTS.len());
    for (name, address) in RESTAURANTS {
        restaurants.push(CrudService::create_restaurant(store, NewRestaurant::new(*name, *address)).await?);
    }
    let mut pizzas = Vec::with_capacity(PIZZAS.len());
    for (name, ingredients) in PIZZAS {
        pizzas.push(CrudService::create_pizza(store, NewPizza::new(*name, *ingredients)).await?);
    }
    for &(r, p, price) in MENU {
        let new = NewRestaurantPizza::new(price, restaurants[r].id, pizzas[p].id)?;
        CrudService::create_restaurant_pizza(store, new).await?;
    }

    tracing::info!(
        restaurants = restaurants.len(),
        pizzas = pizzas.len(),
        restaurant_pizzas = MENU.len(),
        "demo data seeded"
    );
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn seeds_once() {
        let store = MemoryStore::new();
        assert!(seed_demo_data(&store).await.unwrap());
        assert!(!seed_demo_data(&store).await.unwrap());

        assert_eq!(store.list_restaurants().await.unwrap().len(), RESTAURANTS.len());
        assert_eq!(store.list_pizzas().await.unwrap().len(), PIZZAS.len());
        let first = store.restaurant_pizzas_for_restaurant(1).await.unwrap();
        assert_eq!(first.iter().map(|rp| rp.price).collect::<Vec<_>>(), vec![1, 4]);
    }
}
