//! In-process store with the same foreign-key and cascade rules as the PostgreSQL schema.
//! Prices arrive as a checked `Price`, which stands in for the CHECK constraint.

use super::{Store, StoreError, StoreResult};
use crate::model::{Id, NewPizza, NewRestaurant, NewRestaurantPizza, Pizza, Restaurant, RestaurantPizza};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Tables {
    restaurants: BTreeMap<Id, Restaurant>,
    pizzas: BTreeMap<Id, Pizza>,
    restaurant_pizzas: BTreeMap<Id, RestaurantPizza>,
    restaurant_seq: Id,
    pizza_seq: Id,
    restaurant_pizza_seq: Id,
}

fn next(seq: &mut Id) -> Id {
    *seq += 1;
    *seq
}

#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert_restaurant(&self, new: NewRestaurant) -> StoreResult<Restaurant> {
        let mut t = self.tables.write().await;
        let id = next(&mut t.restaurant_seq);
        let row = Restaurant {
            id,
            name: new.name,
            address: new.address,
        };
        t.restaurants.insert(id, row.clone());
        Ok(row)
    }

    async fn insert_pizza(&self, new: NewPizza) -> StoreResult<Pizza> {
        let mut t = self.tables.write().await;
        let id = next(&mut t.pizza_seq);
        let row = Pizza {
            id,
            name: new.name,
            ingredients: new.ingredients,
        };
        t.pizzas.insert(id, row.clone());
        Ok(row)
    }

    async fn insert_restaurant_pizza(&self, new: NewRestaurantPizza) -> StoreResult<RestaurantPizza> {
        let mut t = self.tables.write().await;
        if !t.restaurants.contains_key(&new.restaurant_id) {
            return Err(StoreError::ForeignKey(format!(
                "restaurant_id {} is not present in table \"restaurants\"",
                new.restaurant_id
            )));
        }
        if !t.pizzas.contains_key(&new.pizza_id) {
            return Err(StoreError::ForeignKey(format!(
                "pizza_id {} is not present in table \"pizzas\"",
                new.pizza_id
            )));
        }
        let id = next(&mut t.restaurant_pizza_seq);
        let row = RestaurantPizza {
            id,
            price: new.price().get(),
            restaurant_id: new.restaurant_id,
            pizza_id: new.pizza_id,
        };
        t.restaurant_pizzas.insert(id, row.clone());
        Ok(row)
    }

    async fn get_restaurant(&self, id: Id) -> StoreResult<Option<Restaurant>> {
        Ok(self.tables.read().await.restaurants.get(&id).cloned())
    }

    async fn get_pizza(&self, id: Id) -> StoreResult<Option<Pizza>> {
        Ok(self.tables.read().await.pizzas.get(&id).cloned())
    }

    async fn list_restaurants(&self) -> StoreResult<Vec<Restaurant>> {
        Ok(self.tables.read().await.restaurants.values().cloned().collect())
    }

    async fn list_pizzas(&self) -> StoreResult<Vec<Pizza>> {
        Ok(self.tables.read().await.pizzas.values().cloned().collect())
    }

    async fn restaurant_pizzas_for_restaurant(&self, restaurant_id: Id) -> StoreResult<Vec<RestaurantPizza>> {
        Ok(self
            .tables
            .read()
            .await
            .restaurant_pizzas
            .values()
            .filter(|rp| rp.restaurant_id == restaurant_id)
            .cloned()
            .collect())
    }

    async fn delete_restaurant(&self, id: Id) -> StoreResult<bool> {
        let mut t = self.tables.write().await;
        if t.restaurants.remove(&id).is_none() {
            return Ok(false);
        }
        t.restaurant_pizzas.retain(|_, rp| rp.restaurant_id != id);
        Ok(true)
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seeded() -> (MemoryStore, Restaurant, Pizza) {
        let store = MemoryStore::new();
        let r = store
            .insert_restaurant(NewRestaurant::new("Karen's Pizza Shack", "address1"))
            .await
            .unwrap();
        let p = store
            .insert_pizza(NewPizza::new("Emma", "Dough, Tomato Sauce, Cheese"))
            .await
            .unwrap();
        (store, r, p)
    }

    #[tokio::test]
    async fn ids_are_generated_in_order() {
        let (store, r, p) = seeded().await;
        assert_eq!((r.id, p.id), (1, 1));
        let r2 = store.insert_restaurant(NewRestaurant::new("b", "c")).await.unwrap();
        assert_eq!(r2.id, 2);
        let ids: Vec<Id> = store.list_restaurants().await.unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn association_requires_both_parents() {
        let (store, r, p) = seeded().await;

        let err = store
            .insert_restaurant_pizza(NewRestaurantPizza::new(5, 99, p.id).unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::ForeignKey(_)));

        let err = store
            .insert_restaurant_pizza(NewRestaurantPizza::new(5, r.id, 99).unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::ForeignKey(_)));

        assert!(store.restaurant_pizzas_for_restaurant(r.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_cascades_to_associations() {
        let (store, r, p) = seeded().await;
        let other = store.insert_restaurant(NewRestaurant::new("other", "x")).await.unwrap();
        store
            .insert_restaurant_pizza(NewRestaurantPizza::new(5, r.id, p.id).unwrap())
            .await
            .unwrap();
        let kept = store
            .insert_restaurant_pizza(NewRestaurantPizza::new(7, other.id, p.id).unwrap())
            .await
            .unwrap();

        assert!(store.delete_restaurant(r.id).await.unwrap());
        assert!(store.get_restaurant(r.id).await.unwrap().is_none());
        assert!(store.restaurant_pizzas_for_restaurant(r.id).await.unwrap().is_empty());
        assert_eq!(store.restaurant_pizzas_for_restaurant(other.id).await.unwrap(), vec![kept]);
        assert!(store.get_pizza(p.id).await.unwrap().is_some());

        assert!(!store.delete_restaurant(r.id).await.unwrap());
    }
}
