//! Domain records: restaurants, pizzas, and the priced association between them.

use crate::service::validation::{Price, ValidationError};

pub type Id = i64;

#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct Restaurant {
    pub id: Id,
    pub name: String,
    pub address: String,
}

#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct Pizza {
    pub id: Id,
    pub name: String,
    /// Free-text, comma separated.
    pub ingredients: String,
}

/// Join row between a restaurant and a pizza. Owns neither parent.
#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct RestaurantPizza {
    pub id: Id,
    pub price: i32,
    pub restaurant_id: Id,
    pub pizza_id: Id,
}

#[derive(Clone, Debug)]
pub struct NewRestaurant {
    pub name: String,
    pub address: String,
}

impl NewRestaurant {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct NewPizza {
    pub name: String,
    pub ingredients: String,
}

impl NewPizza {
    pub fn new(name: impl Into<String>, ingredients: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ingredients: ingredients.into(),
        }
    }
}

/// An association that has passed price validation. Both constructors go through
/// [`Price`], so every insert carries a checked price.
#[derive(Clone, Debug)]
pub struct NewRestaurantPizza {
    price: Price,
    pub restaurant_id: Id,
    pub pizza_id: Id,
}

impl NewRestaurantPizza {
    pub fn new(price: i64, restaurant_id: Id, pizza_id: Id) -> Result<Self, ValidationError> {
        Ok(Self::with_price(Price::new(price)?, restaurant_id, pizza_id))
    }

    pub fn with_price(price: Price, restaurant_id: Id, pizza_id: Id) -> Self {
        Self {
            price,
            restaurant_id,
            pizza_id,
        }
    }

    pub fn price(&self) -> Price {
        self.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_checks_price() {
        let ok = NewRestaurantPizza::new(30, 1, 2).unwrap();
        assert_eq!(ok.price().get(), 30);
        assert_eq!((ok.restaurant_id, ok.pizza_id), (1, 2));

        assert!(NewRestaurantPizza::new(0, 1, 2).is_err());
        assert!(NewRestaurantPizza::new(31, 1, 2).is_err());
    }
}
