//! Response shapes for each traversal direction.
//!
//! Every body lists its nested fields explicitly and nesting stops one hop from
//! where it started: an association embedded under its restaurant never carries a
//! `restaurant`, and parents embedded under an association never carry
//! `restaurant_pizzas`.

use crate::model::{Pizza, Restaurant, RestaurantPizza};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantBody {
    pub id: i64,
    pub name: String,
    pub address: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantWithPizzasBody {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<RestaurantPizzaBody>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PizzaBody {
    pub id: i64,
    pub name: String,
    pub ingredients: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantPizzaBody {
    pub id: i64,
    pub price: i32,
    pub restaurant_id: i64,
    pub pizza_id: i64,
}

/// Returned by the create endpoint: the association plus both parents in base form.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedRestaurantPizzaBody {
    pub id: i64,
    pub price: i32,
    pub restaurant_id: i64,
    pub pizza_id: i64,
    pub pizza: PizzaBody,
    pub restaurant: RestaurantBody,
}

pub fn serialize_restaurant(r: &Restaurant) -> RestaurantBody {
    RestaurantBody {
        id: r.id,
        name: r.name.clone(),
        address: r.address.clone(),
    }
}

pub fn serialize_restaurant_with_pizzas(
    r: &Restaurant,
    restaurant_pizzas: &[RestaurantPizza],
) -> RestaurantWithPizzasBody {
    RestaurantWithPizzasBody {
        id: r.id,
        name: r.name.clone(),
        address: r.address.clone(),
        restaurant_pizzas: restaurant_pizzas.iter().map(serialize_restaurant_pizza).collect(),
    }
}

pub fn serialize_pizza(p: &Pizza) -> PizzaBody {
    PizzaBody {
        id: p.id,
        name: p.name.clone(),
        ingredients: p.ingredients.clone(),
    }
}

pub fn serialize_restaurant_pizza(rp: &RestaurantPizza) -> RestaurantPizzaBody {
    RestaurantPizzaBody {
        id: rp.id,
        price: rp.price,
        restaurant_id: rp.restaurant_id,
        pizza_id: rp.pizza_id,
    }
}

pub fn serialize_created_restaurant_pizza(
    rp: &RestaurantPizza,
    pizza: &Pizza,
    restaurant: &Restaurant,
) -> CreatedRestaurantPizzaBody {
    CreatedRestaurantPizzaBody {
        id: rp.id,
        price: rp.price,
        restaurant_id: rp.restaurant_id,
        pizza_id: rp.pizza_id,
        pizza: serialize_pizza(pizza),
        restaurant: serialize_restaurant(restaurant),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fixtures() -> (Restaurant, Pizza, RestaurantPizza) {
        (
            Restaurant {
                id: 1,
                name: "Sottocasa NYC".into(),
                address: "298 Atlantic Ave, Brooklyn, NY 11201".into(),
            },
            Pizza {
                id: 2,
                name: "Geri".into(),
                ingredients: "Dough, Tomato Sauce, Cheese, Pepperoni".into(),
            },
            RestaurantPizza {
                id: 3,
                price: 5,
                restaurant_id: 1,
                pizza_id: 2,
            },
        )
    }

    #[test]
    fn restaurant_base_form_has_only_scalars() {
        let (r, _, _) = fixtures();
        let v = serde_json::to_value(serialize_restaurant(&r)).unwrap();
        assert_eq!(
            v,
            json!({"id": 1, "name": "Sottocasa NYC", "address": "298 Atlantic Ave, Brooklyn, NY 11201"})
        );
    }

    #[test]
    fn extended_restaurant_does_not_reenter_restaurant() {
        let (r, _, rp) = fixtures();
        let v = serde_json::to_value(serialize_restaurant_with_pizzas(&r, &[rp])).unwrap();
        let entries = v["restaurant_pizzas"].as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0], json!({"id": 3, "price": 5, "restaurant_id": 1, "pizza_id": 2}));
        assert!(entries[0].get("restaurant").is_none());
    }

    #[test]
    fn created_body_embeds_parents_in_base_form() {
        let (r, p, rp) = fixtures();
        let v = serde_json::to_value(serialize_created_restaurant_pizza(&rp, &p, &r)).unwrap();
        assert_eq!(v["price"], 5);
        assert_eq!(v["pizza"]["name"], "Geri");
        assert_eq!(v["restaurant"]["id"], 1);
        assert!(v["pizza"].get("restaurant_pizzas").is_none());
        assert!(v["restaurant"].get("restaurant_pizzas").is_none());
    }

    #[test]
    fn keys_keep_declared_order() {
        let (_, p, _) = fixtures();
        let s = serde_json::to_string(&serialize_pizza(&p)).unwrap();
        assert!(s.starts_with(r#"{"id":2,"name":"Geri","ingredients":"#));
    }
}
