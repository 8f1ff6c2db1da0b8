//! Resource routes and their OpenAPI document.

use crate::handlers::{
    self, create_restaurant_pizza, delete_restaurant, get_restaurant, list_pizzas, list_restaurants,
};
use crate::response::{ErrorBody, ErrorsBody};
use crate::serializer::{
    CreatedRestaurantPizzaBody, PizzaBody, RestaurantBody, RestaurantPizzaBody, RestaurantWithPizzasBody,
};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::restaurant::list_restaurants,
        handlers::restaurant::get_restaurant,
        handlers::restaurant::delete_restaurant,
        handlers::pizza::list_pizzas,
        handlers::restaurant_pizza::create_restaurant_pizza,
    ),
    components(schemas(
        RestaurantBody,
        RestaurantWithPizzasBody,
        PizzaBody,
        RestaurantPizzaBody,
        CreatedRestaurantPizzaBody,
        handlers::restaurant_pizza::CreateRestaurantPizzaRequest,
        ErrorBody,
        ErrorsBody,
    )),
    tags(
        (name = "restaurants", description = "Restaurants and their priced pizzas"),
        (name = "pizzas", description = "Pizza catalogue"),
        (name = "restaurant_pizzas", description = "Pizza offered by a restaurant at a price"),
    ),
    info(title = "Pizza API", description = "Restaurants, pizzas and prices")
)]
pub struct ApiDoc;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/restaurants", get(list_restaurants))
        .route("/restaurants/:id", get(get_restaurant).delete(delete_restaurant))
        .route("/pizzas", get(list_pizzas))
        .route("/restaurant_pizzas", post(create_restaurant_pizza))
        .route("/openapi.json", get(openapi))
        .with_state(state)
}
