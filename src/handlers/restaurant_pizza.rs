//! Create handler for restaurant_pizzas, the only way associations come into being.

use crate::error::AppError;
use crate::model::NewRestaurantPizza;
use crate::response::{created, ErrorBody};
use crate::serializer::{serialize_created_restaurant_pizza, CreatedRestaurantPizzaBody};
use crate::service::{CrudService, Price};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::{Number, Value};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRestaurantPizzaRequest {
    /// Whole currency units, 1 to 30 inclusive. Range and integrality are
    /// checked by [`Price::from_number`].
    #[schema(value_type = i64)]
    pub price: Number,
    pub restaurant_id: i64,
    pub pizza_id: i64,
}

fn parse_request(body: Result<Json<Value>, JsonRejection>) -> Result<CreateRestaurantPizzaRequest, AppError> {
    let Json(value) = body.map_err(|e| AppError::MalformedBody(e.body_text()))?;
    if !value.is_object() {
        return Err(AppError::MalformedBody("body must be a JSON object".into()));
    }
    serde_json::from_value(value).map_err(|e| AppError::InvalidField(e.to_string()))
}

#[utoipa::path(
    post,
    path = "/restaurant_pizzas",
    request_body = CreateRestaurantPizzaRequest,
    responses(
        (status = 201, description = "Association created", body = CreatedRestaurantPizzaBody),
        (status = 400, description = "Malformed body, missing field, or unknown restaurant/pizza. A price outside 1..=30 answers with an ErrorsBody instead.", body = ErrorBody),
    ),
    tag = "restaurant_pizzas"
)]
pub async fn create_restaurant_pizza(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let req = parse_request(body)?;
    let price = Price::from_number(&req.price)?;
    let new = NewRestaurantPizza::with_price(price, req.restaurant_id, req.pizza_id);
    let (rp, pizza, restaurant) = CrudService::create_restaurant_pizza(state.store.as_ref(), new).await?;
    Ok(created(serialize_created_restaurant_pizza(&rp, &pizza, &restaurant)))
}
