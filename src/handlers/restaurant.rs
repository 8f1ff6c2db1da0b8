//! Restaurant handlers: list, read with associations, delete.

use crate::error::AppError;
use crate::model::Id;
use crate::response::{ok, ErrorBody};
use crate::serializer::{
    serialize_restaurant, serialize_restaurant_with_pizzas, RestaurantBody, RestaurantWithPizzasBody,
};
use crate::service::CrudService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

/// Non-numeric ids cannot name a stored restaurant, so they read as not found.
fn parse_id(id_str: &str) -> Result<Id, AppError> {
    id_str.parse().map_err(|_| AppError::NotFound("Restaurant"))
}

#[utoipa::path(
    get,
    path = "/restaurants",
    responses(
        (status = 200, description = "All restaurants in base form", body = [RestaurantBody]),
    ),
    tag = "restaurants"
)]
pub async fn list_restaurants(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = CrudService::list_restaurants(state.store.as_ref()).await?;
    Ok(ok(rows.iter().map(serialize_restaurant).collect::<Vec<_>>()))
}

#[utoipa::path(
    get,
    path = "/restaurants/{id}",
    params(("id" = i64, Path, description = "Restaurant id")),
    responses(
        (status = 200, description = "Restaurant with its restaurant_pizzas", body = RestaurantWithPizzasBody),
        (status = 404, description = "Restaurant not found", body = ErrorBody),
    ),
    tag = "restaurants"
)]
pub async fn get_restaurant(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let (restaurant, restaurant_pizzas) =
        CrudService::restaurant_with_pizzas(state.store.as_ref(), id).await?;
    Ok(ok(serialize_restaurant_with_pizzas(&restaurant, &restaurant_pizzas)))
}

#[utoipa::path(
    delete,
    path = "/restaurants/{id}",
    params(("id" = i64, Path, description = "Restaurant id")),
    responses(
        (status = 204, description = "Restaurant and its restaurant_pizzas deleted"),
        (status = 404, description = "Restaurant not found", body = ErrorBody),
    ),
    tag = "restaurants"
)]
pub async fn delete_restaurant(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    CrudService::delete_restaurant(state.store.as_ref(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
