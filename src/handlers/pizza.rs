//! Pizza handlers: list.

use crate::error::AppError;
use crate::response::ok;
use crate::serializer::{serialize_pizza, PizzaBody};
use crate::service::CrudService;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

#[utoipa::path(
    get,
    path = "/pizzas",
    responses(
        (status = 200, description = "All pizzas in base form", body = [PizzaBody]),
    ),
    tag = "pizzas"
)]
pub async fn list_pizzas(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = CrudService::list_pizzas(state.store.as_ref()).await?;
    Ok(ok(rows.iter().map(serialize_pizza).collect::<Vec<_>>()))
}
