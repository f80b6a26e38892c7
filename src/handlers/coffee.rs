//! Coffee CRUD handlers: list, create, read, update, delete.

use crate::error::{AppError, ErrorBody, INVALID_ID, INVALID_PAYLOAD};
use crate::model::{Coffee, CoffeePayload};
use crate::response::{success_many, success_one, success_one_ok, success_result, ResultBody};
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::IntoResponse,
    Json,
};
use std::collections::HashMap;

/// Page size used when `count` is missing or outside `1..=MAX_PAGE`.
pub const MAX_PAGE: i64 = 10;

/// Parse a path id. Only non-negative integers are accepted.
pub fn parse_id(id: Result<Path<String>, PathRejection>) -> Result<i64, AppError> {
    let Path(raw) = id.map_err(|_| AppError::BadRequest(INVALID_ID.into()))?;
    match raw.parse::<i64>() {
        Ok(n) if n >= 0 => Ok(n),
        _ => {
            tracing::debug!(id = %raw, "rejected coffee id");
            Err(AppError::BadRequest(INVALID_ID.into()))
        }
    }
}

/// Returns `(start, count)` with count forced into `1..=MAX_PAGE` and start floored at 0.
pub fn clamp_page(start: i64, count: i64) -> (i64, i64) {
    let count = if (1..=MAX_PAGE).contains(&count) { count } else { MAX_PAGE };
    (start.max(0), count)
}

fn query_int(params: &HashMap<String, String>, key: &str) -> i64 {
    params.get(key).and_then(|v| v.parse().ok()).unwrap_or(0)
}

fn payload(body: Result<Json<CoffeePayload>, JsonRejection>) -> Result<CoffeePayload, AppError> {
    match body {
        Ok(Json(payload)) => Ok(payload),
        Err(rejection) => {
            tracing::debug!(reason = %rejection.body_text(), "rejected coffee payload");
            Err(AppError::BadRequest(INVALID_PAYLOAD.into()))
        }
    }
}

#[utoipa::path(
    get,
    path = "/coffees",
    tag = "Coffee",
    params(
        ("count" = Option<i64>, Query, description = "Page size; values outside 1..=10 become 10"),
        ("start" = Option<i64>, Query, description = "Offset; negative values become 0"),
    ),
    responses(
        (status = 200, description = "Page of coffees", body = Vec<Coffee>),
        (status = 500, description = "Store failure", body = ErrorBody),
    )
)]
pub async fn list_coffees(
    State(state): State<AppState>,
    params: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let params = params.map(|Query(p)| p).unwrap_or_default();
    let (start, count) = clamp_page(query_int(&params, "start"), query_int(&params, "count"));
    let coffees = state.store.list(start, count).await.map_err(|e| state.reject(e))?;
    Ok(success_many(coffees))
}

#[utoipa::path(
    post,
    path = "/coffee",
    tag = "Coffee",
    request_body = CoffeePayload,
    responses(
        (status = 201, description = "Created coffee with its assigned id", body = Coffee),
        (status = 400, description = "Invalid request payload", body = ErrorBody),
        (status = 500, description = "Store failure or empty name", body = ErrorBody),
    )
)]
pub async fn create_coffee(
    State(state): State<AppState>,
    body: Result<Json<CoffeePayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let body = payload(body)?;
    let coffee = state.store.insert(&body.name).await.map_err(|e| state.reject(e))?;
    tracing::info!(id = coffee.id, "coffee created");
    Ok(success_one(coffee))
}

#[utoipa::path(
    get,
    path = "/coffee/{id}",
    tag = "Coffee",
    params(("id" = i64, Path, description = "Coffee id")),
    responses(
        (status = 200, description = "The coffee", body = Coffee),
        (status = 400, description = "Invalid coffee ID", body = ErrorBody),
        (status = 404, description = "Coffee not found", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody),
    )
)]
pub async fn get_coffee(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(id)?;
    let coffee = state.store.fetch(id).await.map_err(|e| state.reject(e))?;
    Ok(success_one_ok(coffee))
}

/// Succeeds whether or not a row with `id` exists; the response echoes the path id and new name.
#[utoipa::path(
    put,
    path = "/coffee/{id}",
    tag = "Coffee",
    params(("id" = i64, Path, description = "Coffee id")),
    request_body = CoffeePayload,
    responses(
        (status = 200, description = "The coffee as written", body = Coffee),
        (status = 400, description = "Invalid coffee ID or request payload", body = ErrorBody),
        (status = 500, description = "Store failure or empty name", body = ErrorBody),
    )
)]
pub async fn update_coffee(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    body: Result<Json<CoffeePayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(id)?;
    let body = payload(body)?;
    state.store.update(id, &body.name).await.map_err(|e| state.reject(e))?;
    Ok(success_one_ok(Coffee { id, name: body.name }))
}

#[utoipa::path(
    delete,
    path = "/coffee/{id}",
    tag = "Coffee",
    params(("id" = i64, Path, description = "Coffee id")),
    responses(
        (status = 200, description = "Deleted, or nothing to delete", body = ResultBody),
        (status = 400, description = "Invalid coffee ID", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody),
    )
)]
pub async fn delete_coffee(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(id)?;
    state.store.remove(id).await.map_err(|e| state.reject(e))?;
    Ok(success_result())
}
