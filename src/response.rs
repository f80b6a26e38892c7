//! Success response helpers. Bodies are the bare entity, array, or result object.

use axum::{http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

/// Body of a successful delete: `{"result": "success"}`.
#[derive(Serialize, ToSchema)]
pub struct ResultBody {
    pub result: String,
}

pub fn success_one<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

pub fn success_one_ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn success_many<T: Serialize>(data: Vec<T>) -> (StatusCode, Json<Vec<T>>) {
    (StatusCode::OK, Json(data))
}

pub fn success_result() -> (StatusCode, Json<ResultBody>) {
    (
        StatusCode::OK,
        Json(ResultBody {
            result: "success".into(),
        }),
    )
}
