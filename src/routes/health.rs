use axum::{Json, response::IntoResponse};

use crate::common::MsgResponse;

#[axum::debug_handler]
pub async fn health_check() -> impl IntoResponse {
    Json(MsgResponse::new("Server is running!!!"))
}
