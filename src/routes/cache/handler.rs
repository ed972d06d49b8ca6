use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::AppState;
use crate::cache::{UserListOperations, UserRecord};
use crate::common::MsgResponse;
use crate::error::AppError;

#[axum::debug_handler]
pub async fn list_users(State(state): State<AppState>) -> impl IntoResponse {
    tracing::info!("Fetching from redis...");

    match UserListOperations::list_users(&state.redis).await {
        Ok(Some(users)) => Json(users).into_response(),
        // 键不存在和缓存不可达在这里区分不开，一律按无数据返回
        Ok(None) => Json(MsgResponse::new("Empty data")).into_response(),
        Err(e) => {
            tracing::error!("Error fetching from key 'user': {}", e);
            Json(MsgResponse::new("Empty data")).into_response()
        }
    }
}

#[axum::debug_handler]
pub async fn append_user(
    State(state): State<AppState>,
    payload: Result<Json<UserRecord>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(user) = payload?;

    tracing::info!("Appending to redis...");
    UserListOperations::append_user(&state.redis, &user)
        .await
        .map_err(|e| {
            tracing::error!("Error appending data to redis: {}", e);
            AppError::CacheUnavailable
        })?;

    Ok((
        StatusCode::CREATED,
        Json(MsgResponse::new("Added user data to redis")),
    ))
}
