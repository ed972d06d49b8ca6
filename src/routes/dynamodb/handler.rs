use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use super::model::TableUser;
use crate::AppState;
use crate::aws;
use crate::common::MsgResponse;
use crate::error::AppError;

#[axum::debug_handler]
pub async fn scan_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let items = aws::dynamodb::scan_table(&state.aws.dynamodb, &state.config.dynamodb_table)
        .await
        .map_err(|e| {
            tracing::error!("Error fetching data: {}", e);
            AppError::DynamoScanFailed
        })?;

    // 任意一条映射失败就整体报错，与扫描失败区分开
    let users = items
        .iter()
        .map(TableUser::from_item)
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| {
            tracing::error!("Error parsing fetched data");
            AppError::DynamoParseFailed
        })?;

    Ok(Json(users))
}

#[axum::debug_handler]
pub async fn put_user(
    State(state): State<AppState>,
    payload: Result<Json<TableUser>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(user) = payload?;

    aws::dynamodb::put_item(
        &state.aws.dynamodb,
        &state.config.dynamodb_table,
        user.into_item(),
    )
    .await
    .map_err(|e| {
        tracing::error!("Error writing data to table: {}", e);
        AppError::DynamoWriteFailed
    })?;

    Ok((
        StatusCode::CREATED,
        Json(MsgResponse::new("Data written to dynamodb table.")),
    ))
}
