use axum::{Json, extract::State, response::IntoResponse};

use crate::AppState;
use crate::aws;
use crate::common::MsgResponse;
use crate::error::AppError;

#[axum::debug_handler]
pub async fn invoke(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    aws::lambda::invoke_function(&state.aws.lambda, &state.config.lambda_function)
        .await
        .map_err(|e| {
            tracing::error!("Error Invoking Lambda: {}", e);
            AppError::LambdaInvokeFailed
        })?;

    Ok(Json(MsgResponse::new("Successfully Invoked Lambda.")))
}
