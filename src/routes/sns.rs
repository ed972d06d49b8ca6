use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::AppState;
use crate::aws;
use crate::common::MsgResponse;
use crate::error::AppError;

#[axum::debug_handler]
pub async fn publish_message(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    tracing::info!("Publishing message to SNS Topic");

    aws::sns::publish_test_message(&state.aws.sns, &state.config.sns_topic_arn)
        .await
        .map_err(|e| {
            tracing::error!("Error publishing message to SNS: {}", e);
            AppError::SnsPublishFailed
        })?;

    Ok((
        StatusCode::CREATED,
        Json(MsgResponse::new("Message published...")),
    ))
}
