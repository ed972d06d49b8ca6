use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::AppState;
use crate::aws;
use crate::common::MsgResponse;
use crate::error::AppError;

#[axum::debug_handler]
pub async fn send_message(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    tracing::info!("Sending message to SQS queue");

    aws::sqs::send_test_message(
        &state.aws.sqs,
        &state.config.sqs_queue_url,
        &state.config.sqs_message_group_id,
    )
    .await
    .map_err(|e| {
        tracing::error!("Error sending message to SQS: {}", e);
        AppError::SqsSendFailed
    })?;

    Ok((
        StatusCode::CREATED,
        Json(MsgResponse::new("Message queued...")),
    ))
}
