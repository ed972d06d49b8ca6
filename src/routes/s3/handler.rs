use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use super::model::{ObjectSummary, UploadResponse};
use crate::AppState;
use crate::aws;
use crate::error::AppError;

#[axum::debug_handler]
pub async fn list_objects(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    tracing::info!("Listing all objects in s3 bucket");

    let objects = aws::s3::list_objects(&state.aws.s3, &state.config.s3_bucket)
        .await
        .map_err(|e| {
            tracing::error!("Error fetching objects from S3 bucket: {}", e);
            AppError::S3ListFailed
        })?;

    let summaries: Vec<ObjectSummary> = objects.iter().map(ObjectSummary::from).collect();
    Ok(Json(summaries))
}

#[axum::debug_handler]
pub async fn upload_object(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    tracing::info!("Uploading file to S3 bucket");

    let key = aws::s3::upload_test_object(&state.aws.s3, &state.http, &state.config.s3_bucket)
        .await
        .map_err(|e| {
            tracing::error!("Error uploading data to S3 bucket: {}", e);
            AppError::S3UploadFailed
        })?;

    Ok((StatusCode::CREATED, Json(UploadResponse { key })))
}
