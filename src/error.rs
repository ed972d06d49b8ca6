use axum::Json;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::common::MsgResponse;

/// 请求级错误，统一映射成对外的固定诊断消息
/// 后端服务的原始错误只进日志，不下发给调用方
#[derive(Debug)]
pub enum AppError {
    MalformedInput(String),
    CacheUnavailable,
    S3ListFailed,
    S3UploadFailed,
    SqsSendFailed,
    SnsPublishFailed,
    DynamoScanFailed,
    DynamoParseFailed,
    DynamoWriteFailed,
    LambdaInvokeFailed,
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::error!("Error parsing request data: {}", rejection.body_text());
        AppError::MalformedInput(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let msg = match self {
            // 请求体未通过严格解码，把解码器给出的字段说明原样返回
            AppError::MalformedInput(detail) => detail,
            AppError::CacheUnavailable => "Error appending data to redis".to_string(),
            AppError::S3ListFailed => "Error listing objects.".to_string(),
            AppError::S3UploadFailed => "Error uploading data.".to_string(),
            AppError::SqsSendFailed => "Error sending message to SQS.".to_string(),
            AppError::SnsPublishFailed => "Error publishing message to SNS.".to_string(),
            AppError::DynamoScanFailed => "Error fetching data.".to_string(),
            AppError::DynamoParseFailed => "Error parsing fetched data.".to_string(),
            AppError::DynamoWriteFailed => "Error writing data to dynamodb table.".to_string(),
            AppError::LambdaInvokeFailed => "Error Invoking Lambda.".to_string(),
        };

        (StatusCode::BAD_REQUEST, Json(MsgResponse::new(msg))).into_response()
    }
}
