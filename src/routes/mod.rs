// 路由模块
// 每个托管资源一个端点，处理函数只做请求/响应转换

pub mod cache;
pub mod dynamodb;
pub mod health;
pub mod lambda;
pub mod s3;
pub mod sns;
pub mod sqs;

use axum::{Json, http::StatusCode, response::IntoResponse};

use crate::common::MsgResponse;

/// 资源路径上未开放的方法统一返回 405
pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(MsgResponse::new("Method Not Allowed.")),
    )
}
