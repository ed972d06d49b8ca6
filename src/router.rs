use axum::{
    Router,
    routing::{any, get, post},
};

use crate::middleware::log_requests;
use crate::{AppState, routes};

/// 创建主路由
/// 每个资源路径自带方法级 fallback，未开放的方法返回固定的 405 响应
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", any(routes::health::health_check))
        .route(
            "/s3",
            get(routes::s3::list_objects)
                .post(routes::s3::upload_object)
                .fallback(routes::method_not_allowed),
        )
        .route(
            "/sqs",
            post(routes::sqs::send_message).fallback(routes::method_not_allowed),
        )
        .route(
            "/sns",
            post(routes::sns::publish_message).fallback(routes::method_not_allowed),
        )
        .route(
            "/dynamodb",
            get(routes::dynamodb::scan_users)
                .post(routes::dynamodb::put_user)
                .fallback(routes::method_not_allowed),
        )
        .route(
            "/redis",
            get(routes::cache::list_users)
                .post(routes::cache::append_user)
                .fallback(routes::method_not_allowed),
        )
        .route(
            "/lambda",
            post(routes::lambda::invoke).fallback(routes::method_not_allowed),
        )
        .layer(axum::middleware::from_fn(log_requests))
        .with_state(state)
}
