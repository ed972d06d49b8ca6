use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use irsa_demo::{AppState, aws::AwsClients, config::Config, router::create_router};
use serde_json::{Value, json};
use tower::ServiceExt;

fn test_config() -> Config {
    Config {
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        aws_region: "us-east-1".to_string(),
        s3_bucket: "test-bucket".to_string(),
        sqs_queue_url: "https://sqs.us-east-1.amazonaws.com/000000000000/test.fifo".to_string(),
        sqs_message_group_id: "test-group".to_string(),
        sns_topic_arn: "arn:aws:sns:us-east-1:000000000000:test".to_string(),
        dynamodb_table: "test-table".to_string(),
        lambda_function: "test-function".to_string(),
        // 指向无人监听的端口，访问缓存时立刻连接失败
        redis_host: "127.0.0.1:6399".to_string(),
        redis_db: 1,
    }
}

async fn test_app() -> Router {
    let config = test_config();
    let state = AppState {
        aws: AwsClients::from_env(&config.aws_region).await,
        redis: Arc::new(redis::Client::open(config.redis_url()).unwrap()),
        http: reqwest::Client::new(),
        config,
    };
    create_router(state)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_running() {
    let response = test_app()
        .await
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"msg": "Server is running!!!"}));
}

#[tokio::test]
async fn list_without_reachable_store_reports_empty_data() {
    let response = test_app()
        .await
        .oneshot(Request::builder().uri("/redis").body(Body::empty()).unwrap())
        .await
        .unwrap();

    // 无数据和缓存不可达是同一个成功响应
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"msg": "Empty data"}));
}

#[tokio::test]
async fn append_with_unknown_field_is_rejected() {
    let response = test_app()
        .await
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/redis")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"name":"Ann","email":"a@x.com","role":"admin"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["msg"].as_str().unwrap().contains("role"));
}

#[tokio::test]
async fn append_without_reachable_store_reports_append_error() {
    let response = test_app()
        .await
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/redis")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"name":"Ann","email":"a@x.com"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({"msg": "Error appending data to redis"})
    );
}

#[tokio::test]
async fn disallowed_method_gets_405() {
    let response = test_app()
        .await
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/redis")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body_json(response).await, json!({"msg": "Method Not Allowed."}));
}
