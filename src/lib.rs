use std::sync::Arc;

use config::Config;
use redis::Client as RedisClient;

use crate::aws::AwsClients;

pub mod aws;
pub mod cache;
pub mod common;
pub mod config;
pub mod error;
pub mod middleware;
pub mod router;
pub mod routes;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub redis: Arc<RedisClient>,
    // 预签名上传使用的共享 HTTP 客户端
    pub http: reqwest::Client,
    pub aws: AwsClients,
}
