use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use irsa_demo::{AppState, aws::AwsClients, config::Config, router::create_router};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 加载配置
    let config = Config::from_env().expect("Failed to load configuration");

    // 构建 AWS 客户端，凭证由 IRSA 注入的默认链解析
    let aws = AwsClients::from_env(&config.aws_region).await;

    // 设置 Redis 客户端
    let redis_client =
        redis::Client::open(config.redis_url()).expect("Failed to create Redis client");

    // 设置应用状态，所有共享客户端只在这里构建一次
    let state = AppState {
        config: config.clone(),
        redis: Arc::new(redis_client),
        http: reqwest::Client::new(),
        aws,
    };

    let router = create_router(state.clone());

    // 根据编译模式决定是否添加CORS
    #[cfg(debug_assertions)]
    let router = {
        tracing::debug!("Adding CORS layer for development mode");
        router.layer(tower_http::cors::CorsLayer::permissive())
    };

    // 启动服务器
    let addr = SocketAddr::new(
        state.config.server_host.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid server_host, falling back to dual-stack default");
            IpAddr::V6(std::net::Ipv6Addr::UNSPECIFIED)
        }),
        state.config.server_port,
    );
    tracing::info!("Server listening on {}", addr);
    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        router,
    )
    .await
    .expect("Failed to start server");
}
