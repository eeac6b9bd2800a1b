/// Host Info - Server
/// 
/// 本地诊断服务，通过 HTTP 以 JSON 形式提供 CPU、进程和磁盘信息快照

mod api;
mod app_state;
mod config;
mod services;

use axum::{
    routing::get,
    Router,
};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;
use crate::app_state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载环境变量
    dotenvy::dotenv().ok();

    // 加载配置
    let cfg = config::Config::from_env()?;

    // 初始化日志
    // 可以通过环境变量 RUST_LOG 覆盖 LOG_LEVEL，例如：
    // RUST_LOG=server=debug,common=trace cargo run
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(true)
        .with_line_number(true)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.log_level))
        )
        .init();

    info!("🚀 启动 Host Info Server...");
    info!("✅ 配置加载成功");

    let report_paths = cfg.report_paths();
    info!(
        "📄 报告文件: cpu={}, top={}, disk={}",
        report_paths.cpu_info.display(),
        report_paths.top_output.display(),
        report_paths.disk_info.display()
    );
    if let Some(path) = &cfg.output_path {
        info!("📝 快照落盘路径: {}", path.display());
    }

    // 创建应用状态
    let app_state = AppState::new(report_paths, cfg.output_path.clone());

    // 构建应用路由
    let app = build_router(app_state);

    // 启动服务器
    let addr = SocketAddr::from(([0, 0, 0, 0], cfg.server_port));
    info!("🎯 服务器监听在 http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .merge(api::api_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn root_handler() -> &'static str {
    "Host Info Server API v1"
}

async fn health_handler() -> &'static str {
    "OK"
}
