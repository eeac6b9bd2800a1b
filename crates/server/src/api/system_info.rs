/// 系统信息接口

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tracing::error;

use crate::{app_state::AppState, services::SystemInfoService};

/// 系统信息路由
pub fn system_info_routes() -> Router<AppState> {
    Router::new().route("/system-info", get(get_system_info))
}

/// 获取系统信息快照
///
/// 成功时返回 2 空格缩进的 JSON；任一报告读取失败返回 500 纯文本错误，指明失败来源
pub async fn get_system_info(State(state): State<AppState>) -> Response {
    let service = SystemInfoService::new(state);
    match service.render_json().await {
        Ok(json) => ([(header::CONTENT_TYPE, "application/json")], json).into_response(),
        Err(e) => {
            error!("获取系统信息失败: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}
