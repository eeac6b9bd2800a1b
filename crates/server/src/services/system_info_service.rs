/// 系统信息服务

use common::{collect_system_info, utils, Error, SystemInfo};
use tracing::{debug, info};

use crate::app_state::AppState;

pub struct SystemInfoService {
    state: AppState,
}

impl SystemInfoService {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// 组装系统信息快照
    ///
    /// 报告解析是同步阻塞 I/O，放到阻塞线程池中顺序执行
    pub async fn collect(&self) -> common::Result<SystemInfo> {
        let paths = self.state.report_paths();

        tokio::task::spawn_blocking(move || collect_system_info(&paths))
            .await
            .map_err(|e| Error::Internal(format!("解析任务异常退出: {}", e)))?
    }

    /// 组装快照并渲染为 JSON，配置了落盘路径时同时写入文件
    pub async fn render_json(&self) -> common::Result<String> {
        let info = self.collect().await?;
        debug!(
            "快照组装完成: {} 个进程, {} 个文件系统",
            info.process_info.len(),
            info.disk_info.len()
        );

        let json = utils::to_pretty_json(&info)?;

        if let Some(path) = self.state.output_path() {
            let content = json.clone();
            let target = path.clone();
            tokio::task::spawn_blocking(move || utils::write_text_file(&target, &content))
                .await
                .map_err(|e| Error::Internal(format!("写入任务异常退出: {}", e)))??;
            info!("📝 快照已写入 {}", path.display());
        }

        Ok(json)
    }
}
