/// 应用全局状态

use std::path::PathBuf;
use std::sync::Arc;

use common::ReportPaths;

/// 应用状态
///
/// 只保存只读配置；每个请求各自打开报告文件、各自分配结果集合
#[derive(Clone)]
pub struct AppState {
    /// 三份报告的路径
    pub report_paths: Arc<ReportPaths>,
    /// 快照 JSON 的落盘路径（可选）
    pub output_path: Option<Arc<PathBuf>>,
}

impl AppState {
    pub fn new(report_paths: ReportPaths, output_path: Option<PathBuf>) -> Self {
        Self {
            report_paths: Arc::new(report_paths),
            output_path: output_path.map(Arc::new),
        }
    }

    /// 获取报告路径（克隆）
    pub fn report_paths(&self) -> ReportPaths {
        self.report_paths.as_ref().clone()
    }

    /// 获取落盘路径
    pub fn output_path(&self) -> Option<PathBuf> {
        self.output_path.as_deref().cloned()
    }
}
