/// 配置管理

use std::path::PathBuf;

use common::models::constants;
use common::ReportPaths;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server_port: u16,
    pub cpu_info_path: PathBuf,
    pub top_output_path: PathBuf,
    pub disk_info_path: PathBuf,
    pub output_path: Option<PathBuf>,
    pub log_level: String,
}

impl Config {
    /// 从环境变量加载配置
    pub fn from_env() -> anyhow::Result<Self> {
        let server_port = match std::env::var("SERVER_PORT") {
            Ok(port) => port.parse()?,
            Err(_) => constants::DEFAULT_SERVER_PORT,
        };

        let cpu_info_path = std::env::var("CPU_INFO_PATH")
            .unwrap_or_else(|_| constants::DEFAULT_CPU_INFO_PATH.to_string())
            .into();

        let top_output_path = std::env::var("TOP_OUTPUT_PATH")
            .unwrap_or_else(|_| constants::DEFAULT_TOP_OUTPUT_PATH.to_string())
            .into();

        let disk_info_path = std::env::var("DISK_INFO_PATH")
            .unwrap_or_else(|_| constants::DEFAULT_DISK_INFO_PATH.to_string())
            .into();

        // 未设置时不落盘
        let output_path = std::env::var("SYSTEM_INFO_OUTPUT_PATH")
            .ok()
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        let log_level = std::env::var("LOG_LEVEL")
            .unwrap_or_else(|_| "debug".to_string());

        Ok(Self {
            server_port,
            cpu_info_path,
            top_output_path,
            disk_info_path,
            output_path,
            log_level,
        })
    }

    /// 报告文件路径
    pub fn report_paths(&self) -> ReportPaths {
        ReportPaths::new(
            self.cpu_info_path.clone(),
            self.top_output_path.clone(),
            self.disk_info_path.clone(),
        )
    }
}
