/// 系统信息快照组装
///
/// 依次读取 CPU、top、df 三份报告并组装为 `SystemInfo`；
/// 任一报告读取失败即中止，不产生部分快照

use std::path::{Path, PathBuf};

use crate::errors::Result;
use crate::models::{constants, SystemInfo};
use crate::parser::{read_cpu_info, read_disk_info, read_top_output};

/// 三份报告的文件路径
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub cpu_info: PathBuf,
    pub top_output: PathBuf,
    pub disk_info: PathBuf,
}

impl ReportPaths {
    pub fn new(
        cpu_info: impl Into<PathBuf>,
        top_output: impl Into<PathBuf>,
        disk_info: impl Into<PathBuf>,
    ) -> Self {
        Self {
            cpu_info: cpu_info.into(),
            top_output: top_output.into(),
            disk_info: disk_info.into(),
        }
    }

    /// 以目录为根，使用默认文件名
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(
            dir.join(constants::DEFAULT_CPU_INFO_PATH),
            dir.join(constants::DEFAULT_TOP_OUTPUT_PATH),
            dir.join(constants::DEFAULT_DISK_INFO_PATH),
        )
    }
}

impl Default for ReportPaths {
    fn default() -> Self {
        Self::new(
            constants::DEFAULT_CPU_INFO_PATH,
            constants::DEFAULT_TOP_OUTPUT_PATH,
            constants::DEFAULT_DISK_INFO_PATH,
        )
    }
}

/// 读取三份报告并组装快照
pub fn collect_system_info(paths: &ReportPaths) -> Result<SystemInfo> {
    let cpu_info = read_cpu_info(&paths.cpu_info)?;
    let process_info = read_top_output(&paths.top_output)?;
    let disk_info = read_disk_info(&paths.disk_info)?;

    Ok(SystemInfo {
        cpu_info,
        process_info,
        disk_info,
    })
}
