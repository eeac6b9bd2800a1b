/// Host Info - 公共库
/// 
/// 提供报告解析、快照组装、错误处理、工具函数等，供 Server 使用

pub mod errors;
pub mod models;
pub mod parser;
pub mod snapshot;
pub mod utils;

// 重新导出常用类型
pub use errors::{Error, Result};
pub use models::{CpuInfo, DiskInfo, ProcessInfo, ReportSource, SystemInfo};
pub use snapshot::{collect_system_info, ReportPaths};
