/// 错误定义

use std::path::PathBuf;

use thiserror::Error;

use crate::models::ReportSource;

/// 统一错误类型
#[derive(Error, Debug)]
pub enum Error {
    /// 报告文件无法打开或读取（解析失败的行不属于此类错误）
    #[error("读取{kind}失败 ({}): {error}", .path.display())]
    ReportRead {
        kind: ReportSource,
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    #[error("写入输出文件失败 ({}): {error}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    #[error("序列化错误: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("内部错误: {0}")]
    Internal(String),
}

impl Error {
    /// 读取失败的报告来源
    pub fn report_source(&self) -> Option<ReportSource> {
        match self {
            Self::ReportRead { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// 统一结果类型
pub type Result<T> = std::result::Result<T, Error>;
