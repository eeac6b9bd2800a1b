/// 工具函数集合

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::errors::{Error, Result};

/// 序列化为 2 空格缩进的 JSON
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// 将文本原样写入文件（已存在则覆盖）
pub fn write_text_file(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();
    let output_error = |error| Error::Output {
        path: path.to_path_buf(),
        error,
    };

    let mut file = File::create(path).map_err(output_error)?;
    file.write_all(content.as_bytes()).map_err(output_error)?;

    Ok(())
}
