/// 磁盘使用解析（df -h 输出）

use std::io::{self, BufRead};
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::Result;
use crate::models::{DiskInfo, ReportSource};

use super::{read_report, ReportLines};

/// 磁盘行模式：Filesystem Size Used Avail Use% Mounted on
///
/// 六列均按原样保留文本，不做数值转换；表头有七个词（"Mounted on"），不会匹配。
/// 列分隔只认 ASCII 空白 `[ \t\n\f\r]`。
static DISK_ROW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?P<filesystem>[^ \t\n\f\r]+)[ \t\n\f\r]+(?P<size>[^ \t\n\f\r]+)",
        r"[ \t\n\f\r]+(?P<used>[^ \t\n\f\r]+)[ \t\n\f\r]+(?P<avail>[^ \t\n\f\r]+)",
        r"[ \t\n\f\r]+(?P<use_percent>[^ \t\n\f\r]+)",
        r"[ \t\n\f\r]+(?P<mounted_on>[^ \t\n\f\r]+)[ \t\n\f\r]*$",
    ))
    .expect("disk row pattern is valid")
});

/// 将单行解析为磁盘记录，格式不符时返回 None
pub fn parse_disk_line(line: &str) -> Option<DiskInfo> {
    let caps = DISK_ROW.captures(line)?;
    let field = |name: &str| caps[name].to_string();

    Some(DiskInfo {
        filesystem: field("filesystem"),
        size: field("size"),
        used: field("used"),
        avail: field("avail"),
        use_percent: field("use_percent"),
        mounted_on: field("mounted_on"),
    })
}

/// 解析内存中的 df 输出，保持输入顺序，不限条数
pub fn parse_disk_info<I, S>(lines: I) -> Vec<DiskInfo>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| parse_disk_line(line.as_ref()))
        .collect()
}

/// 从读取器流式解析 df 输出
pub fn scan_disk_info<R: BufRead>(reader: R) -> io::Result<Vec<DiskInfo>> {
    let mut disks = Vec::new();

    for line in ReportLines::new(reader) {
        let line = line?;
        match parse_disk_line(&line) {
            Some(disk) => disks.push(disk),
            None => tracing::trace!("跳过磁盘行: {:?}", line),
        }
    }

    tracing::debug!("磁盘解析完成: {} 条", disks.len());
    Ok(disks)
}

/// 读取并解析 df 输出文件
pub fn read_disk_info(path: impl AsRef<Path>) -> Result<Vec<DiskInfo>> {
    read_report(path.as_ref(), ReportSource::Disk, scan_disk_info)
}
