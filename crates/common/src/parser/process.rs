/// 进程表解析（top 批处理输出）
///
/// 每行按固定的 12 组位置模式提取字段，只保留 %CPU 最高的前 N 个进程

use std::io::{self, BufRead};
use std::path::Path;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::errors::Result;
use crate::models::{constants::TOP_PROCESS_LIMIT, ProcessInfo, ReportSource};

use super::{read_report, ReportLines};

/// 进程行模式：PID USER PR NI VIRT RES SHR S %CPU %MEM TIME+ COMMAND
///
/// COMMAND 取行内剩余全部内容（可含空格）。表头、空行以及 NI 为负数、
/// PR 为 "rt" 的行都不匹配。空白只认 ASCII 的 `[ \t\n\f\r]`，
/// 不间断空格等 Unicode 空白属于字段内容。
static PROCESS_ROW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^[ \t\n\f\r]*(?P<pid>[0-9]+)[ \t\n\f\r]+(?P<user>[^ \t\n\f\r]+)",
        r"[ \t\n\f\r]+(?P<pr>[0-9]+)[ \t\n\f\r]+(?P<ni>[0-9]+)",
        r"[ \t\n\f\r]+(?P<virt>[0-9]+)[ \t\n\f\r]+(?P<res>[0-9]+)[ \t\n\f\r]+(?P<shr>[0-9]+)",
        r"[ \t\n\f\r]+(?P<state>[^ \t\n\f\r]+)",
        r"[ \t\n\f\r]+(?P<cpu>[0-9.]+)[ \t\n\f\r]+(?P<mem>[0-9.]+)",
        r"[ \t\n\f\r]+(?P<time>[^ \t\n\f\r]+)[ \t\n\f\r]+(?P<command>.*)$",
    ))
    .expect("process row pattern is valid")
});

/// 有界 Top-K 累加器
///
/// 每次插入后按 %CPU 降序稳定排序并截断到容量上限，
/// 因此任何时刻都满足“有序且不超过 K 条”；%CPU 相同时保持先出现者在前。
#[derive(Debug, Clone)]
pub struct TopProcesses {
    entries: Vec<ProcessInfo>,
    capacity: usize,
}

impl TopProcesses {
    pub fn new() -> Self {
        Self::with_capacity(TOP_PROCESS_LIMIT)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity.saturating_add(1)),
            capacity,
        }
    }

    /// 插入一条进程记录
    pub fn insert(&mut self, process: ProcessInfo) {
        self.entries.push(process);
        self.entries
            .sort_by(|a, b| b.cpu_percent.total_cmp(&a.cpu_percent));
        self.entries.truncate(self.capacity);
    }

    /// 解析一行 top 输出，匹配成功时插入并返回 true
    pub fn insert_line(&mut self, line: &str) -> bool {
        match parse_process_line(line) {
            Some(process) => {
                self.insert(process);
                true
            }
            None => false,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_slice(&self) -> &[ProcessInfo] {
        &self.entries
    }

    pub fn into_vec(self) -> Vec<ProcessInfo> {
        self.entries
    }
}

impl Default for TopProcesses {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<ProcessInfo> for TopProcesses {
    fn extend<T: IntoIterator<Item = ProcessInfo>>(&mut self, iter: T) {
        for process in iter {
            self.insert(process);
        }
    }
}

fn capture_str(caps: &Captures<'_>, name: &str) -> String {
    caps.name(name).map(|m| m.as_str().to_string()).unwrap_or_default()
}

// 数值转换失败（如溢出）时取零值
fn capture_num<T>(caps: &Captures<'_>, name: &str) -> T
where
    T: std::str::FromStr + Default,
{
    caps.name(name)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or_default()
}

/// 将单行解析为进程记录，格式不符时返回 None
pub fn parse_process_line(line: &str) -> Option<ProcessInfo> {
    let caps = PROCESS_ROW.captures(line)?;

    Some(ProcessInfo {
        pid: capture_num(&caps, "pid"),
        user: capture_str(&caps, "user"),
        priority: capture_num(&caps, "pr"),
        nice: capture_num(&caps, "ni"),
        virt: capture_num(&caps, "virt"),
        res: capture_num(&caps, "res"),
        shr: capture_num(&caps, "shr"),
        state: capture_str(&caps, "state"),
        cpu_percent: capture_num(&caps, "cpu"),
        mem_percent: capture_num(&caps, "mem"),
        time: capture_str(&caps, "time"),
        command: capture_str(&caps, "command"),
    })
}

/// 解析 top 输出，返回 %CPU 最高的至多 10 个进程（降序）
pub fn parse_top_output<I, S>(lines: I) -> Vec<ProcessInfo>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut top = TopProcesses::new();
    for line in lines {
        top.insert_line(line.as_ref());
    }
    top.into_vec()
}

/// 从读取器流式解析 top 输出，内存占用与输入行数无关
pub fn scan_top_output<R: BufRead>(reader: R) -> io::Result<Vec<ProcessInfo>> {
    let mut top = TopProcesses::new();
    let mut skipped = 0usize;

    for line in ReportLines::new(reader) {
        if !top.insert_line(&line?) {
            skipped += 1;
        }
    }

    tracing::debug!("进程解析完成: 保留 {} 条, 跳过 {} 行", top.len(), skipped);
    Ok(top.into_vec())
}

/// 读取并解析 top 输出文件
pub fn read_top_output(path: impl AsRef<Path>) -> Result<Vec<ProcessInfo>> {
    read_report(path.as_ref(), ReportSource::Top, scan_top_output)
}
