/// 报告解析器
///
/// 三个相互独立的文本解析器，把命令输出转换为结构化记录。
/// 格式不符的行直接跳过（结构性解析失败不是错误），只有文件打开/读取失败才返回错误。
/// 报告按行流式读取，任何时刻只持有当前行和累加器中的结果。

pub mod cpu;
pub mod disk;
pub mod process;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::errors::{Error, Result};
use crate::models::ReportSource;

pub use cpu::{parse_cpu_info, read_cpu_info, scan_cpu_info};
pub use disk::{parse_disk_info, read_disk_info, scan_disk_info};
pub use process::{parse_top_output, read_top_output, scan_top_output, TopProcesses};

/// 逐行迭代报告内容
///
/// 行尾的 `\r` 会被去掉，非 UTF-8 字节按有损方式解码
pub struct ReportLines<R> {
    chunks: io::Split<R>,
}

impl<R: BufRead> ReportLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            chunks: reader.split(b'\n'),
        }
    }
}

impl<R: BufRead> Iterator for ReportLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let chunk = self.chunks.next()?;
        Some(chunk.map(|mut bytes| {
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
            String::from_utf8_lossy(&bytes).into_owned()
        }))
    }
}

fn read_error(path: &Path, kind: ReportSource) -> impl Fn(io::Error) -> Error + '_ {
    move |error| Error::ReportRead {
        kind,
        path: path.to_path_buf(),
        error,
    }
}

/// 打开报告文件并交给对应的流式解析函数
pub(crate) fn read_report<T>(
    path: &Path,
    kind: ReportSource,
    scan: impl FnOnce(BufReader<File>) -> io::Result<T>,
) -> Result<T> {
    let file = File::open(path).map_err(read_error(path, kind))?;
    let parsed = scan(BufReader::new(file)).map_err(read_error(path, kind))?;

    tracing::debug!("读取{}完成: {}", kind, path.display());
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    #[test]
    fn test_report_lines_strips_carriage_return() {
        let reader = Cursor::new(b"first\r\nsecond\n\xffthird".to_vec());
        let lines: Vec<String> = ReportLines::new(reader).map(|l| l.unwrap()).collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "first");
        assert_eq!(lines[1], "second");
        assert!(lines[2].ends_with("third"));
    }

    #[test]
    fn test_report_lines_empty_input() {
        assert_eq!(ReportLines::new(Cursor::new(Vec::new())).count(), 0);
    }

    #[test]
    fn test_report_lines_are_lazy() {
        // 无穷输入：只有逐行读取才能返回
        let endless = BufReader::new(io::repeat(b'\n'));
        let lines: Vec<String> = ReportLines::new(endless)
            .take(3)
            .map(|l| l.unwrap())
            .collect();
        assert_eq!(lines, vec!["", "", ""]);
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "device gone"))
        }
    }

    #[test]
    fn test_read_failure_is_reported() {
        let mut lines = ReportLines::new(BufReader::new(FailingReader));
        assert!(lines.next().unwrap().is_err());
    }

    #[test]
    fn test_read_report_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = read_report(&path, ReportSource::Cpu, |reader| {
            Ok(ReportLines::new(reader).count())
        })
        .unwrap_err();
        assert_eq!(err.report_source(), Some(ReportSource::Cpu));
    }
}
