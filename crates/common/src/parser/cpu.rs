/// CPU 信息解析（lscpu 输出）
///
/// 每行按空白切分：第一个词为键，其余部分用单个空格重新拼接为值。
/// 键与下方 `CPU_INFO_KEYS` 表做逐字节精确匹配，不做去冒号、去空格等归一化。

use std::io::{self, BufRead};
use std::path::Path;

use crate::errors::Result;
use crate::models::{CpuInfo, ReportSource};

use super::{read_report, ReportLines};

/// CPU 字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CpuField {
    Architecture,
    CpuOpModes,
    ByteOrder,
    Cpus,
    ThreadsPerCore,
    CoresPerSocket,
    Sockets,
    NumaNodes,
    VendorId,
    CpuFamily,
    Model,
    ModelName,
    CpuMhz,
    BogoMips,
    HypervisorVendor,
    VirtualizationType,
    L1dCache,
    L1iCache,
    L2Cache,
    L3Cache,
    NumaNode0Cpus,
    Flags,
}

/// 可识别的键（保持采集脚本输出中的原始写法）
///
/// 注意：这张表对应某一版 lscpu 输出的格式怪癖，冒号和空格的位置并不统一。
/// - `"NUMANode0CPUs "`、`"VendorID "`、`"VirtualizationType "` 带尾随空格，
///   而键来自按空白切分后的单词，永远不可能匹配，对应字段始终为零值。
/// - `"Byte"` 只匹配 "Byte Order:" 的第一个词，因此值会是 "Order: Little Endian"。
/// - `"Thread(s)"`、`"Core(s)"` 同理，值以 "per core:" / "per socket:" 开头，数值解析结果为 0。
///
/// 这些行为与现有 JSON 消费方保持一致，修改前需和维护者确认。
const CPU_INFO_KEYS: &[(&str, CpuField)] = &[
    ("Architecture:", CpuField::Architecture),
    ("CPUOpModes", CpuField::CpuOpModes),
    ("Byte", CpuField::ByteOrder),
    ("CPU(s):", CpuField::Cpus),
    ("Thread(s)", CpuField::ThreadsPerCore),
    ("Core(s)", CpuField::CoresPerSocket),
    ("Socket(s):", CpuField::Sockets),
    ("NUMANode0CPUs ", CpuField::NumaNodes),
    ("VendorID ", CpuField::VendorId),
    ("CPUFamily", CpuField::CpuFamily),
    ("Model:", CpuField::Model),
    ("ModelName", CpuField::ModelName),
    ("CPUMHz", CpuField::CpuMhz),
    ("BogoMIPS:", CpuField::BogoMips),
    ("HypervisorVendor", CpuField::HypervisorVendor),
    ("VirtualizationType ", CpuField::VirtualizationType),
    ("L1DCache", CpuField::L1dCache),
    ("L1ICache", CpuField::L1iCache),
    ("L2Cache", CpuField::L2Cache),
    ("L3Cache", CpuField::L3Cache),
    ("NUMANode0CPUs", CpuField::NumaNode0Cpus),
    ("Flags:", CpuField::Flags),
];

fn lookup_field(key: &str) -> Option<CpuField> {
    CPU_INFO_KEYS
        .iter()
        .find(|(literal, _)| *literal == key)
        .map(|(_, field)| *field)
}

// 数值解析失败时取零值
fn parse_int(value: &str) -> i64 {
    value.parse().unwrap_or_default()
}

// NaN / inf 无法编码为 JSON 数值，同样取零值
fn parse_float(value: &str) -> f64 {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or_default()
}

impl CpuInfo {
    fn assign(&mut self, field: CpuField, value: String) {
        match field {
            CpuField::Architecture => self.architecture = value,
            CpuField::CpuOpModes => self.cpu_op_modes = value,
            CpuField::ByteOrder => self.byte_order = value,
            CpuField::Cpus => self.cpus = parse_int(&value),
            CpuField::ThreadsPerCore => self.threads_per_core = parse_int(&value),
            CpuField::CoresPerSocket => self.cores_per_socket = parse_int(&value),
            CpuField::Sockets => self.sockets = parse_int(&value),
            CpuField::NumaNodes => self.numa_nodes = parse_int(&value),
            CpuField::VendorId => self.vendor_id = value,
            CpuField::CpuFamily => self.cpu_family = parse_int(&value),
            CpuField::Model => self.model = parse_int(&value),
            CpuField::ModelName => self.model_name = value,
            CpuField::CpuMhz => self.cpu_mhz = parse_float(&value),
            CpuField::BogoMips => self.bogo_mips = parse_float(&value),
            CpuField::HypervisorVendor => self.hypervisor_vendor = value,
            CpuField::VirtualizationType => self.virtualization_type = value,
            CpuField::L1dCache => self.l1d_cache = value,
            CpuField::L1iCache => self.l1i_cache = value,
            CpuField::L2Cache => self.l2_cache = value,
            CpuField::L3Cache => self.l3_cache = value,
            CpuField::NumaNode0Cpus => self.numa_node0_cpus = value,
            CpuField::Flags => self.flags = value,
        }
    }

    /// 处理一行 lscpu 输出
    ///
    /// 少于两个词的行、未识别的键都会被忽略；同一键出现多次时以最后一次为准
    fn apply_line(&mut self, line: &str) {
        let mut fields = line.split_whitespace();
        let (Some(key), Some(first)) = (fields.next(), fields.next()) else {
            return;
        };

        let Some(field) = lookup_field(key) else {
            tracing::trace!("忽略未识别的 CPU 键: {}", key);
            return;
        };

        let value = std::iter::once(first).chain(fields).collect::<Vec<_>>().join(" ");
        self.assign(field, value);
    }
}

/// 解析内存中的 lscpu 输出
pub fn parse_cpu_info<I, S>(lines: I) -> CpuInfo
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut cpu_info = CpuInfo::default();
    for line in lines {
        cpu_info.apply_line(line.as_ref());
    }
    cpu_info
}

/// 从读取器流式解析 lscpu 输出
pub fn scan_cpu_info<R: BufRead>(reader: R) -> io::Result<CpuInfo> {
    let mut cpu_info = CpuInfo::default();
    for line in ReportLines::new(reader) {
        cpu_info.apply_line(&line?);
    }
    Ok(cpu_info)
}

/// 读取并解析 lscpu 输出文件
pub fn read_cpu_info(path: impl AsRef<Path>) -> Result<CpuInfo> {
    read_report(path.as_ref(), ReportSource::Cpu, scan_cpu_info)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LSCPU_FIXTURE: &str = include_str!("../../fixtures/lscpu_out.txt");

    #[test]
    fn test_architecture_line() {
        let info = parse_cpu_info(["Architecture: x86_64"]);
        assert_eq!(info.architecture, "x86_64");
    }

    #[test]
    fn test_value_rejoined_with_single_spaces() {
        let info = parse_cpu_info(["ModelName   Intel(R)   Xeon(R)\tCPU @ 2.20GHz"]);
        assert_eq!(info.model_name, "Intel(R) Xeon(R) CPU @ 2.20GHz");
    }

    #[test]
    fn test_single_token_line_skipped() {
        let info = parse_cpu_info(["Architecture:", "Flags:", "   ", ""]);
        assert_eq!(info, CpuInfo::default());
    }

    #[test]
    fn test_unknown_key_ignored() {
        let info = parse_cpu_info(["Stepping: 7", "architecture: arm64", "Architecture x86_64"]);
        assert_eq!(info, CpuInfo::default());
    }

    #[test]
    fn test_numeric_field_non_numeric_is_zero() {
        let info = parse_cpu_info(["CPU(s): lots", "Architecture: x86_64", "BogoMIPS: n/a"]);
        assert_eq!(info.cpus, 0);
        assert_eq!(info.bogo_mips, 0.0);
        assert_eq!(info.architecture, "x86_64");
    }

    #[test]
    fn test_numeric_fields() {
        let info = parse_cpu_info([
            "CPU(s): 8",
            "Socket(s): 2",
            "Model: 85",
            "CPUFamily 6",
            "CPUMHz 2200.000",
            "BogoMIPS: 4400.00",
        ]);
        assert_eq!(info.cpus, 8);
        assert_eq!(info.sockets, 2);
        assert_eq!(info.model, 85);
        assert_eq!(info.cpu_family, 6);
        assert_eq!(info.cpu_mhz, 2200.0);
        assert_eq!(info.bogo_mips, 4400.0);
    }

    #[test]
    fn test_literal_key_quirks() {
        let info = parse_cpu_info([
            "Byte Order: Little Endian",
            "Thread(s) per core: 2",
            "VendorID GenuineIntel",
            "NUMANode0CPUs 0-7",
        ]);
        assert_eq!(info.byte_order, "Order: Little Endian");
        assert_eq!(info.threads_per_core, 0);
        // 带尾随空格的键无法匹配
        assert_eq!(info.vendor_id, "");
        assert_eq!(info.numa_nodes, 0);
        assert_eq!(info.numa_node0_cpus, "0-7");
    }

    #[test]
    fn test_non_finite_float_is_zero() {
        let info = parse_cpu_info(["CPUMHz NaN", "BogoMIPS: inf"]);
        assert_eq!(info.cpu_mhz, 0.0);
        assert_eq!(info.bogo_mips, 0.0);
        assert!(crate::utils::to_pretty_json(&info).unwrap().contains("\"CPUMHz\": 0.0"));
    }

    #[test]
    fn test_counts_wider_than_32_bits() {
        let info = parse_cpu_info(["CPU(s): 4294967296"]);
        assert_eq!(info.cpus, 4_294_967_296);
    }

    #[test]
    fn test_scan_matches_in_memory_parse() {
        let scanned = scan_cpu_info(std::io::Cursor::new(LSCPU_FIXTURE)).unwrap();
        assert_eq!(scanned, parse_cpu_info(LSCPU_FIXTURE.lines()));
    }

    #[test]
    fn test_last_value_wins() {
        let info = parse_cpu_info(["CPU(s): 4", "CPU(s): 16"]);
        assert_eq!(info.cpus, 16);
    }

    #[test]
    fn test_empty_input() {
        let info = parse_cpu_info(Vec::<String>::new());
        assert_eq!(info, CpuInfo::default());
    }

    #[test]
    fn test_fixture() {
        let info = parse_cpu_info(LSCPU_FIXTURE.lines());
        assert_eq!(info.architecture, "x86_64");
        assert_eq!(info.cpu_op_modes, "32-bit, 64-bit");
        assert_eq!(info.byte_order, "Order: Little Endian");
        assert_eq!(info.cpus, 4);
        assert_eq!(info.sockets, 1);
        assert_eq!(info.model, 79);
        assert_eq!(info.bogo_mips, 4399.99);
        assert_eq!(info.l3_cache, "56 MiB");
        assert_eq!(info.numa_node0_cpus, "0-3");
        assert!(info.flags.starts_with("fpu vme de pse"));
    }

    #[test]
    fn test_parse_is_idempotent() {
        let first = parse_cpu_info(LSCPU_FIXTURE.lines());
        let second = parse_cpu_info(LSCPU_FIXTURE.lines());
        assert_eq!(first, second);
    }

    #[test]
    fn test_read_cpu_info_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_cpu_info(dir.path().join("lscpu_out.txt")).unwrap_err();
        assert_eq!(err.report_source(), Some(ReportSource::Cpu));
    }
}
