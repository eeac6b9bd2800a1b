/// 共享数据模型
///
/// 定义三类报告解析结果以及组合后的系统信息快照，字段名即 JSON 键名

use serde::{Deserialize, Serialize};
use std::fmt;

/// CPU 描述信息（来自 lscpu 输出）
///
/// 输入中缺失的键保持类型零值，不视为错误
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CpuInfo {
    #[serde(rename = "Architecture")]
    pub architecture: String,
    #[serde(rename = "CPUOpModes")]
    pub cpu_op_modes: String,
    #[serde(rename = "ByteOrder")]
    pub byte_order: String,
    #[serde(rename = "CPUs")]
    pub cpus: i64,
    #[serde(rename = "ThreadsPerCore")]
    pub threads_per_core: i64,
    #[serde(rename = "CoresPerSocket")]
    pub cores_per_socket: i64,
    #[serde(rename = "Sockets")]
    pub sockets: i64,
    #[serde(rename = "NUMANodes")]
    pub numa_nodes: i64,
    #[serde(rename = "VendorID")]
    pub vendor_id: String,
    #[serde(rename = "CPUFamily")]
    pub cpu_family: i64,
    #[serde(rename = "Model")]
    pub model: i64,
    #[serde(rename = "ModelName")]
    pub model_name: String,
    #[serde(rename = "CPUMHz")]
    pub cpu_mhz: f64,
    #[serde(rename = "BogoMIPS")]
    pub bogo_mips: f64,
    #[serde(rename = "HypervisorVendor")]
    pub hypervisor_vendor: String,
    #[serde(rename = "VirtualizationType")]
    pub virtualization_type: String,
    #[serde(rename = "L1DCache")]
    pub l1d_cache: String,
    #[serde(rename = "L1ICache")]
    pub l1i_cache: String,
    #[serde(rename = "L2Cache")]
    pub l2_cache: String,
    #[serde(rename = "L3Cache")]
    pub l3_cache: String,
    #[serde(rename = "NUMANode0CPUs")]
    pub numa_node0_cpus: String,
    #[serde(rename = "Flags")]
    pub flags: String,
}

/// 单个进程采样（来自 top 批处理输出）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessInfo {
    #[serde(rename = "PID")]
    pub pid: i64,
    #[serde(rename = "User")]
    pub user: String,
    #[serde(rename = "PR")]
    pub priority: i64,
    #[serde(rename = "NI")]
    pub nice: i64,
    #[serde(rename = "VIRT")]
    pub virt: i64,
    #[serde(rename = "RES")]
    pub res: i64,
    #[serde(rename = "SHR")]
    pub shr: i64,
    #[serde(rename = "S")]
    pub state: String,
    #[serde(rename = "%CPU")]
    pub cpu_percent: f64,
    #[serde(rename = "%MEM")]
    pub mem_percent: f64,
    #[serde(rename = "TIME+")]
    pub time: String,
    #[serde(rename = "COMMAND")]
    pub command: String,
}

/// 单个挂载文件系统（来自 df -h 输出）
///
/// 容量字段保留原始文本（如 "100G"），不做单位换算
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DiskInfo {
    pub filesystem: String,
    pub size: String,
    pub used: String,
    pub avail: String,
    pub use_percent: String,
    pub mounted_on: String,
}

/// 系统信息快照，每个请求重新组装
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemInfo {
    #[serde(rename = "CPUInfo")]
    pub cpu_info: CpuInfo,
    #[serde(rename = "ProcessInfo")]
    pub process_info: Vec<ProcessInfo>,
    #[serde(rename = "DiskInfo")]
    pub disk_info: Vec<DiskInfo>,
}

/// 报告来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportSource {
    Cpu,
    Top,
    Disk,
}

impl ReportSource {
    /// 展示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Cpu => "CPU 信息",
            Self::Top => "进程信息 (top 输出)",
            Self::Disk => "磁盘信息",
        }
    }
}

impl fmt::Display for ReportSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// 常量定义
pub mod constants {
    /// 默认 Server 端口
    pub const DEFAULT_SERVER_PORT: u16 = 8083;

    /// 默认 lscpu 输出文件
    pub const DEFAULT_CPU_INFO_PATH: &str = "lscpu_out.txt";

    /// 默认 top 输出文件
    pub const DEFAULT_TOP_OUTPUT_PATH: &str = "top.txt";

    /// 默认 df 输出文件
    pub const DEFAULT_DISK_INFO_PATH: &str = "df_output.txt";

    /// 快照中保留的进程数上限
    pub const TOP_PROCESS_LIMIT: usize = 10;
}
