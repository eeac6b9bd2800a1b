pub mod system_info_service;

pub use system_info_service::*;
