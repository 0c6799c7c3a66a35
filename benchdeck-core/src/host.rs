//! Host Environment
//!
//! Describes the machine the summary was produced on. The runtime descriptor
//! becomes the `[Host]` line of a summary's runtime block.
//!
//! Linux-specific data (CPU model, memory) gracefully degrades on other
//! platforms, returning "Unknown" or 0 values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Host machine information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostEnvironmentInfo {
    /// Runtime descriptor (toolchain, os, arch)
    pub runtime: String,
    /// Operating system (`std::env::consts::OS`)
    pub os: String,
    /// CPU architecture (`std::env::consts::ARCH`)
    pub arch: String,
    /// CPU model name, "Unknown" when unavailable
    pub cpu: String,
    /// Logical cores available to the process
    pub cpu_cores: u32,
    /// Total memory in GB, 0 when unavailable
    pub memory_gb: f64,
    /// When the information was collected
    pub captured_at: DateTime<Utc>,
}

impl HostEnvironmentInfo {
    /// Host info with the given runtime descriptor and the current os/arch
    pub fn new(runtime: impl Into<String>) -> Self {
        Self {
            runtime: runtime.into(),
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            cpu: "Unknown".to_string(),
            cpu_cores: logical_cores(),
            memory_gb: 0.0,
            captured_at: Utc::now(),
        }
    }

    /// Collect host information from the running machine
    pub fn detect() -> Self {
        let toolchain = std::process::Command::new("rustc")
            .arg("--version")
            .output()
            .ok()
            .filter(|o| o.status.success())
            .and_then(|o| String::from_utf8(o.stdout).ok())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "rustc (unknown)".to_string());

        let os = std::env::consts::OS;
        let arch = std::env::consts::ARCH;

        let cpu = read_proc_field("/proc/cpuinfo", "model name");
        let memory_kb = read_proc_field("/proc/meminfo", "MemTotal")
            .and_then(|v| v.split_whitespace().next()?.parse::<u64>().ok());

        Self {
            runtime: format!("{}, {} {}", toolchain, os, arch),
            os: os.to_string(),
            arch: arch.to_string(),
            cpu: cpu.unwrap_or_else(|| "Unknown".to_string()),
            cpu_cores: logical_cores(),
            memory_gb: memory_kb.map_or(0.0, |kb| kb as f64 / (1024.0 * 1024.0)),
            captured_at: Utc::now(),
        }
    }

    /// Runtime descriptor rendered on the `[Host]` line
    pub fn runtime_info(&self) -> &str {
        &self.runtime
    }
}

fn logical_cores() -> u32 {
    std::thread::available_parallelism().map_or(1, |n| n.get() as u32)
}

/// Value of `key` in a `/proc` file, `None` off Linux
fn read_proc_field(path: &str, key: &str) -> Option<String> {
    if !cfg!(target_os = "linux") {
        return None;
    }
    let content = std::fs::read_to_string(path).ok()?;
    find_field(&content, key).map(str::to_string)
}

/// Value of the first `key : value` line
fn find_field<'a>(content: &'a str, key: &str) -> Option<&'a str> {
    content.lines().find_map(|line| {
        let (name, value) = line.split_once(':')?;
        (name.trim() == key).then_some(value.trim())
    })
}
