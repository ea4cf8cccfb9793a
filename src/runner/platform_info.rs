use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use sortbench::config::Profile;
use sysinfo::{CpuExt, System, SystemExt};

/// Everything needed to reproduce a sweep, stored as `config.toml` in its log directory.
#[derive(Debug, Serialize, Deserialize)]
pub struct RunInfo {
    pub runid: String,
    #[serde(rename = "profile-name")]
    pub profile_name: String,
    /// Generator seed, kept as a string since TOML integers are signed
    pub seed: String,
    #[serde(rename = "start-timestamp-utc")]
    pub start_timestamp_utc: i64,
    #[serde(rename = "finish-timestamp-utc")]
    pub finish_timestamp_utc: Option<i64>,
    pub platform: PlatformInfo,
    pub profile: Profile,
}

impl RunInfo {
    pub fn new(runid: String, profile_name: &str, seed: u64, profile: &Profile) -> Self {
        let mut profile = profile.clone();
        profile.seed = None;
        Self {
            runid,
            profile_name: profile_name.to_owned(),
            seed: seed.to_string(),
            start_timestamp_utc: chrono::Utc::now().timestamp(),
            finish_timestamp_utc: None,
            platform: PLATFORM_INFO.clone(),
            profile,
        }
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        std::fs::write(path, toml::to_string(self)?)?;
        Ok(())
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PlatformInfo {
    pub host: String,
    pub os: String,
    pub arch: String,
    #[serde(rename = "kernel-version")]
    pub kernel_version: String,
    #[serde(rename = "cpu-model")]
    pub cpu_model: String,
    #[serde(rename = "cpu-frequency")]
    pub cpu_frequency: Vec<usize>,
    pub memory: usize,
    pub pid: usize,
    pub rustc: String,
}

fn get_rustc_version() -> Option<String> {
    let vmeta = rustc_version::version_meta().ok()?;
    Some(format!(
        "{} ({})",
        vmeta.semver,
        format!("{:?}", vmeta.channel).to_lowercase()
    ))
}

pub static PLATFORM_INFO: Lazy<PlatformInfo> = Lazy::new(|| {
    let mut sys = System::new_all();
    sys.refresh_all();
    const UNKNOWN: &str = "<unknown>";
    PlatformInfo {
        host: sys.host_name().unwrap_or(UNKNOWN.to_string()),
        os: sys.long_os_version().unwrap_or(UNKNOWN.to_string()),
        arch: std::env::consts::ARCH.to_string(),
        kernel_version: sys.kernel_version().unwrap_or(UNKNOWN.to_string()),
        cpu_model: sys.global_cpu_info().brand().to_owned(),
        cpu_frequency: sys.cpus().iter().map(|c| c.frequency() as usize).collect(),
        memory: sys.total_memory() as usize,
        pid: std::process::id() as usize,
        rustc: get_rustc_version().unwrap_or_else(|| UNKNOWN.to_string()),
    }
});
