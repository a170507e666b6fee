use crate::core::executor::{BATCH_DELAY_MS, FetchSettings, RESULTS_LIMIT};
use crate::core::planner::{CHUNK_DAYS, DRIVER_BATCH_SIZE};
use crate::core::range::Preset;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable that overrides the stored password.
pub const PASSWORD_ENV: &str = "DLVERIFY_PASSWORD";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_server")]
    pub server: String,
    #[serde(default)]
    pub database: String,
    #[serde(default)]
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default = "default_chunk_days")]
    pub chunk_days: u32,
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    #[serde(default = "default_batch_delay_ms")]
    pub batch_delay_ms: u64,
    #[serde(default = "default_results_limit")]
    pub results_limit: u32,
    #[serde(default = "default_foundation_limit")]
    pub foundation_limit: u32,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_preset")]
    pub default_preset: String,
}

fn default_server() -> String {
    "my.geotab.com".to_string()
}
fn default_chunk_days() -> u32 {
    CHUNK_DAYS
}
fn default_batch_size() -> usize {
    DRIVER_BATCH_SIZE
}
fn default_batch_delay_ms() -> u64 {
    BATCH_DELAY_MS
}
fn default_results_limit() -> u32 {
    RESULTS_LIMIT
}
fn default_foundation_limit() -> u32 {
    5000
}
fn default_request_timeout_secs() -> u64 {
    120
}
fn default_preset() -> String {
    "7days".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: default_server(),
            database: String::new(),
            username: String::new(),
            password: None,
            chunk_days: default_chunk_days(),
            batch_size: default_batch_size(),
            batch_delay_ms: default_batch_delay_ms(),
            results_limit: default_results_limit(),
            foundation_limit: default_foundation_limit(),
            request_timeout_secs: default_request_timeout_secs(),
            default_preset: default_preset(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("dlverify")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".dlverify")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("dlverify.conf")
    }

    /// Load configuration from `path` (or the standard file).
    /// A missing file yields the defaults.
    pub fn load_from(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// Write a default configuration file. Refuses to clobber an existing
    /// one unless `force` is set.
    pub fn init(path: &Path, force: bool) -> AppResult<Self> {
        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }
        let cfg = Self::default();
        cfg.save_to(path)?;
        Ok(cfg)
    }

    /// Environment first, then the file.
    pub fn resolve_password(&self) -> AppResult<String> {
        if let Ok(pw) = env::var(PASSWORD_ENV)
            && !pw.is_empty()
        {
            return Ok(pw);
        }
        self.password
            .clone()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| {
                AppError::Config(format!(
                    "no password configured (set {PASSWORD_ENV} or `password` in the config file)"
                ))
            })
    }

    /// Checks the fields a live session needs.
    pub fn require_credentials(&self) -> AppResult<()> {
        if self.database.trim().is_empty() {
            return Err(AppError::Config("`database` is not set".into()));
        }
        if self.username.trim().is_empty() {
            return Err(AppError::Config("`username` is not set".into()));
        }
        Ok(())
    }

    pub fn fetch_settings(&self) -> AppResult<FetchSettings> {
        FetchSettings {
            chunk_days: self.chunk_days,
            batch_size: self.batch_size,
            batch_delay: Duration::from_millis(self.batch_delay_ms),
            results_limit: self.results_limit,
        }
        .validate()
    }

    pub fn preset(&self) -> AppResult<Preset> {
        Preset::parse(&self.default_preset)
    }

    /// Same configuration with the password masked, for printing.
    pub fn redacted(&self) -> Self {
        Self {
            password: self.password.as_ref().map(|_| "********".to_string()),
            ..self.clone()
        }
    }
}
