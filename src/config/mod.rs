// Dataset location resolution
//
// Precedence: command-line flag, then environment, then the rc file under
// the home directory. The hypnogram directory defaults to hyps/ next to
// the assessments file.

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

/// Environment variable overriding the assessments file location
pub const DATA_ENV: &str = "SOMNOPLOT_DATA";

pub struct Config;

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> PathBuf {
        let home = std::env::var("HOME").expect("HOME environment variable not set");
        PathBuf::from(home).join(".somnoplot").join("rc")
    }

    /// Resolve the assessments CSV path
    pub fn resolve_data_path(flag: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = flag {
            return Ok(path.to_path_buf());
        }
        if let Ok(env_path) = std::env::var(DATA_ENV) {
            if !env_path.trim().is_empty() {
                return Ok(PathBuf::from(env_path));
            }
        }
        if let Some(path) = Self::read_config_value("data.location") {
            return Ok(path);
        }
        bail!(
            "No assessments file configured. Pass --data, set {}, or add data.location= to {}",
            DATA_ENV,
            Self::config_path().display()
        )
    }

    /// Resolve the directory holding per-subject stage files
    pub fn resolve_hyp_dir(flag: Option<&Path>, data_path: &Path) -> Result<PathBuf> {
        if let Some(dir) = flag {
            return Ok(dir.to_path_buf());
        }
        if let Some(dir) = Self::read_config_value("hyp.location") {
            return Ok(dir);
        }
        // Convention: stage files live in hyps/ beside the assessments file
        let parent = data_path.parent().unwrap_or_else(|| Path::new("."));
        Ok(parent.join("hyps"))
    }

    /// Stage file for one subject inside the hypnogram directory
    pub fn stage_file_path(hyp_dir: &Path, subject_id: u32) -> PathBuf {
        hyp_dir.join(format!("P{}.hyp", subject_id))
    }

    /// Read a key=value entry from the config file, resolving relative
    /// paths against the config file directory
    fn read_config_value(key: &str) -> Option<PathBuf> {
        let config_path = Self::config_path();
        let prefix = format!("{}=", key);
        let config = std::fs::read_to_string(&config_path).ok()?;
        for line in config.lines() {
            let line = line.trim();
            if let Some(value) = line.strip_prefix(&prefix) {
                let path = PathBuf::from(value.trim());
                if path.is_relative() {
                    return Some(config_path.parent()?.join(path));
                }
                return Some(path);
            }
        }
        None
    }
}
