use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf, time::Duration};

/// Top-level configuration, read once at startup and passed explicitly to
/// each component. Every field has a default so a missing file is fine.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// City used when running with `--debug` (no prompts).
    pub debug_city: String,

    /// State used when running with `--debug`.
    pub debug_state: String,

    /// Per-request HTTP timeout, seconds.
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug_city: "El Paso".to_string(),
            debug_state: "TX".to_string(),
            timeout_secs: 10,
        }
    }
}

impl Config {
    /// Load config from disk, or return the defaults if no file exists yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "moon-cli", "moon-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_debug_city() {
        let cfg = Config::default();
        assert_eq!(cfg.debug_city, "El Paso");
        assert_eq!(cfg.debug_state, "TX");
        assert_eq!(cfg.timeout_secs, 10);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let cfg: Config = toml::from_str("timeout_secs = 3").expect("valid toml");
        assert_eq!(cfg.timeout_secs, 3);
        assert_eq!(cfg.debug_city, "El Paso");
        assert_eq!(cfg.debug_state, "TX");
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let cfg: Config = toml::from_str("").expect("valid toml");
        assert_eq!(cfg.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn overrides_debug_location() {
        let cfg: Config =
            toml::from_str("debug_city = \"Tucson\"\ndebug_state = \"AZ\"").expect("valid toml");
        assert_eq!(cfg.debug_city, "Tucson");
        assert_eq!(cfg.debug_state, "AZ");
    }
}
