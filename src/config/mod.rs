use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::env;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Overrides the configuration directory (used by tests and portable setups).
pub const HOME_ENV: &str = "RTIMEAUDIT_HOME";

/// Keys every configuration file is expected to define.
pub const FIELDS: [&str; 5] = [
    "data_file",
    "delimiter",
    "separator_char",
    "max_rows",
    "chart_width",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_file")]
    pub data_file: String,
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    /// Maximum rows printed per table, 0 = all.
    #[serde(default)]
    pub max_rows: usize,
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
}

fn default_data_file() -> String {
    Config::config_dir()
        .join("timekeeping.csv")
        .to_string_lossy()
        .to_string()
}
fn default_delimiter() -> char {
    ','
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_chart_width() -> usize {
    40
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            delimiter: default_delimiter(),
            separator_char: default_separator_char(),
            max_rows: 0,
            chart_width: default_chart_width(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if let Ok(custom) = env::var(HOME_ENV) {
            return expand_tilde(&custom);
        }

        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimeaudit")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rtimeaudit")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimeaudit.conf")
    }

    /// Path of the CSV to read, with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_file)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content).map_err(|e| {
            AppError::Config(format!("cannot parse {}: {e}", path.display()))
        })?;

        debug!(path = %path.display(), "configuration loaded");
        Ok(cfg)
    }

    /// Keys of [`FIELDS`] absent from the configuration file on disk.
    pub fn missing_fields() -> AppResult<Vec<&'static str>> {
        let path = Self::config_file();
        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        let yaml: Value = serde_yaml::from_str(&content)?;

        let Some(map) = yaml.as_mapping() else {
            return Ok(FIELDS.to_vec());
        };

        Ok(FIELDS
            .iter()
            .filter(|k| !map.contains_key(**k))
            .copied()
            .collect())
    }

    /// Create the configuration directory and file.
    ///
    /// In test mode the file is not written, only the resulting config is
    /// returned.
    pub fn init_all(data_file: Option<String>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let mut config = Config::default();

        // Data file: user provided (relative → inside config dir) or default
        if let Some(name) = data_file {
            let p = expand_tilde(&name);
            let resolved = if p.is_absolute() { p } else { dir.join(p) };
            config.data_file = resolved.to_string_lossy().to_string();
        }

        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            fs::write(Self::config_file(), yaml)?;
        }

        Ok(config)
    }
}
