use crate::core::policy::Policy;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_site")]
    pub site: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_brief_width")]
    pub brief_width: usize,
    #[serde(default)]
    pub policy: Policy,
}

fn default_site() -> String {
    "Main site".to_string()
}
fn default_currency() -> String {
    "₹".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_brief_width() -> usize {
    72
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site: default_site(),
            currency: default_currency(),
            separator_char: default_separator_char(),
            brief_width: default_brief_width(),
            policy: Policy::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".sitecrew")
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("sitecrew.conf")
    }

    /// Config file to use: the explicit override, or the default location.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        match custom {
            Some(p) => crate::utils::path::expand_tilde(p),
            None => Self::config_file(),
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.policy.working_days_per_week == 0 {
            return Err(AppError::Config(
                "policy.working_days_per_week must be at least 1".into(),
            ));
        }
        if self.brief_width < 20 {
            return Err(AppError::Config("brief_width must be at least 20".into()));
        }
        if self.policy.short_crew_leave_threshold == 0 {
            return Err(AppError::Config(
                "policy.short_crew_leave_threshold must be at least 1".into(),
            ));
        }

        let w = &self.policy.weights;
        let ratios = [
            ("policy.budget_exposure_ratio", self.policy.budget_exposure_ratio),
            ("policy.weights.present", w.present),
            ("policy.weights.standby", w.standby),
            ("policy.weights.leave", w.leave),
            ("policy.weights.absent", w.absent),
        ];
        for (key, value) in ratios {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::Config(format!(
                    "{key} must be a number >= 0, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Write a default configuration file (parent directories included).
    pub fn init_at(path: &Path) -> AppResult<Self> {
        let config = Config::default();

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&config)?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;

        Ok(config)
    }
}
