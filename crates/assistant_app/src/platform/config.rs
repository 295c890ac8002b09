//! Application configuration, read from `config.ron` in the user's config
//! directory and overridable from the environment.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use assistant_engine::{
    BackendSettings, CommandTabLocator, StaticTabLocator, TabLocator, DEFAULT_BACKEND_URL,
};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub(crate) const APP_DIR_NAME: &str = "context-assistant";
const CONFIG_FILENAME: &str = "config.ron";
const DEFAULT_LOG_FILENAME: &str = "context-assistant.log";

pub(crate) const ENV_BACKEND_URL: &str = "CONTEXT_ASSISTANT_BACKEND_URL";
pub(crate) const ENV_TAB_URL: &str = "CONTEXT_ASSISTANT_TAB_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not parse {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Where the active tab URL comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TabSource {
    Static(String),
    /// External helper printing the URL on its first stdout line.
    Command { program: String, args: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub backend_url: String,
    pub tab_source: Option<TabSource>,
    pub state_dir: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            tab_source: None,
            state_dir: None,
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads the user's config file, then applies environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match default_config_path() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        ron::from_str(&text).map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        if let Some(url) = non_blank(ENV_BACKEND_URL) {
            self.backend_url = url;
        }
        if let Some(url) = non_blank(ENV_TAB_URL) {
            self.tab_source = Some(TabSource::Static(url));
        }
    }

    pub fn backend_settings(&self) -> BackendSettings {
        BackendSettings {
            base_url: self.backend_url.clone(),
        }
    }

    pub fn tab_locator(&self) -> Arc<dyn TabLocator> {
        match &self.tab_source {
            Some(TabSource::Static(url)) => Arc::new(StaticTabLocator::new(url.clone())),
            Some(TabSource::Command { program, args }) => {
                Arc::new(CommandTabLocator::new(program.clone(), args.clone()))
            }
            None => Arc::new(StaticTabLocator::unavailable()),
        }
    }

    pub fn state_dir(&self) -> PathBuf {
        self.state_dir.clone().unwrap_or_else(default_state_dir)
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| self.state_dir().join(DEFAULT_LOG_FILENAME))
    }

    /// Unknown level names fall back to `Info`.
    pub fn log_level(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILENAME))
}

fn default_state_dir() -> PathBuf {
    dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}
