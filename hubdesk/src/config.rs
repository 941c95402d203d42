use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use hubdesk_nav::{Location, PlanTier, hub_root};
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::storage::{config_dir, default_state_path};

const CONFIG_FILE_NAME: &str = "config.json";
const DEFAULT_START_HUB: &str = "crm";

pub(crate) const PLAN_ENV: &str = "HUBDESK_PLAN";
pub(crate) const START_PATH_ENV: &str = "HUBDESK_START_PATH";
pub(crate) const STATE_FILE_ENV: &str = "HUBDESK_STATE_FILE";

/// Launch configuration read from `config.json` and the environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) start_hub: String,
    pub(crate) start_path: Option<String>,
    pub(crate) plan: PlanTier,
    pub(crate) state_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            start_hub: String::from(DEFAULT_START_HUB),
            start_path: None,
            plan: PlanTier::default(),
            state_file: None,
        }
    }
}

impl AppConfig {
    /// Load the config file and apply environment overrides, falling back
    /// to defaults on error.
    pub(crate) fn load() -> Self {
        let path = config_dir().join(CONFIG_FILE_NAME);
        let config = match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Failed to load config, using defaults: {err}");
                Self::default()
            },
        };
        config.with_overrides(|key| std::env::var(key).ok())
    }

    /// Read `path`; a missing file yields defaults.
    pub(crate) fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Ok(Self::default());
            },
            Err(err) => return Err(err.into()),
        };
        let config: AppConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Apply overrides from `lookup`. Blank values are ignored and invalid
    /// ones are logged and skipped.
    pub(crate) fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let value = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(plan) = value(PLAN_ENV) {
            match parse_plan(&plan) {
                Ok(plan) => self.plan = plan,
                Err(err) => log::warn!("ignoring override: {err}"),
            }
        }
        if let Some(path) = value(START_PATH_ENV) {
            self.start_path = Some(path);
        }
        if let Some(file) = value(STATE_FILE_ENV) {
            self.state_file = Some(PathBuf::from(file));
        }
        self
    }

    /// First location shown: the configured path, else the start hub root.
    pub(crate) fn start_location(&self) -> Location {
        match self.start_path.as_deref().filter(|path| !path.is_empty()) {
            Some(path) => Location::parse(path),
            None => Location::parse(&hub_root(&self.start_hub)),
        }
    }

    pub(crate) fn state_path(&self) -> PathBuf {
        self.state_file.clone().unwrap_or_else(default_state_path)
    }
}

fn parse_plan(value: &str) -> Result<PlanTier, ConfigError> {
    value.parse().map_err(|err: hubdesk_nav::UnknownPlan| {
        ConfigError::InvalidValue {
            key: PLAN_ENV,
            message: err.to_string(),
        }
    })
}
