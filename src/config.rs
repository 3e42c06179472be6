use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::PlannerError;
use crate::advisor::GatePolicy;

const CONFIG_DIR_NAME: &str = "farming-advisor";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Dataset document to load when none is given on the command line
    pub dataset_path: Option<PathBuf>,
    /// Where the tracked weapon list is persisted
    pub tracked_path: Option<PathBuf>,
    pub gate_policy: GatePolicy,
    /// List dungeons in the report even when none of their weapons forms a scheme
    pub show_empty_schemes: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset_path: None,
            tracked_path: None,
            gate_policy: GatePolicy::FirstOccurrence,
            show_empty_schemes: true,
        }
    }
}

impl AppConfig {
    pub fn default_path() -> Result<PathBuf, PlannerError> {
        Ok(dirs::config_dir()
            .ok_or(PlannerError::NoConfigDir)?
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME))
    }

    /// Load the config from the user's config directory, or defaults when
    /// nothing has been saved yet.
    pub fn from_local_file() -> Result<Self, PlannerError> {
        Self::from_file(&Self::default_path()?)
    }

    pub fn from_file(config_path: &Path) -> Result<Self, PlannerError> {
        if !config_path.exists() {
            debug!("No config file at {:?}, using defaults", config_path);
            return Ok(Self::default());
        }

        let file =
            fs::File::open(config_path).map_err(|e| PlannerError::ConfigIOError { source: e })?;
        serde_json::from_reader(file).map_err(|e| PlannerError::ConfigSerializeError { source: e })
    }

    pub fn save(&self) -> Result<(), PlannerError> {
        self.save_to(&Self::default_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<(), PlannerError> {
        if let Some(parent) = config_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)
                    .map_err(|e| PlannerError::ConfigIOError { source: e })?;
            }
        }

        let file =
            fs::File::create(config_path).map_err(|e| PlannerError::ConfigIOError { source: e })?;
        serde_json::to_writer_pretty(file, self)
            .map_err(|e| PlannerError::ConfigSerializeError { source: e })
    }
}
