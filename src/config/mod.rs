//! @acp:module "Configuration"
//! @acp:summary "Config file loading, user-level fallback and defaults"
//! @acp:domain cli
//! @acp:layer config

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::session::Pacing;
use crate::stage::StageId;

/// Default project config file name
pub const CONFIG_FILE: &str = ".funnel.config.json";

fn default_generation_delay_ms() -> u64 {
    Pacing::DEFAULT_DELAY_MS
}

/// @acp:summary "Funnel tool configuration"
/// @acp:lock normal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Simulated generation latency in milliseconds
    #[serde(default = "default_generation_delay_ms")]
    pub generation_delay_ms: u64,

    /// Stage preselected in the interactive form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_stage: Option<StageId>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generation_delay_ms: default_generation_delay_ms(),
            default_stage: None,
        }
    }
}

impl Config {
    /// @acp:summary "Load config from a JSON file"
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// @acp:summary "Save config to a file"
    pub fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Resolve config: explicit/project path, then the user config dir, then defaults
    ///
    /// A file that exists but fails to parse is an error rather than a
    /// silent fallback.
    pub fn resolve(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            tracing::debug!("Loading config from {}", path.display());
            return Self::load(path);
        }
        if let Some(user_path) = user_config_path() {
            if user_path.exists() {
                tracing::debug!("Loading user config from {}", user_path.display());
                return Self::load(&user_path);
            }
        }
        Ok(Self::default())
    }

    /// Pacing for the session controller
    pub fn pacing(&self) -> Pacing {
        Pacing::from_millis(self.generation_delay_ms)
    }
}

/// `<config dir>/funnel/config.json`, when the platform has a config dir
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("funnel").join("config.json"))
}
