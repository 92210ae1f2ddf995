use crate::error::Result;
use serde::{Deserialize, Serialize};

/// The config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// Application name reported to the notification service
    pub appname: String,
    /// How long notifications stay on screen, in milliseconds
    /// Uses the notification service's default when unset
    pub timeout: Option<u32>,
    /// Default for `-after` when it is not given on the command line
    pub after: Option<i64>,
    /// Bundle identifier of the application to post notifications as (macOS only)
    pub bundle_id: Option<String>,
}

impl Default for ConfigFile {
    fn default() -> Self {
        ConfigFile {
            appname: "notify".into(),
            timeout: None,
            after: None,
            bundle_id: None,
        }
    }
}

impl ConfigFile {
    /// Load ~/.config/notify-cmd/notify-cmd.toml
    #[mutants::skip] // Cannot test directly, depends on system state
    pub fn load() -> Result<Self> {
        Ok(confy::load("notify-cmd")?)
    }

    /// Threshold to use, preferring the one given on the command line
    pub fn after(&self, cli_after: Option<i64>) -> Option<i64> {
        cli_after.or(self.after)
    }
}
