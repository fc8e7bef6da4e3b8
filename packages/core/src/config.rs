// Scriptable Deploy Configuration Module
//
// This module describes a deployment target: which script to copy, where the
// Scriptable sync folder lives, and where secrets are read from.

use crate::secrets::DEFAULT_SECRETS_DIR;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file, looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "scriptable-deploy.yaml";

/// Scriptable's iCloud documents folder on macOS.
pub const SCRIPTABLE_DOCUMENTS: &str =
    "~/Library/Mobile Documents/iCloud~dk~simonbs~Scriptable/Documents";

fn default_destination() -> String {
    SCRIPTABLE_DOCUMENTS.to_string()
}

fn default_secrets_dir() -> String {
    DEFAULT_SECRETS_DIR.to_string()
}

fn default_inject_secrets() -> bool {
    true
}

/// Deployment target configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DeployConfig {
    /// Script file name in the working directory (e.g., "FootballScores.js")
    pub script: String,

    /// Directory the script is copied into (`~` is expanded)
    #[serde(default = "default_destination")]
    pub destination: String,

    /// Directory holding `<NAME>.txt` secret files
    #[serde(default = "default_secrets_dir")]
    pub secrets_dir: String,

    /// Whether to substitute `<NAME>_SECRET` placeholders after copying
    #[serde(default = "default_inject_secrets")]
    pub inject_secrets: bool,
}

impl DeployConfig {
    /// Target with default destination and secrets directory.
    pub fn new(script: impl Into<String>) -> Self {
        Self {
            script: script.into(),
            destination: default_destination(),
            secrets_dir: default_secrets_dir(),
            inject_secrets: default_inject_secrets(),
        }
    }

    /// Football scores widget; needs its device id injected.
    pub fn football_scores() -> Self {
        Self::new("FootballScores.js")
    }

    /// Train departure widget; copied as is.
    pub fn train_track() -> Self {
        Self {
            inject_secrets: false,
            ..Self::new("TrainTrack.js")
        }
    }

    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: DeployConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.script.is_empty() {
            anyhow::bail!("Script name cannot be empty");
        }

        if self.script.contains('/') || self.script.contains('\\') {
            anyhow::bail!(
                "Script name '{}' must be a file name in the working directory",
                self.script
            );
        }

        if self.destination.is_empty() {
            anyhow::bail!("Destination cannot be empty");
        }

        Ok(())
    }

    /// Path of the source script, relative to `base`
    pub fn script_path(&self, base: &Path) -> PathBuf {
        base.join(&self.script)
    }

    /// Path of the secrets directory, relative to `base`
    pub fn secrets_path(&self, base: &Path) -> Result<PathBuf> {
        resolve_path(&self.secrets_dir, base)
    }

    /// Absolute path of the destination directory
    pub fn destination_path(&self, base: &Path) -> Result<PathBuf> {
        resolve_path(&self.destination, base)
    }

    /// Path the script will have once deployed
    pub fn destination_file(&self, base: &Path) -> Result<PathBuf> {
        Ok(self.destination_path(base)?.join(&self.script))
    }
}

/// Expand a leading `~` to the home directory and anchor relative paths at `base`.
fn resolve_path(raw: &str, base: &Path) -> Result<PathBuf> {
    if raw == "~" || raw.starts_with("~/") {
        let home = dirs::home_dir().context("Failed to determine home directory")?;
        let rest = raw[1..].trim_start_matches('/');
        return Ok(if rest.is_empty() { home } else { home.join(rest) });
    }

    let path = Path::new(raw);
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(base.join(path))
    }
}
