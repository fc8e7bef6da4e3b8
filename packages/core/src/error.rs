//! Error types for deployment failures.
//!
//! Every variant is fatal: the binaries print the message and exit with
//! status 1. Secrets applied before the failure stay applied.

use std::path::PathBuf;
use thiserror::Error;

/// Preconditions that abort a deployment.
#[derive(Debug, Error)]
pub enum DeployError {
    /// A secrets directory entry has no backing `<name>.txt` file.
    #[error(
        "Unable to apply {secret} secret: no secret file at {}. \
         Please ensure a file exists and is readable at that path with the appropriate entry.",
        path.display()
    )]
    MissingSecretFile { secret: String, path: PathBuf },

    /// The document that should receive the secret does not exist.
    #[error(
        "Unable to apply {secret} secret: destination file {} does not exist",
        path.display()
    )]
    MissingDestinationFile { secret: String, path: PathBuf },

    /// The script to deploy is not in the working directory.
    #[error("Script not found: {}", path.display())]
    MissingScript { path: PathBuf },

    /// The sync folder to copy into does not exist.
    #[error("Destination directory not found: {}", path.display())]
    MissingDestinationDir { path: PathBuf },

    /// Secrets are to be injected but the secrets directory does not exist.
    #[error("Secrets directory not found: {}", path.display())]
    MissingSecretsDir { path: PathBuf },
}

impl DeployError {
    /// Name of the secret involved, if the failure happened during injection.
    pub fn secret(&self) -> Option<&str> {
        match self {
            Self::MissingSecretFile { secret, .. } | Self::MissingDestinationFile { secret, .. } => {
                Some(secret.as_str())
            }
            Self::MissingScript { .. }
            | Self::MissingDestinationDir { .. }
            | Self::MissingSecretsDir { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_secret_file_message_names_secret_and_path() {
        let err = DeployError::MissingSecretFile {
            secret: "DEVICE_ID".to_string(),
            path: PathBuf::from(".secrets/DEVICE_ID.txt"),
        };

        let message = err.to_string();
        assert!(message.contains("DEVICE_ID secret"));
        assert!(message.contains(".secrets/DEVICE_ID.txt"));
        assert_eq!(err.secret(), Some("DEVICE_ID"));
    }

    #[test]
    fn test_missing_destination_file_message() {
        let err = DeployError::MissingDestinationFile {
            secret: "WEATHER_API_KEY".to_string(),
            path: PathBuf::from("/sync/WeatherForecast.js"),
        };

        let message = err.to_string();
        assert!(message.contains("WEATHER_API_KEY"));
        assert!(message.contains("/sync/WeatherForecast.js"));
    }

    #[test]
    fn test_copy_errors_have_no_secret() {
        let err = DeployError::MissingScript {
            path: PathBuf::from("TrainTrack.js"),
        };
        assert_eq!(err.secret(), None);
    }
}
