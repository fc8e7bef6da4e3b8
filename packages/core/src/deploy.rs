//! Deploy pipeline: copy a script into the sync folder, then inject secrets.
//!
//! The destination file is read and rewritten once per secret. A failure
//! stops the run where it is; secrets applied before it stay applied.

use crate::config::DeployConfig;
use crate::error::DeployError;
use crate::injector::apply_secret;
use crate::secrets::list_secret_names;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of a successful deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployReport {
    /// Where the script now lives
    pub destination_file: PathBuf,
    /// Secrets applied, in the order they were applied
    pub applied: Vec<String>,
}

/// Deploy `config` relative to the current directory.
pub fn deploy_script(config: &DeployConfig) -> Result<DeployReport> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    deploy_script_from(config, &cwd)
}

/// Deploy `config`, resolving relative paths against `base`.
pub fn deploy_script_from(config: &DeployConfig, base: &Path) -> Result<DeployReport> {
    config.validate().context("Configuration validation failed")?;

    let destination_dir = config.destination_path(base)?;
    println!(
        "Deploying {} to {}",
        config.script,
        destination_dir.display()
    );

    // Checked before copying so a script never ships with raw placeholders.
    let secrets_dir = if config.inject_secrets {
        let secrets_dir = config.secrets_path(base)?;
        if !secrets_dir.is_dir() {
            return Err(DeployError::MissingSecretsDir { path: secrets_dir }.into());
        }
        Some(secrets_dir)
    } else {
        None
    };

    let destination_file = config.destination_file(base)?;
    copy_script(&config.script_path(base), &destination_file)?;
    println!("✓ Copied to {}", destination_file.display());

    let applied = match secrets_dir {
        Some(secrets_dir) => apply_all_secrets(&destination_file, &secrets_dir)?,
        None => Vec::new(),
    };

    println!("Deployment complete");

    Ok(DeployReport {
        destination_file,
        applied,
    })
}

/// Copy `script` to `destination_file`, overwriting an earlier copy.
///
/// # Errors
///
/// - [`DeployError::MissingScript`] if `script` does not exist
/// - [`DeployError::MissingDestinationDir`] if the directory holding
///   `destination_file` does not exist
pub fn copy_script(script: &Path, destination_file: &Path) -> Result<()> {
    if !script.is_file() {
        return Err(DeployError::MissingScript {
            path: script.to_path_buf(),
        }
        .into());
    }

    let destination_dir = destination_file.parent().unwrap_or_else(|| Path::new("."));
    if !destination_dir.is_dir() {
        return Err(DeployError::MissingDestinationDir {
            path: destination_dir.to_path_buf(),
        }
        .into());
    }

    fs::copy(script, destination_file).with_context(|| {
        format!(
            "Failed to copy {} to {}",
            script.display(),
            destination_file.display()
        )
    })?;

    Ok(())
}

/// Hint printed under a failed deployment's error, if there is one.
pub fn failure_hint(err: &anyhow::Error) -> Option<String> {
    match err.downcast_ref::<DeployError>()? {
        DeployError::MissingSecretsDir { .. } => Some(
            "💡 Create the secrets directory with one <NAME>.txt file per secret.".to_string(),
        ),
        deploy_err => deploy_err.secret().map(|secret| {
            format!(
                "⚠️  Secrets applied before {} remain in the deployed script.",
                secret
            )
        }),
    }
}

/// Apply every secret in `secrets_dir` to `destination_file`.
///
/// Entries are visited in directory-listing order. Returns the names applied.
pub fn apply_all_secrets(destination_file: &Path, secrets_dir: &Path) -> Result<Vec<String>> {
    let names = list_secret_names(secrets_dir)?;

    for name in &names {
        let replaced = apply_secret(destination_file, secrets_dir, name)?;
        if replaced == 0 {
            println!("  ⊘ No {} placeholder found", name);
        } else {
            println!("  ✓ Replaced {} placeholder(s)", replaced);
        }
    }

    Ok(names)
}
