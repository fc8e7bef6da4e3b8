//! Secret discovery from a local secrets directory.
//!
//! Each file `<NAME>.txt` in the directory is one secret. The name is the
//! file name with the `.txt` suffix stripped; the value is the full file
//! content, read verbatim. Trailing newlines are NOT trimmed.
//!
//! # Example
//!
//! ```no_run
//! use scriptable_deploy::secrets::{list_secret_names, read_secret};
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let dir = Path::new(".secrets");
//! for name in list_secret_names(dir)? {
//!     let secret = read_secret(dir, &name)?;
//!     println!("{} is {} bytes", secret.name, secret.value.len());
//! }
//! # Ok(())
//! # }
//! ```

use crate::error::DeployError;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Default secrets directory, relative to the working directory.
pub const DEFAULT_SECRETS_DIR: &str = ".secrets";

/// Extension every secret file carries.
pub const SECRET_FILE_SUFFIX: &str = ".txt";

/// A name/value pair loaded from the secrets directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretEntry {
    pub name: String,
    pub value: String,
}

impl SecretEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Derive a secret name from a directory entry's file name.
///
/// Names without the `.txt` suffix are returned unchanged.
pub fn secret_name(file_name: &str) -> &str {
    file_name
        .strip_suffix(SECRET_FILE_SUFFIX)
        .unwrap_or(file_name)
}

/// Path of the file backing `name` inside `secrets_dir`.
pub fn secret_file_path(secrets_dir: &Path, name: &str) -> PathBuf {
    secrets_dir.join(format!("{}{}", name, SECRET_FILE_SUFFIX))
}

/// List secret names in directory-listing order.
///
/// The order is whatever the platform returns and is not sorted.
/// Every entry counts, including ones without a `.txt` suffix. An entry
/// whose name is not valid UTF-8 is an error.
pub fn list_secret_names(secrets_dir: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(secrets_dir).with_context(|| {
        format!("Failed to list secrets directory: {}", secrets_dir.display())
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| {
            format!("Failed to read entry in: {}", secrets_dir.display())
        })?;
        let file_name = entry.file_name().into_string().map_err(|raw| {
            anyhow::anyhow!(
                "Secret file name {:?} in {} is not valid UTF-8",
                raw,
                secrets_dir.display()
            )
        })?;
        names.push(secret_name(&file_name).to_string());
    }

    Ok(names)
}

/// Read the secret `name` from `secrets_dir`.
///
/// # Errors
///
/// Returns [`DeployError::MissingSecretFile`] if `<name>.txt` does not exist,
/// or an I/O error if it cannot be read as UTF-8 text.
pub fn read_secret(secrets_dir: &Path, name: &str) -> Result<SecretEntry> {
    let path = secret_file_path(secrets_dir, name);

    if !path.is_file() {
        return Err(DeployError::MissingSecretFile {
            secret: name.to_string(),
            path,
        }
        .into());
    }

    let value = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read secret file: {}", path.display()))?;

    Ok(SecretEntry::new(name, value))
}
