//! Secret injection into a deployed script.
//!
//! # Placeholder Format
//!
//! A secret named `DEVICE_ID` is referenced in the script as the literal
//! token `DEVICE_ID_SECRET`. Every occurrence is replaced with the secret
//! value; there is no escaping and no regex matching.
//!
//! # Example
//!
//! ```
//! use scriptable_deploy::injector::inject;
//!
//! let script = "const DEVICE_ID = 'DEVICE_ID_SECRET';";
//! let deployed = inject(script, "DEVICE_ID", "123456789");
//!
//! assert_eq!(deployed, "const DEVICE_ID = '123456789';");
//! ```

use crate::error::DeployError;
use crate::secrets::read_secret;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Suffix appended to a secret name to form its placeholder token.
pub const PLACEHOLDER_SUFFIX: &str = "_SECRET";

/// Placeholder token for the secret `name`.
pub fn placeholder_token(name: &str) -> String {
    format!("{}{}", name, PLACEHOLDER_SUFFIX)
}

/// Replace every occurrence of `name`'s placeholder in `document` with `value`.
pub fn inject(document: &str, name: &str, value: &str) -> String {
    document.replace(&placeholder_token(name), value)
}

/// Count occurrences of `name`'s placeholder in `document`.
pub fn count_placeholders(document: &str, name: &str) -> usize {
    document.matches(placeholder_token(name).as_str()).count()
}

/// Apply the secret `secret_name` from `secrets_dir` to `destination_file`.
///
/// The destination is read, substituted in memory and written back in full,
/// even when it holds no placeholder. Returns the number of placeholders
/// replaced.
///
/// # Errors
///
/// - [`DeployError::MissingSecretFile`] if `<secrets_dir>/<secret_name>.txt`
///   does not exist
/// - [`DeployError::MissingDestinationFile`] if `destination_file` does not
///   exist
/// - an I/O error if either file cannot be read or the destination cannot be
///   written
pub fn apply_secret(destination_file: &Path, secrets_dir: &Path, secret_name: &str) -> Result<usize> {
    println!("Applying {} secret", secret_name);

    let secret = read_secret(secrets_dir, secret_name)?;

    if !destination_file.is_file() {
        return Err(DeployError::MissingDestinationFile {
            secret: secret_name.to_string(),
            path: destination_file.to_path_buf(),
        }
        .into());
    }

    let document = fs::read_to_string(destination_file).with_context(|| {
        format!("Failed to read destination file: {}", destination_file.display())
    })?;

    let replaced = count_placeholders(&document, &secret.name);
    let updated = inject(&document, &secret.name, &secret.value);

    fs::write(destination_file, updated).with_context(|| {
        format!("Failed to write destination file: {}", destination_file.display())
    })?;

    Ok(replaced)
}
