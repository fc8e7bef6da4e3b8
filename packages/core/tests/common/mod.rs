//! Common testing utilities for Scriptable Deploy integration tests.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test context with a project directory and a sync folder to deploy into.
pub struct TestContext {
    /// Working directory the deploy runs from
    pub project: PathBuf,
    /// Directory scripts get copied into
    pub sync: PathBuf,
    /// Stand-in home directory for `~` expansion
    #[allow(dead_code)]
    pub home: PathBuf,
    /// The temporary directory (kept to prevent early deletion)
    _temp_dir: TempDir,
}

impl TestContext {
    /// Create a new test context with empty project and sync directories.
    pub fn new() -> anyhow::Result<Self> {
        let temp_dir = TempDir::new()?;
        let project = temp_dir.path().join("project");
        let sync = temp_dir.path().join("sync");
        let home = temp_dir.path().join("home");
        fs::create_dir_all(&project)?;
        fs::create_dir_all(&sync)?;
        fs::create_dir_all(&home)?;

        Ok(Self {
            project,
            sync,
            home,
            _temp_dir: temp_dir,
        })
    }

    /// Create a file in the project directory.
    pub fn create_file(&self, name: &str, content: &str) -> anyhow::Result<PathBuf> {
        let file_path = self.project.join(name);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&file_path, content)?;
        Ok(file_path)
    }

    /// Create `.secrets/<name>.txt` in the project directory.
    #[allow(dead_code)]
    pub fn create_secret(&self, name: &str, value: &str) -> anyhow::Result<PathBuf> {
        self.create_file(&format!(".secrets/{}.txt", name), value)
    }

    /// Write a config that deploys `script` into the sync directory.
    #[allow(dead_code)]
    pub fn create_config(&self, name: &str, script: &str) -> anyhow::Result<PathBuf> {
        let content = format!(
            "script: {}\ndestination: {}\n",
            script,
            self.sync.display()
        );
        self.create_file(name, &content)
    }

    /// Create the Scriptable documents folder under the stand-in home.
    #[allow(dead_code)]
    pub fn create_scriptable_documents(&self) -> anyhow::Result<PathBuf> {
        let documents = self
            .home
            .join("Library/Mobile Documents/iCloud~dk~simonbs~Scriptable/Documents");
        fs::create_dir_all(&documents)?;
        Ok(documents)
    }

    /// Read a deployed file from the sync directory.
    #[allow(dead_code)]
    pub fn deployed(&self, name: &str) -> String {
        fs::read_to_string(self.sync.join(name)).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_test_context_create_file() {
        let ctx = TestContext::new().unwrap();
        let file_path = ctx.create_file("test.txt", "Hello, World!").unwrap();

        assert!(file_path.exists());
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "Hello, World!");
    }

    #[test]
    fn test_test_context_create_secret() {
        let ctx = TestContext::new().unwrap();
        let path = ctx.create_secret("DEVICE_ID", "123").unwrap();

        assert_eq!(path, ctx.project.join(".secrets/DEVICE_ID.txt"));
    }
}
