use crate::core::Publisher;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes the rendered page to a local file, opening it in the default
/// browser exactly once per process lifetime. The one-time behavior is
/// gated by a lock file next to the output: present means already opened.
#[derive(Debug, Clone)]
pub struct LocalPublisher {
    output_file: PathBuf,
    lock_file: PathBuf,
    open_browser: bool,
}

impl LocalPublisher {
    pub fn new(output_file: impl Into<PathBuf>, open_browser: bool) -> Self {
        let output_file = output_file.into();
        let mut lock_file = output_file.clone().into_os_string();
        lock_file.push(".lock");

        Self {
            output_file,
            lock_file: PathBuf::from(lock_file),
            open_browser,
        }
    }

    pub fn output_file(&self) -> &Path {
        &self.output_file
    }

    pub fn lock_file(&self) -> &Path {
        &self.lock_file
    }

    /// Deletes a page left behind by a previous run.
    pub fn remove_stale_output(&self) {
        if self.output_file.exists() {
            if let Err(e) = fs::remove_file(&self.output_file) {
                tracing::warn!(
                    "Failed to remove stale {}: {}",
                    self.output_file.display(),
                    e
                );
            }
        }
    }

    /// Called on clean shutdown so the next run opens a browser again.
    pub fn clear_lock(&self) {
        if self.lock_file.exists() {
            if let Err(e) = fs::remove_file(&self.lock_file) {
                tracing::warn!("Failed to remove {}: {}", self.lock_file.display(), e);
            }
        }
    }

    fn open_once(&self) -> Result<()> {
        if self.lock_file.exists() {
            return Ok(());
        }
        fs::write(&self.lock_file, b"")?;

        if self.open_browser {
            tracing::info!("Opening {} in the default browser", self.output_file.display());
            if let Err(e) = open::that(&self.output_file) {
                tracing::warn!(
                    "Failed to open {} in a browser: {}",
                    self.output_file.display(),
                    e
                );
            }
        }
        Ok(())
    }
}

impl Publisher for LocalPublisher {
    async fn publish(&self, document: &str) -> Result<String> {
        fs::write(&self.output_file, document)?;
        self.open_once()?;
        Ok(self.output_file.display().to_string())
    }
}
