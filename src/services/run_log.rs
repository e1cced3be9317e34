use crate::error::Result;
use crate::models::RunLog;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes one timestamped JSON record per run into a log directory.
///
/// Best effort: two runs within the same second target the same file name
/// and the later one wins.
pub struct RunLogger {
    dir: PathBuf,
}

impl RunLogger {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn write(&self, log: &RunLog) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;

        let timestamp = Utc::now().format("%Y%m%d_%H%M%S");
        let path = self.dir.join(format!("log_{}.json", timestamp));
        fs::write(&path, serde_json::to_string_pretty(log)?)?;

        tracing::debug!("Run log written to {}", path.display());
        Ok(path)
    }
}

impl Default for RunLogger {
    fn default() -> Self {
        Self::new("logs")
    }
}
