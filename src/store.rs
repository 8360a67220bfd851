//! Last-entered form state, kept between runs in the user's cache directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::model::TimesheetRecord;

const STATE_FILE: &str = "form-state.json";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoredForm {
    pub form: TimesheetRecord,
    pub preview_open: bool,
}

impl Default for StoredForm {
    fn default() -> Self {
        Self {
            form: TimesheetRecord::default(),
            preview_open: true,
        }
    }
}

/// Platform cache directory for this tool.
pub fn default_state_dir() -> Option<PathBuf> {
    if cfg!(target_os = "macos") {
        std::env::var("HOME")
            .ok()
            .map(|h| PathBuf::from(h).join("Library/Caches/jambo-timesheet"))
    } else if cfg!(target_os = "windows") {
        std::env::var("LOCALAPPDATA")
            .ok()
            .map(|d| PathBuf::from(d).join("jambo-timesheet/cache"))
    } else {
        std::env::var("XDG_CACHE_HOME")
            .ok()
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var("HOME")
                    .ok()
                    .map(|h| PathBuf::from(h).join(".cache"))
            })
            .map(|d| d.join("jambo-timesheet"))
    }
}

pub struct FormStore {
    path: PathBuf,
}

impl FormStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(STATE_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Saved state, or defaults when nothing usable is stored.
    pub fn load(&self) -> StoredForm {
        let Ok(content) = std::fs::read_to_string(&self.path) else {
            return StoredForm::default();
        };
        match serde_json::from_str(&content) {
            Ok(stored) => stored,
            Err(e) => {
                log::warn!("Ignoring unreadable form state {}: {e}", self.path.display());
                StoredForm::default()
            }
        }
    }

    pub fn save(&self, stored: &StoredForm) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(stored)?;
        std::fs::write(&self.path, json)?;
        log::debug!("form state saved to {}", self.path.display());
        Ok(())
    }
}
