// Copyright 2026 gym-manager contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Application settings
//!
//! A small JSON document next to the data file: gym name for the header
//! bar, currency label for amounts, and where the data file lives.
//! Missing file or unreadable content falls back to defaults; the
//! settings are never a reason the application cannot start.

use atomic_write_file::AtomicWriteFile;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::store::StoreError;

/// Default location of the application files, tilde-expanded at startup
pub const DEFAULT_DATA_DIR: &str = "~/.local/share/gym-manager";

/// User-adjustable application settings
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Gym name shown in the header bar
    pub gym_name: String,

    /// Currency label appended to amounts
    pub currency: String,

    /// Data file location
    pub data_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        let dir = PathBuf::from(shellexpand::tilde(DEFAULT_DATA_DIR).as_ref());
        Self {
            gym_name: "النادي الرياضي".to_string(),
            currency: "ج.م".to_string(),
            data_file: dir.join("gym.json"),
        }
    }
}

impl Settings {
    /// Loads settings, falling back to defaults on any problem.
    ///
    /// A corrupt settings file is reported on stderr and ignored; the
    /// application starts with defaults rather than refusing to run.
    pub fn load_or_default(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(settings) => settings,
                Err(e) => {
                    eprintln!("⚠️  Ignoring corrupt settings file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Saves settings atomically.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;

        let mut file = AtomicWriteFile::options().open(path).map_err(|e| {
            StoreError::WriteFailed(format!("failed to open for atomic write: {}", e))
        })?;

        file.write_all(content.as_bytes())
            .map_err(|e| StoreError::WriteFailed(format!("failed to write content: {}", e)))?;

        file.commit()
            .map_err(|e| StoreError::WriteFailed(format!("failed to commit atomic write: {}", e)))
    }
}
