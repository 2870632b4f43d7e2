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

//! File system watcher for live data file monitoring
//!
//! Uses OS-level file watching (Linux inotify) via the notify crate.
//! Zero CPU overhead when the data file is unchanged; the UI refreshes
//! when another process (a second front-desk terminal, a sync tool)
//! rewrites it.
//!
//! The watch is placed on the parent directory, not the file: saves go
//! through a temp-file-then-rename, and a watch on the file itself would
//! be lost after the first rename.

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use std::{
    path::{Path, PathBuf},
    sync::mpsc::{channel, Receiver},
};

/// Watches the gym data file for external modifications
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
    rx: Receiver<notify::Result<Event>>,
    data_path: PathBuf,
}

impl FileWatcher {
    /// Starts watching the directory containing `data_path`.
    ///
    /// The path is canonicalized first: notify reports absolute paths,
    /// so a relative or symlinked data path would never match an event.
    pub fn new(data_path: PathBuf) -> Result<Self, Box<dyn std::error::Error>> {
        let file_name = data_path
            .file_name()
            .ok_or("data path has no file name")?
            .to_os_string();

        let parent = data_path
            .parent()
            .ok_or("data file has no parent directory")?;
        let parent = if parent.as_os_str().is_empty() {
            Path::new(".")
        } else {
            parent
        };

        let dir = parent.canonicalize()?;
        let data_path = dir.join(file_name);

        let (tx, rx) = channel();

        let mut watcher = RecommendedWatcher::new(
            move |res| {
                let _ = tx.send(res);
            },
            Config::default(),
        )?;

        watcher.watch(&dir, RecursiveMode::NonRecursive)?;

        Ok(FileWatcher {
            _watcher: watcher,
            rx,
            data_path,
        })
    }

    /// Drains pending events and reports whether the data file changed
    /// (non-blocking). Events for sibling files, including the backups
    /// our own saves create, are ignored.
    pub fn check_for_changes(&self) -> bool {
        let mut changed = false;

        while let Ok(event_result) = self.rx.try_recv() {
            let Ok(event) = event_result else { continue };

            let touches_data_file = event.paths.iter().any(|p| p == &self.data_path);
            if !touches_data_file {
                continue;
            }

            if matches!(
                event.kind,
                notify::EventKind::Modify(_) | notify::EventKind::Create(_)
            ) {
                changed = true;
            }
        }

        changed
    }
}

#[cfg(test)]
mod tests {
    use super::FileWatcher;
    use std::fs;
    use std::time::Duration;
    use tempfile::TempDir;

    #[test]
    fn test_watch_path_is_canonicalized() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("sub")).unwrap();

        // A path with a `..` segment, as a user-supplied --data could be
        let twisted = temp_dir.path().join("sub").join("..").join("gym.json");
        let watcher = FileWatcher::new(twisted).unwrap();

        let expected = temp_dir.path().canonicalize().unwrap().join("gym.json");
        assert_eq!(watcher.data_path, expected);
    }

    #[test]
    fn test_detects_writes_to_the_data_file() {
        let temp_dir = TempDir::new().unwrap();
        let data_path = temp_dir.path().join("gym.json");
        fs::write(&data_path, "{}").unwrap();

        let watcher = FileWatcher::new(data_path.clone()).unwrap();

        fs::write(&data_path, r#"{"members": []}"#).unwrap();

        // Event delivery is asynchronous; poll briefly
        let mut changed = false;
        for _ in 0..50 {
            if watcher.check_for_changes() {
                changed = true;
                break;
            }
            std::thread::sleep(Duration::from_millis(20));
        }
        assert!(changed, "a rewrite of the data file must be reported");
    }

    #[test]
    fn test_sibling_files_are_ignored() {
        let temp_dir = TempDir::new().unwrap();
        let data_path = temp_dir.path().join("gym.json");
        fs::write(&data_path, "{}").unwrap();

        let watcher = FileWatcher::new(data_path).unwrap();

        fs::write(temp_dir.path().join("other.json"), "{}").unwrap();
        std::thread::sleep(Duration::from_millis(300));

        assert!(!watcher.check_for_changes());
    }
}
