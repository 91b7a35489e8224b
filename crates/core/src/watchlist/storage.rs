use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use log::warn;

use super::WatchlistStorage;

/// Volatile storage for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryWatchlistStorage {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryWatchlistStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WatchlistStorage for MemoryWatchlistStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.lock().insert(key.to_string(), value.to_string());
    }

    fn clear(&self, key: &str) {
        self.lock().remove(key);
    }
}

impl MemoryWatchlistStorage {
    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.values
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// One file per key under a base directory. I/O failures degrade to a
/// missing value and a log line; callers never see them.
pub struct FileWatchlistStorage {
    dir: PathBuf,
}

impl FileWatchlistStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> bool {
        if let Err(err) = fs::create_dir_all(&self.dir) {
            warn!("Failed to create storage dir {:?}: {}", self.dir, err);
            return false;
        }
        true
    }
}

impl WatchlistStorage for FileWatchlistStorage {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Some(contents),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                warn!("Failed to read {:?}: {}", path, err);
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        if !self.ensure_dir() {
            return;
        }
        let path = self.path_for(key);
        if let Err(err) = fs::write(&path, value) {
            warn!("Failed to write {:?}: {}", path, err);
        }
    }

    fn clear(&self, key: &str) {
        let path = self.path_for(key);
        if let Err(err) = fs::remove_file(&path) {
            if err.kind() != std::io::ErrorKind::NotFound {
                warn!("Failed to remove {:?}: {}", path, err);
            }
        }
    }
}
