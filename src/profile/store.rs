//! TOML-backed profile store for the command-line tool.
//!
//! The file maps account ids to display names:
//!
//! ```toml
//! [accounts]
//! me = "abcde"
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use super::ProfileService;
use crate::error::ProfileError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ProfileFile {
    #[serde(default)]
    accounts: BTreeMap<String, String>,
}

/// Profile store persisted to a single TOML file.
///
/// Names are read once at open time and served from memory. Updates are
/// written through to disk one at a time; the cache only changes when the
/// write succeeds.
#[derive(Debug)]
pub struct FileProfileStore {
    path: PathBuf,
    cache: Mutex<BTreeMap<String, String>>,
    /// Held across snapshot, write and commit so concurrent updates cannot
    /// overwrite each other.
    write_lock: tokio::sync::Mutex<()>,
}

impl FileProfileStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ProfileError> {
        let path = path.into();
        let accounts = if path.exists() {
            let contents = std::fs::read_to_string(&path).map_err(|source| ProfileError::Read {
                path: path.display().to_string(),
                source,
            })?;
            toml::from_str::<ProfileFile>(&contents)?.accounts
        } else {
            BTreeMap::new()
        };
        Ok(Self {
            path,
            cache: Mutex::new(accounts),
            write_lock: tokio::sync::Mutex::new(()),
        })
    }

    async fn write(&self, accounts: BTreeMap<String, String>) -> Result<(), ProfileError> {
        let contents = toml::to_string_pretty(&ProfileFile { accounts })?;
        let write_err = |source| ProfileError::Write {
            path: self.path.display().to_string(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(write_err)?;
            }
        }
        tokio::fs::write(&self.path, contents).await.map_err(write_err)?;
        Ok(())
    }
}

impl ProfileService for FileProfileStore {
    fn current_name(&self, account: &str) -> Option<String> {
        self.cache.lock().ok()?.get(account).cloned()
    }

    async fn update_display_name(&self, account: &str, new_name: &str) -> bool {
        let _writing = self.write_lock.lock().await;

        let mut accounts = match self.cache.lock() {
            Ok(cache) => cache.clone(),
            Err(_) => return false,
        };
        accounts.insert(account.to_string(), new_name.to_string());

        match self.write(accounts.clone()).await {
            Ok(()) => {
                if let Ok(mut cache) = self.cache.lock() {
                    *cache = accounts;
                }
                tracing::info!(account, path = %self.path.display(), "display name saved");
                true
            }
            Err(e) => {
                tracing::warn!(account, error = %e, "display name update failed");
                false
            }
        }
    }
}
