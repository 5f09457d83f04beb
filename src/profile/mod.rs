//! Profile collaborators: where the current display name comes from and
//! where the new one goes.

pub mod store;

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;

pub use store::FileProfileStore;

/// Read and update access to account display names.
pub trait ProfileService {
    /// Cached current display name of `account`, if known.
    fn current_name(&self, account: &str) -> Option<String>;

    /// Replace the display name of `account`. Resolves to `true` on success.
    fn update_display_name(
        &self,
        account: &str,
        new_name: &str,
    ) -> impl Future<Output = bool> + Send;
}

/// In-process profile table.
#[derive(Debug, Default)]
pub struct MemoryProfiles {
    names: Mutex<HashMap<String, String>>,
    /// When set, every update reports failure and changes nothing.
    fail_updates: bool,
}

impl MemoryProfiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(account: &str, name: &str) -> Self {
        let profiles = Self::new();
        profiles.set(account, name);
        profiles
    }

    /// A table whose updates always fail.
    pub fn failing() -> Self {
        Self {
            fail_updates: true,
            ..Self::default()
        }
    }

    pub fn set(&self, account: &str, name: &str) {
        if let Ok(mut names) = self.names.lock() {
            names.insert(account.to_string(), name.to_string());
        }
    }
}

impl ProfileService for MemoryProfiles {
    fn current_name(&self, account: &str) -> Option<String> {
        self.names.lock().ok()?.get(account).cloned()
    }

    async fn update_display_name(&self, account: &str, new_name: &str) -> bool {
        if self.fail_updates {
            return false;
        }
        match self.names.lock() {
            Ok(mut names) => {
                names.insert(account.to_string(), new_name.to_string());
                true
            }
            Err(_) => false,
        }
    }
}
