//! Cached snapshot of the tracker's users, used to turn chat names into ids.
//!
//! The snapshot is immutable and replaced wholesale, so a reader sees either
//! the directory before a refresh or the one after it. Two callers that both
//! find the cache empty may both refresh; the later swap wins.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::error::CommandError;
use crate::redmine::{Directory, Tracker};

pub struct DirectoryCache {
    snapshot: ArcSwap<Directory>,
}

impl DirectoryCache {
    pub fn new() -> Self {
        Self {
            snapshot: ArcSwap::from_pointee(Directory::default()),
        }
    }

    /// Current snapshot. Hold on to it to resolve several names consistently.
    pub fn snapshot(&self) -> Arc<Directory> {
        self.snapshot.load_full()
    }

    /// Returns the cached directory, fetching it first if the cache is empty.
    pub async fn ensure_loaded(
        &self,
        tracker: &dyn Tracker,
    ) -> Result<Arc<Directory>, CommandError> {
        let current = self.snapshot();
        if !current.is_empty() {
            return Ok(current);
        }
        self.refresh(tracker).await
    }

    pub fn resolve(&self, name: &str) -> Option<u64> {
        self.snapshot.load().resolve(name)
    }

    pub(crate) async fn refresh(
        &self,
        tracker: &dyn Tracker,
    ) -> Result<Arc<Directory>, CommandError> {
        let fetched = match tracker.list_users().await {
            Ok(directory) => directory,
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch users");
                return Err(CommandError::DirectoryUnavailable);
            }
        };

        if fetched.total_count == 0 || fetched.is_empty() {
            tracing::warn!("tracker returned no users");
            return Err(CommandError::DirectoryUnavailable);
        }

        tracing::info!(users = fetched.users.len(), "loaded user directory");
        let fetched = Arc::new(fetched);
        self.snapshot.store(Arc::clone(&fetched));
        Ok(fetched)
    }
}
