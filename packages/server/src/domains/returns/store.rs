//! In-memory holder for the latest analysis.
//!
//! Readers get an `Arc` to a complete snapshot. Writers reserve a version
//! when their request arrives and publish by swapping the `Arc`; an older
//! version never replaces a newer one, so overlapping analyze calls settle
//! on the latest-arriving batch.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use super::models::{AnalysisSnapshot, RootCause};

/// Root causes together with the snapshot version they were derived from.
#[derive(Debug, Clone, Default)]
struct DerivedRootCauses {
    version: u64,
    root_causes: Arc<Vec<RootCause>>,
}

pub struct AnalysisStore {
    current: RwLock<Option<Arc<AnalysisSnapshot>>>,
    root_causes: RwLock<DerivedRootCauses>,
    next_version: AtomicU64,
}

impl AnalysisStore {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(None),
            root_causes: RwLock::new(DerivedRootCauses::default()),
            next_version: AtomicU64::new(0),
        }
    }

    /// Reserve the version for an analyze call that just arrived.
    pub fn reserve_version(&self) -> u64 {
        self.next_version.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Publish a snapshot. Returns false if a newer one is already current.
    pub async fn publish(&self, snapshot: AnalysisSnapshot) -> bool {
        let mut current = self.current.write().await;

        if let Some(existing) = current.as_ref() {
            if existing.version >= snapshot.version {
                debug!(
                    current = existing.version,
                    rejected = snapshot.version,
                    "Discarding analysis superseded by a newer request"
                );
                return false;
            }
        }

        info!(
            version = snapshot.version,
            total_returns = snapshot.total_returns,
            "Published analysis snapshot"
        );
        *current = Some(Arc::new(snapshot));
        true
    }

    /// The latest published snapshot, if any analyze call has completed.
    pub async fn snapshot(&self) -> Option<Arc<AnalysisSnapshot>> {
        self.current.read().await.clone()
    }

    /// Version of the current snapshot, 0 when empty.
    pub async fn version(&self) -> u64 {
        self.current
            .read()
            .await
            .as_ref()
            .map(|s| s.version)
            .unwrap_or(0)
    }

    /// Remember the root causes derived from snapshot `version`.
    pub async fn remember_root_causes(&self, version: u64, root_causes: Vec<RootCause>) {
        let mut derived = self.root_causes.write().await;
        if version >= derived.version {
            *derived = DerivedRootCauses {
                version,
                root_causes: Arc::new(root_causes),
            };
        }
    }

    /// The most recently derived root causes (empty until first derivation).
    pub async fn root_causes(&self) -> Arc<Vec<RootCause>> {
        self.root_causes.read().await.root_causes.clone()
    }
}

impl Default for AnalysisStore {
    fn default() -> Self {
        Self::new()
    }
}
