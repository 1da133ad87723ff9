//! Snapshot store: the current application state handed to the reports

use std::sync::Arc;

use shared::{validate_snapshot, AppSnapshot, SnapshotIssue};
use tokio::sync::{RwLock, RwLockReadGuard};

use crate::config::SnapshotConfig;
use crate::error::{AppError, AppResult};

/// Shared holder of the current snapshot
///
/// Reports take a read guard for the duration of one computation; an external
/// collaborator replaces the whole value when its data changes.
#[derive(Clone, Default)]
pub struct SnapshotStore {
    inner: Arc<RwLock<AppSnapshot>>,
}

impl SnapshotStore {
    pub fn new(snapshot: AppSnapshot) -> Self {
        Self {
            inner: Arc::new(RwLock::new(snapshot)),
        }
    }

    /// Build the store from the configured document
    ///
    /// A missing document falls back to the demonstration data when
    /// `seed_when_missing` is set. Absent collections of a stored document are
    /// filled from the same seed.
    pub async fn load(config: &SnapshotConfig) -> AppResult<Self> {
        let snapshot = match &config.path {
            Some(path) => match tokio::fs::read_to_string(path).await {
                Ok(json) => {
                    tracing::info!("Loading snapshot from {}", path);
                    AppSnapshot::migrate_from_json(&json)?
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound && config.seed_when_missing => {
                    tracing::warn!("Snapshot {} not found, serving seed data", path);
                    AppSnapshot::seed()
                }
                Err(e) => {
                    return Err(AppError::StorageError(format!(
                        "Cannot read snapshot {}: {}",
                        path, e
                    )))
                }
            },
            None if config.seed_when_missing => {
                tracing::info!("No snapshot path configured, serving seed data");
                AppSnapshot::seed()
            }
            None => {
                return Err(AppError::Configuration(
                    "snapshot.path is required when snapshot.seed_when_missing is false"
                        .to_string(),
                ))
            }
        };

        log_issues(&validate_snapshot(&snapshot));
        log_counts(&snapshot);

        Ok(Self::new(snapshot))
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, AppSnapshot> {
        self.inner.read().await
    }

    /// Replace the current snapshot, returning the validation findings
    pub async fn replace(&self, snapshot: AppSnapshot) -> Vec<SnapshotIssue> {
        let issues = validate_snapshot(&snapshot);
        log_issues(&issues);
        log_counts(&snapshot);

        *self.inner.write().await = snapshot;
        tracing::info!("Snapshot replaced");
        issues
    }
}

fn log_issues(issues: &[SnapshotIssue]) {
    for issue in issues {
        tracing::warn!(
            collection = %issue.collection,
            record_id = %issue.record_id,
            "Snapshot issue: {}",
            issue.message
        );
    }
}

fn log_counts(snapshot: &AppSnapshot) {
    tracing::info!(
        references = snapshot.references.len(),
        clients = snapshot.clients.len(),
        receptions = snapshot.receptions.len(),
        dispatches = snapshot.dispatches.len(),
        orders = snapshot.orders.len(),
        "Snapshot ready"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_without_path_serves_seed() {
        let store = SnapshotStore::load(&SnapshotConfig::default()).await.unwrap();
        assert_eq!(store.read().await.references.len(), 3);
    }

    #[tokio::test]
    async fn test_load_without_path_or_seed_fails() {
        let config = SnapshotConfig {
            path: None,
            seed_when_missing: false,
        };
        assert!(matches!(
            SnapshotStore::load(&config).await,
            Err(AppError::Configuration(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_file_falls_back_to_seed() {
        let config = SnapshotConfig {
            path: Some("/nonexistent/correria/snapshot.json".to_string()),
            seed_when_missing: true,
        };
        let store = SnapshotStore::load(&config).await.unwrap();
        assert_eq!(store.read().await.orders.len(), 1);

        let strict = SnapshotConfig {
            seed_when_missing: false,
            ..config
        };
        assert!(matches!(
            SnapshotStore::load(&strict).await,
            Err(AppError::StorageError(_))
        ));
    }

    #[tokio::test]
    async fn test_load_migrates_stored_document() {
        let path = std::env::temp_dir().join(format!("correria-snapshot-{}.json", std::process::id()));
        tokio::fs::write(&path, r#"{"orders": []}"#).await.unwrap();

        let config = SnapshotConfig {
            path: Some(path.to_string_lossy().into_owned()),
            seed_when_missing: false,
        };
        let store = SnapshotStore::load(&config).await.unwrap();
        {
            let snapshot = store.read().await;
            assert!(snapshot.orders.is_empty());
            assert_eq!(snapshot.sellers.len(), 3);
        }

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_replace_returns_issues() {
        let store = SnapshotStore::new(AppSnapshot::default());
        let issues = store.replace(AppSnapshot::seed()).await;
        assert_eq!(issues.len(), 1);
        assert_eq!(store.read().await.clients.len(), 2);
    }
}
