use async_trait::async_trait;
use progression_types::{UserId, UserProgression};

/// Errors surfaced by a storage backend.
///
/// Backends wrap their native errors in `Backend`; the engine never
/// inspects them beyond propagation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage backend: {0}")]
    Backend(#[from] anyhow::Error),
}

/// Persistence port for progression records.
///
/// `load` returns `None` for users with no record yet; the service, not
/// the store, decides to materialize the all-zero default. `save` is the
/// single write at the end of each operation; the service's per-user lock
/// guarantees at most one in-flight `load`/`save` pair per user, so a
/// backend needs no additional concurrency control of its own for
/// correctness (a remote document store should still write the record
/// atomically).
#[async_trait]
pub trait ProgressionStore: Send + Sync {
    async fn load(&self, user: &UserId) -> Result<Option<UserProgression>, StoreError>;
    async fn save(&self, user: &UserId, record: &UserProgression) -> Result<(), StoreError>;
}
