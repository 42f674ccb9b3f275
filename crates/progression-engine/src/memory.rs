use crate::store::{ProgressionStore, StoreError};
use async_trait::async_trait;
use progression_types::{UserId, UserProgression};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory [`ProgressionStore`]. Reference backend for tests and for
/// embedders that have not wired a document store yet.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<UserId, UserProgression>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl ProgressionStore for MemoryStore {
    async fn load(&self, user: &UserId) -> Result<Option<UserProgression>, StoreError> {
        Ok(self.records.read().await.get(user).cloned())
    }

    async fn save(&self, user: &UserId, record: &UserProgression) -> Result<(), StoreError> {
        self.records.write().await.insert(*user, record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn load_returns_none_for_unknown_user() {
        let store = MemoryStore::new();
        assert!(store.load(&UserId::random()).await.unwrap().is_none());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let store = MemoryStore::new();
        let user = UserId::random();

        let mut record = UserProgression::default();
        record.xp = 42;
        store.save(&user, &record).await.unwrap();

        let loaded = store.load(&user).await.unwrap().unwrap();
        assert_eq!(loaded, record);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn save_overwrites_previous_record() {
        let store = MemoryStore::new();
        let user = UserId::random();

        store.save(&user, &UserProgression::default()).await.unwrap();
        let mut updated = UserProgression::default();
        updated.xp = 7;
        store.save(&user, &updated).await.unwrap();

        assert_eq!(store.load(&user).await.unwrap().unwrap().xp, 7);
        assert_eq!(store.len().await, 1);
    }
}
