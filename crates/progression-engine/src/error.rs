use crate::store::StoreError;

/// Errors produced by progression operations.
#[derive(Debug, thiserror::Error)]
pub enum ProgressionError {
    /// XP awards must be positive; a zero amount is rejected before any
    /// state is read or written.
    #[error("xp amount must be positive, got {amount}")]
    InvalidAmount { amount: u64 },
    /// Storage failure, propagated unmodified. Retry policy, if any,
    /// belongs to the store implementation.
    #[error(transparent)]
    Store(#[from] StoreError),
}
