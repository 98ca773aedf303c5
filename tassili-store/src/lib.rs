pub mod app_config;
pub mod port;
pub mod store;

pub use port::{FileStorage, MemoryStorage, StorageError, StoragePort};
pub use store::{BookingStore, BOOKINGS_KEY, SELECTED_PLAN_KEY};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage rejected the write: {0}")]
    Storage(#[from] port::StorageError),
    #[error("Failed to encode bookings: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
