pub mod booking;
pub mod catalog;
pub mod plan;
pub mod pricing;

pub use booking::{BookingDraft, BookingPatch, BookingRecord, ContactDetails, ItemType};
pub use catalog::{Activity, Catalog, Destination, Flight, Hotel, Trip};
pub use plan::Plan;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Unknown item type: {0}")]
    UnknownItemType(String),
    #[error("Unknown plan: {0}")]
    UnknownPlan(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
