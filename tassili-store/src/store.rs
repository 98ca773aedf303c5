use std::sync::Arc;

use chrono::Utc;
use tassili_domain::{BookingDraft, BookingPatch, BookingRecord};

use crate::port::StoragePort;
use crate::StoreResult;

/// Storage key holding the JSON-encoded booking collection.
pub const BOOKINGS_KEY: &str = "travel_bookings";

/// Storage key holding the selected plan name.
pub const SELECTED_PLAN_KEY: &str = "selected_plan";

/// CRUD over the booking collection plus the independent plan selection.
///
/// Every operation reads the full collection, modifies it in memory, and
/// writes it back; record counts are small enough that this stays cheap.
/// The store is the only writer of its two keys.
pub struct BookingStore {
    storage: Arc<dyn StoragePort>,
}

impl BookingStore {
    pub fn new(storage: Arc<dyn StoragePort>) -> Self {
        Self { storage }
    }

    /// All bookings in insertion order. Unreadable or corrupt storage yields
    /// an empty collection, never an error; the next successful write
    /// overwrites the corrupt blob.
    pub fn list_bookings(&self) -> Vec<BookingRecord> {
        let raw = match self.storage.load(BOOKINGS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                tracing::warn!("Error reading bookings: {err}");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(bookings) => bookings,
            Err(err) => {
                tracing::warn!("Discarding corrupt bookings blob: {err}");
                Vec::new()
            }
        }
    }

    /// Append a new record built from `draft`. A storage rejection (quota,
    /// unavailable backend) surfaces as an error the caller should treat as
    /// retryable; the booking is not saved.
    pub fn create_booking(&self, draft: BookingDraft) -> StoreResult<BookingRecord> {
        let mut bookings = self.list_bookings();
        let record = BookingRecord::from_draft(draft);
        bookings.push(record.clone());
        self.persist(&bookings)?;
        Ok(record)
    }

    /// Merge `patch` over the record with `id` and stamp `updated_at`.
    /// `Ok(false)` reports an unknown id; that is an outcome, not an error.
    pub fn update_booking(&self, id: &str, patch: &BookingPatch) -> StoreResult<bool> {
        let mut bookings = self.list_bookings();
        let Some(record) = bookings.iter_mut().find(|b| b.id == id) else {
            return Ok(false);
        };
        patch.apply(record);
        record.updated_at = Some(Utc::now());
        self.persist(&bookings)?;
        Ok(true)
    }

    /// Mark the record confirmed and stamp `confirmed_at`.
    pub fn confirm_booking(&self, id: &str) -> StoreResult<bool> {
        self.update_booking(id, &BookingPatch::confirm())
    }

    /// Remove the record with `id`. Deletion is idempotent: an absent id
    /// still succeeds and leaves the collection unchanged.
    pub fn delete_booking(&self, id: &str) -> StoreResult<()> {
        let mut bookings = self.list_bookings();
        bookings.retain(|b| b.id != id);
        self.persist(&bookings)
    }

    /// Sum of `total_price` over every record, confirmed or not. The
    /// checkout total is confirmed-only and computed by the caller.
    pub fn total(&self) -> f64 {
        self.list_bookings().iter().map(|b| b.total_price).sum()
    }

    pub fn selected_plan(&self) -> Option<String> {
        match self.storage.load(SELECTED_PLAN_KEY) {
            Ok(plan) => plan,
            Err(err) => {
                tracing::warn!("Error reading selected plan: {err}");
                None
            }
        }
    }

    pub fn set_selected_plan(&self, plan: &str) -> StoreResult<()> {
        self.storage.save(SELECTED_PLAN_KEY, plan)?;
        Ok(())
    }

    fn persist(&self, bookings: &[BookingRecord]) -> StoreResult<()> {
        let raw = serde_json::to_string(bookings)?;
        self.storage.save(BOOKINGS_KEY, &raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::{MemoryStorage, StorageError};
    use crate::StoreError;
    use chrono::NaiveDate;
    use tassili_domain::pricing::booking_total;
    use tassili_domain::{ContactDetails, ItemType};

    fn store() -> BookingStore {
        BookingStore::new(Arc::new(MemoryStorage::new()))
    }

    fn contact() -> ContactDetails {
        ContactDetails {
            full_name: "Yacine Merad".to_string(),
            email: "yacine@example.com".to_string(),
            phone: "+213 555 0102".to_string(),
            notes: Some("window seat".to_string()),
        }
    }

    fn draft(item_type: ItemType, price: f64, guests: u32, nights: Option<u32>) -> BookingDraft {
        BookingDraft {
            item_type,
            title: "Test booking".to_string(),
            price,
            date: NaiveDate::from_ymd_opt(2026, 10, 2).unwrap(),
            guests,
            nights,
            total_price: booking_total(item_type, price, guests, nights),
            extra_details: contact(),
            image: None,
            item_data: serde_json::Value::Null,
        }
    }

    #[test]
    fn test_created_bookings_carry_the_pricing_contract() {
        let store = store();
        store
            .create_booking(draft(ItemType::Flight, 250.0, 2, None))
            .unwrap();
        store
            .create_booking(draft(ItemType::Hotel, 100.0, 2, Some(3)))
            .unwrap();
        store
            .create_booking(draft(ItemType::Trip, 80.0, 3, None))
            .unwrap();
        store
            .create_booking(draft(ItemType::Activity, 45.0, 1, None))
            .unwrap();

        let bookings = store.list_bookings();
        assert_eq!(bookings.len(), 4);
        for booking in &bookings {
            let expected = match booking.item_type {
                ItemType::Hotel => {
                    booking.price * booking.nights.unwrap() as f64 * booking.guests as f64
                }
                _ => booking.price * booking.guests as f64,
            };
            assert_eq!(booking.total_price, expected);
        }
        assert_eq!(store.total(), 500.0 + 600.0 + 240.0 + 45.0);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = store();
        let first = store
            .create_booking(draft(ItemType::Flight, 100.0, 1, None))
            .unwrap();
        let second = store
            .create_booking(draft(ItemType::Trip, 90.0, 1, None))
            .unwrap();
        let ids: Vec<String> = store.list_bookings().into_iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[test]
    fn test_update_stamps_updated_at_and_reports_unknown_ids() {
        let store = store();
        let record = store
            .create_booking(draft(ItemType::Trip, 80.0, 2, None))
            .unwrap();

        let patch = BookingPatch {
            guests: Some(3),
            total_price: Some(240.0),
            ..Default::default()
        };
        assert!(store.update_booking(&record.id, &patch).unwrap());
        let updated = &store.list_bookings()[0];
        assert_eq!(updated.guests, 3);
        assert_eq!(updated.total_price, 240.0);
        assert!(updated.updated_at.is_some());

        assert!(!store.update_booking("missing-id", &patch).unwrap());
    }

    #[test]
    fn test_confirm_marks_exactly_one_record() {
        let store = store();
        let keep = store
            .create_booking(draft(ItemType::Hotel, 100.0, 2, Some(3)))
            .unwrap();
        store
            .create_booking(draft(ItemType::Flight, 250.0, 1, None))
            .unwrap();

        assert!(store.confirm_booking(&keep.id).unwrap());
        let confirmed: Vec<BookingRecord> = store
            .list_bookings()
            .into_iter()
            .filter(|b| b.confirmed)
            .collect();
        assert_eq!(confirmed.len(), 1);
        assert_eq!(confirmed[0].id, keep.id);
        assert!(confirmed[0].confirmed_at.is_some());

        assert!(!store.confirm_booking("missing-id").unwrap());
    }

    #[test]
    fn test_delete_is_idempotent() {
        let store = store();
        let record = store
            .create_booking(draft(ItemType::Activity, 45.0, 2, None))
            .unwrap();
        assert_eq!(store.list_bookings().len(), 1);

        store.delete_booking(&record.id).unwrap();
        assert!(store.list_bookings().is_empty());

        // Second delete of the same id is a no-op, not an error.
        store.delete_booking(&record.id).unwrap();
        assert!(store.list_bookings().is_empty());
    }

    #[test]
    fn test_corrupt_blob_lists_empty_and_self_heals() {
        let storage = Arc::new(MemoryStorage::new());
        storage.save(BOOKINGS_KEY, "{not json").unwrap();
        let store = BookingStore::new(storage.clone());

        assert!(store.list_bookings().is_empty());
        assert_eq!(store.total(), 0.0);

        // The next successful write overwrites the corrupt state.
        store
            .create_booking(draft(ItemType::Flight, 120.0, 1, None))
            .unwrap();
        assert_eq!(store.list_bookings().len(), 1);
        let raw = storage.load(BOOKINGS_KEY).unwrap().unwrap();
        assert!(serde_json::from_str::<serde_json::Value>(&raw).is_ok());
    }

    struct RejectingStorage;

    impl StoragePort for RejectingStorage {
        fn load(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn save(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::QuotaExceeded)
        }
    }

    #[test]
    fn test_rejected_write_fails_soft_and_saves_nothing() {
        let store = BookingStore::new(Arc::new(RejectingStorage));
        let result = store.create_booking(draft(ItemType::Hotel, 100.0, 1, Some(2)));
        assert!(matches!(
            result,
            Err(StoreError::Storage(StorageError::QuotaExceeded))
        ));
        assert!(store.list_bookings().is_empty());
    }

    #[test]
    fn test_selected_plan_is_independent_and_last_write_wins() {
        let store = store();
        assert!(store.selected_plan().is_none());
        store.set_selected_plan("Basic").unwrap();
        store.set_selected_plan("Premium").unwrap();
        assert_eq!(store.selected_plan().as_deref(), Some("Premium"));
        assert!(store.list_bookings().is_empty());
    }

    #[test]
    fn test_persisted_blob_uses_storefront_layout() {
        let storage = Arc::new(MemoryStorage::new());
        let store = BookingStore::new(storage.clone());
        store
            .create_booking(draft(ItemType::Hotel, 100.0, 2, Some(3)))
            .unwrap();

        let raw = storage.load(BOOKINGS_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let record = &value.as_array().unwrap()[0];
        assert_eq!(record["itemType"], "hotel");
        assert_eq!(record["totalPrice"], 600.0);
        assert_eq!(record["confirmed"], false);
        assert!(record["createdAt"].is_string());
    }
}
