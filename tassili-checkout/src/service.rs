use std::sync::Arc;

use tassili_domain::BookingRecord;
use tassili_store::BookingStore;

use crate::payment::{PaymentAdapter, PaymentReceipt};
use crate::{CheckoutError, CheckoutResult};

/// Sum of `total_price` over confirmed bookings only. Distinct from the
/// store's everything-total: unconfirmed records never reach checkout.
pub fn checkout_total(bookings: &[BookingRecord]) -> f64 {
    bookings
        .iter()
        .filter(|b| b.confirmed)
        .map(|b| b.total_price)
        .sum()
}

/// Drives the checkout flow: gather confirmed bookings, take their total,
/// run the payment adapter.
pub struct CheckoutService {
    store: BookingStore,
    adapter: Arc<dyn PaymentAdapter>,
}

impl CheckoutService {
    pub fn new(store: BookingStore, adapter: Arc<dyn PaymentAdapter>) -> Self {
        Self { store, adapter }
    }

    pub fn confirmed_bookings(&self) -> Vec<BookingRecord> {
        self.store
            .list_bookings()
            .into_iter()
            .filter(|b| b.confirmed)
            .collect()
    }

    /// Checkout over the confirmed bookings. Refused when nothing is
    /// confirmed; the storefront sends the user back to their bookings.
    pub async fn checkout(&self) -> CheckoutResult<PaymentReceipt> {
        let confirmed = self.confirmed_bookings();
        if confirmed.is_empty() {
            return Err(CheckoutError::NoConfirmedBookings);
        }

        let total = checkout_total(&confirmed);
        let receipt = self
            .adapter
            .process_payment(total)
            .await
            .map_err(|err| CheckoutError::Payment(err.to_string()))?;
        tracing::info!(
            "Checkout of {} bookings completed, receipt {}",
            confirmed.len(),
            receipt.id
        );
        Ok(receipt)
    }
}
