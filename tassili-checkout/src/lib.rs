pub mod payment;
pub mod service;

pub use payment::{PaymentAdapter, PaymentReceipt, PaymentStatus, SimulatedPaymentAdapter};
pub use service::{checkout_total, CheckoutService};

#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("No confirmed bookings to check out")]
    NoConfirmedBookings,
    #[error("Payment failed: {0}")]
    Payment(String),
}

pub type CheckoutResult<T> = Result<T, CheckoutError>;
