use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Processing,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub id: String,
    pub amount: f64,
    pub status: PaymentStatus,
    pub processed_at: DateTime<Utc>,
}

#[async_trait]
pub trait PaymentAdapter: Send + Sync {
    /// Process a payment for `amount` and produce a receipt.
    async fn process_payment(
        &self,
        amount: f64,
    ) -> Result<PaymentReceipt, Box<dyn std::error::Error + Send + Sync>>;
}

/// Stand-in for a real payment gateway: waits a fixed delay, then succeeds.
pub struct SimulatedPaymentAdapter {
    delay: Duration,
}

impl SimulatedPaymentAdapter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn with_delay_ms(delay_ms: u64) -> Self {
        Self::new(Duration::from_millis(delay_ms))
    }
}

#[async_trait]
impl PaymentAdapter for SimulatedPaymentAdapter {
    async fn process_payment(
        &self,
        amount: f64,
    ) -> Result<PaymentReceipt, Box<dyn std::error::Error + Send + Sync>> {
        tracing::info!("Processing simulated payment of {amount}");
        tokio::time::sleep(self.delay).await;

        Ok(PaymentReceipt {
            id: format!("sim_{}", Uuid::new_v4().simple()),
            amount,
            status: PaymentStatus::Succeeded,
            processed_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_simulated_payment_waits_then_succeeds() {
        let adapter = SimulatedPaymentAdapter::with_delay_ms(50);
        let started = Instant::now();
        let receipt = adapter.process_payment(600.0).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(50));
        assert_eq!(receipt.status, PaymentStatus::Succeeded);
        assert_eq!(receipt.amount, 600.0);
        assert!(receipt.id.starts_with("sim_"));
    }
}
