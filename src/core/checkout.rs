use crate::core::{PaymentMethod, PaymentReceipt};
use rust_decimal::Decimal;

/// Runs payments through whichever method the caller picked.
///
/// New payment methods are added by implementing [`PaymentMethod`]; this type
/// never needs to learn about them.
#[derive(Debug, Default)]
pub struct Checkout {
    processed: Vec<PaymentReceipt>,
}

impl Checkout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pay(&mut self, method: &dyn PaymentMethod, value: Decimal) -> PaymentReceipt {
        tracing::debug!("Processing {} payment of {}", method.name(), value);
        let receipt = method.process(value);
        self.processed.push(receipt.clone());
        receipt
    }

    pub fn receipts(&self) -> &[PaymentReceipt] {
        &self.processed
    }

    pub fn total(&self) -> Decimal {
        self.processed.iter().map(|r| r.value).sum()
    }
}
