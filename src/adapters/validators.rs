use crate::core::TransactionValidator;
use rust_decimal::Decimal;

/// Accepts strictly positive amounts.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositiveAmountValidator;

impl TransactionValidator for PositiveAmountValidator {
    fn validate(&self, value: Decimal) -> bool {
        value > Decimal::ZERO
    }
}
