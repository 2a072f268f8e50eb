use crate::core::{Result, TransactionRepository, TransactionValidator, UserId};
use rust_decimal::Decimal;

/// Validates an amount and, when accepted, hands it to the repository.
///
/// Both collaborators are supplied by the caller and never replaced. The
/// service keeps no other state, so `process_transaction` may be called
/// concurrently whenever the repository tolerates concurrent writes.
pub struct TransactionService<V: TransactionValidator, R: TransactionRepository> {
    validator: V,
    repository: R,
}

impl<V: TransactionValidator, R: TransactionRepository> TransactionService<V, R> {
    pub fn new(validator: V, repository: R) -> Self {
        Self {
            validator,
            repository,
        }
    }

    /// Rejected amounts return `Ok(())` without touching the repository.
    /// Repository failures are returned unchanged.
    pub fn process_transaction(&self, user_id: &UserId, value: Decimal) -> Result<()> {
        self.try_process(user_id, value).map(|_| ())
    }

    /// Same as [`process_transaction`](Self::process_transaction), but reports
    /// whether the amount was accepted and saved.
    pub fn try_process(&self, user_id: &UserId, value: Decimal) -> Result<bool> {
        if !self.validator.validate(value) {
            return Ok(false);
        }

        self.repository.save(user_id, value)?;
        Ok(true)
    }

    /// Processes transactions in order and returns how many were accepted.
    /// Stops at the first repository error.
    pub fn process_batch(&self, transactions: &[(UserId, Decimal)]) -> Result<usize> {
        let mut accepted = 0;
        for (user_id, value) in transactions {
            if self.try_process(user_id, *value)? {
                accepted += 1;
            }
        }
        Ok(accepted)
    }

    pub fn validator(&self) -> &V {
        &self.validator
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Hands the collaborators back to the caller that supplied them.
    pub fn into_parts(self) -> (V, R) {
        (self.validator, self.repository)
    }
}
