use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Default multiplier applied by [`Transaction::new`].
pub const DEFAULT_TAX: i64 = 10;

/// Opaque token naming the originator of a transaction.
///
/// Nothing inspects or normalizes the inner value; it is carried from the
/// caller to the repository as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// A fresh random UUID v4 token.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<Uuid> for UserId {
    fn from(value: Uuid) -> Self {
        Self(value.to_string())
    }
}

/// A transaction accepted by a repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub user_id: UserId,
    #[serde(with = "rust_decimal::serde::str")]
    pub value: Decimal,
    pub recorded_at: DateTime<Utc>,
}

impl TransactionRecord {
    pub fn new(user_id: UserId, value: Decimal) -> Self {
        Self {
            user_id,
            value,
            recorded_at: Utc::now(),
        }
    }
}

/// A transfer between two parties with its taxed value precomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub value: Decimal,
    pub value_with_tax: Decimal,
    pub from: String,
    pub to: String,
}

impl Transaction {
    pub fn new(value: Decimal, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::with_tax(value, from, to, Decimal::from(DEFAULT_TAX))
    }

    pub fn with_tax(
        value: Decimal,
        from: impl Into<String>,
        to: impl Into<String>,
        tax: Decimal,
    ) -> Self {
        Self {
            value,
            value_with_tax: value * tax,
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Outcome of handing a value to a payment method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentReceipt {
    pub method: &'static str,
    pub value: Decimal,
}

impl fmt::Display for PaymentReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} payment: {}", self.method, self.value)
    }
}
