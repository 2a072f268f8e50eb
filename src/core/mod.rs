pub mod checkout;
pub mod transaction_service;

pub use crate::domain::model::{PaymentReceipt, Transaction, TransactionRecord, UserId};
pub use crate::domain::ports::{
    EditableFile, PaymentMethod, ReadRepository, RemoteFile, TransactionRepository,
    TransactionValidator, WriteRepository,
};
pub use crate::utils::error::Result;
