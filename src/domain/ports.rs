use crate::domain::model::{PaymentReceipt, UserId};
use crate::utils::error::Result;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Decides whether an amount may be persisted. Must be pure.
pub trait TransactionValidator: Send + Sync {
    fn validate(&self, value: Decimal) -> bool;
}

/// Records an already-validated amount against its originator.
pub trait TransactionRepository: Send + Sync {
    fn save(&self, user_id: &UserId, value: Decimal) -> Result<()>;
}

pub trait PaymentMethod: Send + Sync {
    fn name(&self) -> &'static str;
    fn process(&self, value: Decimal) -> PaymentReceipt;
}

pub trait RemoteFile {
    fn name(&self) -> &str;
    fn download(&self) -> Vec<u8>;
}

pub trait EditableFile: RemoteFile {
    fn update(&mut self, content: &[u8]);
}

pub trait ReadRepository {
    fn list(&self) -> Vec<String>;
}

pub trait WriteRepository {
    fn save(&self, name: &str) -> String;
    fn update(&self, old_name: &str, new_name: &str) -> String;
}

macro_rules! forward_pointer_impls {
    ($($ptr:ty),*) => {
        $(
            impl<T: TransactionValidator + ?Sized> TransactionValidator for $ptr {
                fn validate(&self, value: Decimal) -> bool {
                    (**self).validate(value)
                }
            }

            impl<T: TransactionRepository + ?Sized> TransactionRepository for $ptr {
                fn save(&self, user_id: &UserId, value: Decimal) -> Result<()> {
                    (**self).save(user_id, value)
                }
            }
        )*
    };
}

forward_pointer_impls!(&T, Box<T>, Arc<T>);
