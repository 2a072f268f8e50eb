// Adapters layer: concrete implementations of the domain ports.

pub mod files;
pub mod ledger;
pub mod names;
pub mod payments;
pub mod repositories;
pub mod validators;

pub use files::{DocxFile, PdfFile};
pub use ledger::{TransactionLedger, TransactionLogger};
pub use names::{CityRepository, UserRepository};
pub use payments::{payment_method_by_name, CashPayment, CreditCardPayment, DebitCardPayment};
pub use repositories::{
    ConsoleTransactionRepository, CsvTransactionRepository, InMemoryTransactionRepository,
    JsonLinesTransactionRepository,
};
pub use validators::PositiveAmountValidator;
