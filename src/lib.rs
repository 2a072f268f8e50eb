pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::{
    ConsoleTransactionRepository, CsvTransactionRepository, InMemoryTransactionRepository,
    JsonLinesTransactionRepository, PositiveAmountValidator,
};
pub use config::toml_config::AppConfig;
pub use crate::core::{
    transaction_service::TransactionService, TransactionRepository, TransactionValidator, UserId,
};
pub use utils::error::{Result, SolidError};
