use crate::adapters::{
    ConsoleTransactionRepository, CsvTransactionRepository, InMemoryTransactionRepository,
    JsonLinesTransactionRepository, PositiveAmountValidator, TransactionLedger,
};
use crate::config::toml_config::AppConfig;
use crate::core::transaction_service::TransactionService;
use crate::core::{Transaction, TransactionRepository};
use crate::utils::error::{Result, SolidError};
use crate::utils::validation::{validate_required_field, Validate};
use rust_decimal::Decimal;

pub type ConfiguredTransactionService =
    TransactionService<PositiveAmountValidator, Box<dyn TransactionRepository>>;

/// Picks the repository named by `repository.kind`.
pub fn build_repository(config: &AppConfig) -> Result<Box<dyn TransactionRepository>> {
    let repository: Box<dyn TransactionRepository> = match config.repository.kind.as_str() {
        "console" => Box::new(ConsoleTransactionRepository::stdout()),
        "memory" => Box::new(InMemoryTransactionRepository::new()),
        "file" => {
            let path = validate_required_field("repository.path", &config.repository.path)?;
            Box::new(CsvTransactionRepository::new(path))
        }
        "jsonl" => {
            let path = validate_required_field("repository.path", &config.repository.path)?;
            Box::new(JsonLinesTransactionRepository::new(path))
        }
        other => {
            return Err(SolidError::InvalidConfigValueError {
                field: "repository.kind".to_string(),
                value: other.to_string(),
                reason: "Unsupported repository kind".to_string(),
            })
        }
    };
    tracing::debug!("Using {} transaction repository", config.repository.kind);
    Ok(repository)
}

pub fn build_transaction_service(config: &AppConfig) -> Result<ConfiguredTransactionService> {
    config.validate()?;
    Ok(TransactionService::new(
        PositiveAmountValidator,
        build_repository(config)?,
    ))
}

pub fn build_ledger(config: &AppConfig) -> Result<TransactionLedger> {
    config.validate()?;
    Ok(TransactionLedger::new(&config.ledger.path))
}

/// Builds a transaction taxed with `ledger.tax_rate`. Fails on an invalid config.
pub fn new_transaction(
    config: &AppConfig,
    value: Decimal,
    from: impl Into<String>,
    to: impl Into<String>,
) -> Result<Transaction> {
    config.validate()?;
    Ok(Transaction::with_tax(value, from, to, config.ledger.tax_rate))
}
