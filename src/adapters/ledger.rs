use crate::core::{Result, Transaction};
use crate::utils::error::SolidError;
use std::io::Write;
use std::path::{Path, PathBuf};

fn format_line(transaction: &Transaction) -> String {
    format!(
        "{},{},{},{}",
        transaction.value, transaction.value_with_tax, transaction.from, transaction.to
    )
}

/// Writes a human-readable line per transaction. Never persists anything.
pub struct TransactionLogger<W: Write> {
    sink: W,
}

impl TransactionLogger<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> TransactionLogger<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    pub fn log(&mut self, transaction: &Transaction) -> Result<()> {
        writeln!(self.sink, "{}", format_line(transaction))?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

/// Stores a single transaction as a CSV row, replacing whatever the file held.
#[derive(Debug, Clone)]
pub struct TransactionLedger {
    path: PathBuf,
}

impl TransactionLedger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self, transaction: &Transaction) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;
        writer.write_record([
            transaction.value.to_string(),
            transaction.value_with_tax.to_string(),
            transaction.from.clone(),
            transaction.to.clone(),
        ])?;
        writer.flush()?;
        tracing::debug!("Ledger written to {}", self.path.display());
        Ok(())
    }

    pub fn load(&self) -> Result<Transaction> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;
        let row = reader
            .records()
            .next()
            .transpose()?
            .ok_or_else(|| SolidError::PersistenceError {
                message: format!("ledger {} is empty", self.path.display()),
            })?;

        let decimal = |idx: usize| -> Result<rust_decimal::Decimal> {
            let raw = row.get(idx).unwrap_or_default();
            raw.parse().map_err(|e| SolidError::PersistenceError {
                message: format!("invalid amount '{}' in ledger: {}", raw, e),
            })
        };

        Ok(Transaction {
            value: decimal(0)?,
            value_with_tax: decimal(1)?,
            from: row.get(2).unwrap_or_default().to_string(),
            to: row.get(3).unwrap_or_default().to_string(),
        })
    }
}
