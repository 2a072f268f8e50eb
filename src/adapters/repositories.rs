use crate::core::{Result, TransactionRecord, TransactionRepository, UserId};
use crate::utils::error::SolidError;
use rust_decimal::Decimal;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

fn lock<'a, T>(mutex: &'a Mutex<T>, what: &str) -> Result<MutexGuard<'a, T>> {
    mutex.lock().map_err(|_| SolidError::PersistenceError {
        message: format!("{} lock poisoned", what),
    })
}

/// Writes one line per saved transaction to an output sink.
pub struct ConsoleTransactionRepository<W: Write + Send = std::io::Stdout> {
    sink: Mutex<W>,
}

impl ConsoleTransactionRepository {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> ConsoleTransactionRepository<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink: Mutex::new(sink),
        }
    }

    pub fn into_inner(self) -> Result<W> {
        self.sink.into_inner().map_err(|_| SolidError::PersistenceError {
            message: "console sink lock poisoned".to_string(),
        })
    }
}

impl<W: Write + Send> TransactionRepository for ConsoleTransactionRepository<W> {
    fn save(&self, user_id: &UserId, value: Decimal) -> Result<()> {
        tracing::debug!("Writing transaction for {} to console sink", user_id);
        let mut sink = lock(&self.sink, "console sink")?;
        writeln!(
            sink,
            "Saving transaction from user {} with value {}",
            user_id, value
        )?;
        sink.flush()?;
        Ok(())
    }
}

/// Keeps saved transactions in memory. Safe to share between threads.
#[derive(Debug, Default)]
pub struct InMemoryTransactionRepository {
    records: Mutex<Vec<TransactionRecord>>,
}

impl InMemoryTransactionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<TransactionRecord> {
        match self.records.lock() {
            Ok(records) => records.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TransactionRepository for InMemoryTransactionRepository {
    fn save(&self, user_id: &UserId, value: Decimal) -> Result<()> {
        tracing::debug!("Storing transaction for {} in memory", user_id);
        lock(&self.records, "in-memory store")?
            .push(TransactionRecord::new(user_id.clone(), value));
        Ok(())
    }
}

/// Appends `user_id,value,recorded_at` rows to a CSV file.
///
/// The header is written only when the file is created or empty.
#[derive(Debug)]
pub struct CsvTransactionRepository {
    path: PathBuf,
    write_guard: Mutex<()>,
}

impl CsvTransactionRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_guard: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads back every row written so far.
    pub fn load_all(&self) -> Result<Vec<TransactionRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut records = Vec::new();
        for row in reader.deserialize() {
            records.push(row?);
        }
        Ok(records)
    }
}

impl TransactionRepository for CsvTransactionRepository {
    fn save(&self, user_id: &UserId, value: Decimal) -> Result<()> {
        let _guard = lock(&self.write_guard, "csv file")?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let needs_header = file.metadata()?.len() == 0;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(file);
        writer.serialize(TransactionRecord::new(user_id.clone(), value))?;
        writer.flush()?;

        tracing::debug!(
            "Appended transaction for {} to {}",
            user_id,
            self.path.display()
        );
        Ok(())
    }
}

/// Appends one JSON object per line (`{"user_id":..,"value":..,"recorded_at":..}`).
#[derive(Debug)]
pub struct JsonLinesTransactionRepository {
    path: PathBuf,
    write_guard: Mutex<()>,
}

impl JsonLinesTransactionRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_guard: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads back every line written so far. Blank lines are skipped.
    pub fn load_all(&self) -> Result<Vec<TransactionRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        let mut records = Vec::new();
        for line in content.lines().filter(|l| !l.trim().is_empty()) {
            records.push(serde_json::from_str(line)?);
        }
        Ok(records)
    }
}

impl TransactionRepository for JsonLinesTransactionRepository {
    fn save(&self, user_id: &UserId, value: Decimal) -> Result<()> {
        let _guard = lock(&self.write_guard, "jsonl file")?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let line = serde_json::to_string(&TransactionRecord::new(user_id.clone(), value))?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)?;

        tracing::debug!(
            "Appended transaction for {} to {}",
            user_id,
            self.path.display()
        );
        Ok(())
    }
}
