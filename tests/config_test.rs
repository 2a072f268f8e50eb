use anyhow::Result;
use rust_decimal::Decimal;
use solid_principles::app::assembler;
use solid_principles::utils::validation::Validate;
use solid_principles::{AppConfig, CsvTransactionRepository, UserId};
use tempfile::TempDir;

#[test]
fn test_config_file_drives_assembly() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let data_path = temp_dir.path().join("transactions.csv");
    let ledger_path = temp_dir.path().join("ledger.txt");
    let config_path = temp_dir.path().join("solid.toml");

    std::fs::write(
        &config_path,
        format!(
            r#"
[repository]
kind = "file"
path = "{}"

[ledger]
path = "{}"
tax_rate = 2

[logging]
format = "json"
"#,
            data_path.to_string_lossy().replace('\\', "/"),
            ledger_path.to_string_lossy().replace('\\', "/"),
        ),
    )?;

    let config = AppConfig::from_file(&config_path)?;
    config.validate()?;
    assert!(config.json_logs());

    let service = assembler::build_transaction_service(&config)?;
    let id = UserId::from("u1");
    service.process_transaction(&id, Decimal::new(10000, 2))?;
    service.process_transaction(&id, Decimal::new(-550, 2))?;

    let rows = CsvTransactionRepository::new(&data_path).load_all()?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].user_id, id);
    assert_eq!(rows[0].value.to_string(), "100.00");

    let transaction = assembler::new_transaction(&config, Decimal::from(3), "a", "b")?;
    let ledger = assembler::build_ledger(&config)?;
    ledger.save(&transaction)?;
    assert_eq!(ledger.load()?.value_with_tax, Decimal::from(6));

    Ok(())
}

#[test]
fn test_invalid_config_file_cannot_record() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let ledger_path = temp_dir.path().join("database.txt");
    let config_path = temp_dir.path().join("solid.toml");
    std::fs::write(
        &config_path,
        format!(
            "[ledger]\npath = \"{}\"\ntax_rate = -3\n",
            ledger_path.to_string_lossy().replace('\\', "/")
        ),
    )?;

    let config = AppConfig::from_file(&config_path)?;
    assert!(assembler::new_transaction(&config, Decimal::from(5), "a", "b").is_err());
    assert!(assembler::build_ledger(&config).is_err());
    assert!(!ledger_path.exists());

    Ok(())
}

#[test]
fn test_missing_config_file_is_io_error() {
    let result = AppConfig::from_file("/definitely/not/here/solid.toml");
    assert!(matches!(
        result,
        Err(solid_principles::SolidError::IoError(_))
    ));
}
