use crate::utils::error::{Result, SolidError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

pub const REPOSITORY_KINDS: [&str; 4] = ["console", "memory", "file", "jsonl"];
pub const LOG_FORMATS: [&str; 2] = ["compact", "json"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub repository: RepositoryConfig,
    pub ledger: LedgerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryConfig {
    pub kind: String,
    pub path: Option<String>,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            kind: "console".to_string(),
            path: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    pub path: String,
    pub tax_rate: Decimal,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            path: "database.txt".to_string(),
            tax_rate: Decimal::from(crate::domain::model::DEFAULT_TAX),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: "compact".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SolidError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let re = PATTERN.get_or_init(|| {
            Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn json_logs(&self) -> bool {
        self.logging.format == "json"
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_one_of("repository.kind", &self.repository.kind, &REPOSITORY_KINDS)?;

        if matches!(self.repository.kind.as_str(), "file" | "jsonl") {
            let path = validation::validate_required_field("repository.path", &self.repository.path)?;
            validation::validate_path("repository.path", path)?;
        }

        validation::validate_path("ledger.path", &self.ledger.path)?;
        validation::validate_not_negative("ledger.tax_rate", self.ledger.tax_rate)?;
        validation::validate_one_of("logging.format", &self.logging.format, &LOG_FORMATS)?;

        Ok(())
    }
}
