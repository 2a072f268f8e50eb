pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use rust_decimal::Decimal;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "solid")]
#[command(about = "SOLID design principles, one runnable example per principle")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Validate an amount and store it if it is positive
    Process {
        /// Originator token; a random UUID is used when omitted
        #[arg(long)]
        user_id: Option<String>,

        #[arg(long, allow_negative_numbers = true)]
        amount: Decimal,
    },
    /// Pay an amount with one of the available payment methods
    Pay {
        #[arg(long, default_value = "cash")]
        method: String,

        #[arg(long, allow_negative_numbers = true)]
        amount: Decimal,
    },
    /// Log a transfer and write it to the ledger file
    Record {
        #[arg(long)]
        from: String,

        #[arg(long)]
        to: String,

        #[arg(long, allow_negative_numbers = true)]
        amount: Decimal,
    },
    /// List the known cities
    Cities,
}
