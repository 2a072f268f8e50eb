use anyhow::Context;
use clap::Parser;
use solid_principles::adapters::{payment_method_by_name, CityRepository, TransactionLogger};
use solid_principles::app::assembler;
use solid_principles::core::checkout::Checkout;
use solid_principles::core::ReadRepository;
use solid_principles::utils::logger;
use solid_principles::utils::validation::Validate;
use solid_principles::{AppConfig, CliConfig, Command, SolidError, UserId};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("failed to load config file '{}'", path))?,
        None => AppConfig::default(),
    };

    if cli.json_logs || config.json_logs() {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(cli.command, &config) {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        std::process::exit(e.severity().exit_code());
    }

    Ok(())
}

fn run(command: Command, config: &AppConfig) -> Result<(), SolidError> {
    config.validate()?;

    match command {
        Command::Process { user_id, amount } => {
            let service = assembler::build_transaction_service(config)?;
            let user_id = user_id.map(UserId::from).unwrap_or_else(UserId::generate);

            if !service.try_process(&user_id, amount)? {
                println!("Amount {} rejected; nothing was saved", amount);
            }
        }
        Command::Pay { method, amount } => {
            let method = payment_method_by_name(&method)?;
            let mut checkout = Checkout::new();
            println!("{}", checkout.pay(method.as_ref(), amount));
        }
        Command::Record { from, to, amount } => {
            let transaction = assembler::new_transaction(config, amount, from, to)?;
            TransactionLogger::stdout().log(&transaction)?;

            let ledger = assembler::build_ledger(config)?;
            ledger.save(&transaction)?;
            tracing::info!("📁 Ledger saved to: {}", ledger.path().display());
        }
        Command::Cities => {
            for city in CityRepository.list() {
                println!("{}", city);
            }
        }
    }
    Ok(())
}
