use clap::Parser;
use vin_lookup::utils::error::ErrorSeverity;
use vin_lookup::utils::{logger, validation::Validate};
use vin_lookup::{CliConfig, LookupEngine, LookupOutcome, NhtsaClient, Page, Session, Settings};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting vin-lookup");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let settings = match Settings::resolve(&config).and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let client = match NhtsaClient::from_config(&settings) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(
                "❌ Could not build lookup client: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            let code = if e.severity() == ErrorSeverity::Critical { 3 } else { 1 };
            std::process::exit(code);
        }
    };

    let page = Page::from_config(&settings);
    let username = config.name.clone().unwrap_or_default();
    let mut session = Session::new(LookupEngine::new(client), page, username);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &config.vin {
        Some(vin) => {
            let outcome = session.run_once(&mut out, vin).await?;
            if let LookupOutcome::Failed(e) = &outcome {
                tracing::debug!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            }
            let code = outcome.exit_code();
            if code > 0 {
                std::process::exit(code);
            }
        }
        None => {
            let stdin = std::io::stdin();
            let submitted = session.run_interactive(stdin.lock(), &mut out).await?;
            tracing::info!("Session ended after {} lookup(s)", submitted);
        }
    }

    Ok(())
}
