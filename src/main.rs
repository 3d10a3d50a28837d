use anyhow::Context;
use clap::Parser;
use cricket_scorer::core::ConfigProvider;
use cricket_scorer::utils::error::ErrorSeverity;
use cricket_scorer::utils::{logger, validation::Validate};
use cricket_scorer::{CliConfig, LocalStorage, MatchConfig, MatchSetup, ScorerError, ScoringConsole};

fn exit_with(e: &ScorerError) -> ! {
    tracing::error!(
        "❌ Scorer stopped: {} (Severity: {:?})",
        e,
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

fn load_setup(config: &CliConfig) -> anyhow::Result<(MatchSetup, String)> {
    match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading match setup from: {}", path);
            let file_config = MatchConfig::from_file(path)
                .with_context(|| format!("failed to load match file '{}'", path))?;
            if let Err(e) = file_config.validate() {
                exit_with(&e);
            }
            Ok((
                MatchSetup::from_config(&file_config),
                file_config.output_path().to_string(),
            ))
        }
        None => {
            if let Err(e) = config.validate() {
                exit_with(&e);
            }
            Ok((
                MatchSetup::from_config(config),
                config.output_path().to_string(),
            ))
        }
    }
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    let (setup, output_path) = load_setup(&config)?;
    tracing::info!(
        "🏏 {} vs {} over {} overs",
        setup.batting_first.name,
        setup.bowling_first.name,
        setup.max_overs
    );

    let storage = LocalStorage::new(output_path);
    let mut console = match ScoringConsole::new(setup, storage) {
        Ok(console) => console,
        Err(e) => exit_with(&e),
    };

    println!("Type 'help' for commands.");
    let stdin = std::io::stdin();
    if let Err(e) = console.run(stdin.lock(), std::io::stdout()) {
        exit_with(&e);
    }

    tracing::info!("✅ Scoring session closed");
    Ok(())
}
