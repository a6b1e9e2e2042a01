use clap::Parser;
use lang_practice::utils::error::PracticeError;
use lang_practice::utils::{logger, validation::Validate};
use lang_practice::{CliConfig, PracticeRunner};

fn fail(stage: &str, e: &PracticeError) -> ! {
    tracing::error!(
        "❌ {} failed: {} (Severity: {:?})",
        stage,
        e,
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    std::process::exit(e.severity().exit_code());
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting lang-practice");
    tracing::debug!("CLI config: {:?}", cli);

    if cli.list {
        PracticeRunner::write_catalog(&mut std::io::stdout())?;
        return Ok(());
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => fail("Loading configuration", &e),
    };

    if let Err(e) = config.validate() {
        fail("Configuration validation", &e);
    }

    let runner = PracticeRunner::from_settings(&config);
    tracing::debug!(sections = ?runner.sections(), "practices selected");

    let mut stdout = std::io::stdout();
    if let Err(e) = runner.run(&mut stdout).await {
        fail("Practice run", &e);
    }

    tracing::info!("✅ All practices finished");
    Ok(())
}
