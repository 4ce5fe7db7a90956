use anyhow::Context;
use bbq_salt::core::presenter::{banner, run_demo, section_heading};
use bbq_salt::domain::ports::Console;
use bbq_salt::utils::logger;
use bbq_salt::{run_interactive, AppSettings, CliConfig, SessionOutcome, TerminalConsole};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入設定 (CLI > TOML > 預設值)
    let settings = match AppSettings::load(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_cli_logger(settings.verbose, settings.log_level.as_deref());
    tracing::debug!("Settings: {:?}", settings);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start the async runtime")?;
    let outcome = runtime.block_on(run(&settings));
    // A stdin read left behind by Ctrl-C can't be cancelled.
    runtime.shutdown_background();

    match outcome? {
        SessionOutcome::Completed(result) => {
            tracing::info!(
                "Session completed: {} tsp additional kosher salt",
                result.additional_kosher_salt_tsp
            );
        }
        SessionOutcome::Aborted => tracing::info!("Session aborted on invalid input"),
        SessionOutcome::Cancelled => tracing::info!("Session cancelled"),
    }

    Ok(())
}

async fn run(settings: &AppSettings) -> anyhow::Result<SessionOutcome> {
    let mut console = TerminalConsole::stdio();

    console.write_line(&banner()).await?;

    if settings.show_demo {
        run_demo(&mut console, settings.json).await?;
    }

    console
        .write_line(&section_heading("CUSTOM CALCULATOR", 50))
        .await?;

    let outcome = run_interactive(&mut console, settings.session_options()).await?;
    Ok(outcome)
}
