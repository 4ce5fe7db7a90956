use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_LOG_DIRECTIVE: &str = "bbq_salt=warn";

/// Picks the filter directive when `RUST_LOG` is not set.
pub fn filter_directive(verbose: bool, level: Option<&str>) -> String {
    if verbose {
        return "bbq_salt=debug,info".to_string();
    }
    match level {
        Some(level) if level.contains('=') => level.to_string(),
        Some(level) => format!("bbq_salt={}", level),
        None => DEFAULT_LOG_DIRECTIVE.to_string(),
    }
}

// stdout belongs to the prompts, so logs go to stderr.
pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose, level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
